//! Códigos de Erro do Redstone OS
//!
//! Sistema de erros unificado para syscalls e drivers.
//! Erros são retornados ao userspace como valores negativos.

use core::fmt;

/// Enum de erros do sistema.
///
/// Valores são i32 para permitir representação negativa em isize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SysError {
    // === Erros Gerais (1-15) ===
    /// Operação não permitida
    PermissionDenied = 1,
    /// Objeto não encontrado
    NotFound = 2,
    /// Objeto já existe
    AlreadyExists = 3,
    /// Argumento inválido
    InvalidArgument = 4,

    // === Erros de Memória (32-47) ===
    /// Endereço inválido ou não mapeado
    BadAddress = 33,
    /// Região de memória em uso
    AddressInUse = 34,

    // === Erros de Sistema (240-255) ===
    /// Operação não implementada pelo dispositivo
    NotImplemented = 254,
    /// Erro desconhecido
    Unknown = 255,
}

impl SysError {
    /// Converte para isize negativo (formato de retorno da syscall)
    #[inline]
    pub fn as_isize(self) -> isize {
        -(self as i32 as isize)
    }

    /// Cria erro a partir de código negativo
    pub fn from_code(code: isize) -> Option<Self> {
        if code >= 0 {
            return None;
        }
        match code.unsigned_abs() {
            1 => Some(Self::PermissionDenied),
            2 => Some(Self::NotFound),
            3 => Some(Self::AlreadyExists),
            4 => Some(Self::InvalidArgument),
            33 => Some(Self::BadAddress),
            34 => Some(Self::AddressInUse),
            254 => Some(Self::NotImplemented),
            _ => Some(Self::Unknown),
        }
    }

    /// Descrição curta (sem alocação)
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PermissionDenied => "permission denied",
            Self::NotFound => "not found",
            Self::AlreadyExists => "already exists",
            Self::InvalidArgument => "invalid argument",
            Self::BadAddress => "bad address",
            Self::AddressInUse => "address in use",
            Self::NotImplemented => "not implemented",
            Self::Unknown => "unknown error",
        }
    }
}

impl fmt::Display for SysError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resultado de syscall: Ok(valor) ou Err(SysError)
pub type SysResult<T> = Result<T, SysError>;

/// Helper para converter SysResult<usize> em isize para retorno
pub fn result_to_isize(result: SysResult<usize>) -> isize {
    match result {
        Ok(val) => val as isize,
        Err(e) => e.as_isize(),
    }
}
