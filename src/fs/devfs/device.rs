//! Device - Trait e tipos base para dispositivos

use crate::syscall::error::SysResult;

/// Tipo de dispositivo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    /// Dispositivo de caractere (char device)
    Character,
}

/// Número major/minor de dispositivo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceNumber {
    /// Major number (identifica o driver / slot no DeviceSwitch)
    pub major: u32,
    /// Minor number (identifica o dispositivo específico)
    pub minor: u32,
}

impl DeviceNumber {
    /// Cria um novo device number
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Converte para u64 (formato Linux: major << 20 | minor)
    pub const fn as_u64(&self) -> u64 {
        ((self.major as u64) << 20) | (self.minor as u64)
    }

    /// Cria a partir de u64
    pub const fn from_u64(dev: u64) -> Self {
        Self {
            major: (dev >> 20) as u32,
            minor: (dev & 0xFFFFF) as u32,
        }
    }
}

/// Trait para dispositivos
pub trait Device: Send + Sync {
    /// Retorna o nome do dispositivo
    fn name(&self) -> &str;

    /// Retorna o tipo de dispositivo
    fn device_type(&self) -> DeviceType;

    /// Retorna o device number
    fn device_number(&self) -> DeviceNumber;

    /// Abre o dispositivo
    fn open(&self) -> SysResult<()> {
        Ok(())
    }

    /// Fecha o dispositivo
    fn close(&self) -> SysResult<()> {
        Ok(())
    }
}
