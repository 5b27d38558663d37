//! Acesso a buffers do chamador (copy_to_user / copy_from_user)
//!
//! Drivers nunca tocam ponteiros crus. Toda transferência passa por
//! `UserOut` (kernel -> chamador) ou `UserIn` (chamador -> kernel), que
//! validam o destino antes de copiar e retornam `BadAddress` em vez de
//! causar page fault no kernel.
//!
//! Duas implementações:
//! - `KernelBuf` / `KernelSlice`: buffers do próprio kernel (confiáveis,
//!   só verificação de limites).
//! - `UserPtr`: endereço virtual fornecido pelo userspace (não confiável),
//!   validado contra `USER_SPACE_END` e contra o `AddressSpace` do processo.

use crate::config::USER_SPACE_END;
use crate::syscall::error::{SysError, SysResult};

/// Destino de uma cópia kernel -> chamador
pub trait UserOut {
    /// Copia `bytes` para o destino a partir de `offset`.
    ///
    /// A cópia é tudo-ou-nada: em caso de erro nenhum byte é escrito.
    fn copy_out(&mut self, offset: usize, bytes: &[u8]) -> SysResult<()>;
}

/// Origem de uma cópia chamador -> kernel
pub trait UserIn {
    /// Preenche `out` com bytes da origem a partir de `offset`.
    fn copy_in(&self, offset: usize, out: &mut [u8]) -> SysResult<()>;
}

/// Espaço de endereçamento de um processo.
///
/// Representa o page walk do kernel: valida mapeamento e permissões
/// de cada byte antes de copiar.
pub trait AddressSpace: Sync {
    /// Escreve `bytes` no endereço virtual `addr`
    fn write_bytes(&self, addr: usize, bytes: &[u8]) -> SysResult<()>;

    /// Lê `out.len()` bytes do endereço virtual `addr`
    fn read_bytes(&self, addr: usize, out: &mut [u8]) -> SysResult<()>;
}

// =============================================================================
// BUFFERS DO KERNEL
// =============================================================================

/// Buffer mutável do kernel
pub struct KernelBuf<'a>(pub &'a mut [u8]);

/// Buffer somente-leitura do kernel
pub struct KernelSlice<'a>(pub &'a [u8]);

/// Faixa `[offset, offset + len)` validada contra `size`
fn kernel_range(offset: usize, len: usize, size: usize) -> SysResult<core::ops::Range<usize>> {
    let end = offset.checked_add(len).ok_or(SysError::BadAddress)?;
    if end > size {
        return Err(SysError::BadAddress);
    }
    Ok(offset..end)
}

impl UserOut for KernelBuf<'_> {
    fn copy_out(&mut self, offset: usize, bytes: &[u8]) -> SysResult<()> {
        let range = kernel_range(offset, bytes.len(), self.0.len())?;
        self.0[range].copy_from_slice(bytes);
        Ok(())
    }
}

impl UserIn for KernelBuf<'_> {
    fn copy_in(&self, offset: usize, out: &mut [u8]) -> SysResult<()> {
        let range = kernel_range(offset, out.len(), self.0.len())?;
        out.copy_from_slice(&self.0[range]);
        Ok(())
    }
}

impl UserIn for KernelSlice<'_> {
    fn copy_in(&self, offset: usize, out: &mut [u8]) -> SysResult<()> {
        let range = kernel_range(offset, out.len(), self.0.len())?;
        out.copy_from_slice(&self.0[range]);
        Ok(())
    }
}

// =============================================================================
// PONTEIROS DE USUÁRIO
// =============================================================================

/// Buffer no espaço de usuário: `[addr, addr + len)` em `space`.
///
/// Criar um `UserPtr` não valida nada; cada cópia valida a sub-faixa
/// que realmente toca.
#[derive(Clone, Copy)]
pub struct UserPtr<'a> {
    space: &'a dyn AddressSpace,
    addr: usize,
    len: usize,
}

impl<'a> UserPtr<'a> {
    /// Cria um ponteiro de usuário
    pub fn new(space: &'a dyn AddressSpace, addr: usize, len: usize) -> Self {
        Self { space, addr, len }
    }

    /// Valida `[offset, offset + count)` e retorna o endereço virtual inicial
    fn checked_addr(&self, offset: usize, count: usize) -> SysResult<usize> {
        if self.addr == 0 {
            return Err(SysError::BadAddress);
        }

        let end_offset = offset.checked_add(count).ok_or(SysError::BadAddress)?;
        if end_offset > self.len {
            return Err(SysError::BadAddress);
        }

        let start = self.addr.checked_add(offset).ok_or(SysError::BadAddress)?;
        let end = start.checked_add(count).ok_or(SysError::BadAddress)?;
        if end > USER_SPACE_END {
            return Err(SysError::BadAddress);
        }

        Ok(start)
    }
}

impl UserOut for UserPtr<'_> {
    fn copy_out(&mut self, offset: usize, bytes: &[u8]) -> SysResult<()> {
        let addr = self.checked_addr(offset, bytes.len())?;
        self.space.write_bytes(addr, bytes)
    }
}

impl UserIn for UserPtr<'_> {
    fn copy_in(&self, offset: usize, out: &mut [u8]) -> SysResult<()> {
        let addr = self.checked_addr(offset, out.len())?;
        self.space.read_bytes(addr, out)
    }
}
