//! Character Device - Dispositivos de caractere
//!
//! O par `read`/`write` é o que o `DeviceSwitch` despacha para cada major.

use super::device::Device;
use crate::mm::uaccess::{UserIn, UserOut};
use crate::syscall::error::{SysError, SysResult};

/// Trait para dispositivos de caractere
pub trait CharDevice: Device {
    /// Lê até `n` bytes para `dst`.
    ///
    /// Retorna quantos bytes foram copiados. Uma contagem menor que `n` não
    /// é erro: é o sinal de falha parcial da convenção de read.
    fn read(&self, _dst: &mut dyn UserOut, _n: usize) -> SysResult<usize> {
        Err(SysError::NotImplemented)
    }

    /// Escreve `n` bytes vindos de `src`.
    fn write(&self, _src: &dyn UserIn, _n: usize) -> SysResult<usize> {
        Err(SysError::NotImplemented)
    }
}
