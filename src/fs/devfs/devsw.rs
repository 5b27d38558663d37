//! Device Switch - Tabela de drivers de caractere por major number
//!
//! Cada slot guarda o driver que atende `read`/`write` para aquele major.
//! A syscall de IO só conhece o major do arquivo; o resto é despachado
//! por aqui.

use alloc::sync::Arc;

use spin::RwLock;

use super::char_device::CharDevice;
use crate::config::NDEV;
use crate::mm::uaccess::{UserIn, UserOut};
use crate::syscall::error::{SysError, SysResult};

/// Tabela de dispositivos de caractere
pub struct DeviceSwitch {
    slots: RwLock<[Option<Arc<dyn CharDevice>>; NDEV]>,
}

impl DeviceSwitch {
    /// Cria uma tabela vazia
    pub const fn new() -> Self {
        const NONE: Option<Arc<dyn CharDevice>> = None;
        Self {
            slots: RwLock::new([NONE; NDEV]),
        }
    }

    /// Índice do slot para `major`
    fn slot(major: u32) -> SysResult<usize> {
        let idx = major as usize;
        if idx >= NDEV {
            return Err(SysError::InvalidArgument);
        }
        Ok(idx)
    }

    /// Registra um driver no slot `major`
    pub fn register(&self, major: u32, device: Arc<dyn CharDevice>) -> SysResult<()> {
        let idx = Self::slot(major)?;
        let mut slots = self.slots.write();
        if slots[idx].is_some() {
            crate::kwarn!("(DevSw) Slot ocupado, major=", major);
            return Err(SysError::AlreadyExists);
        }

        slots[idx] = Some(device);
        crate::kdebug!("(DevSw) Driver registrado, major=", major);
        Ok(())
    }

    /// Remove o driver do slot `major`
    pub fn unregister(&self, major: u32) -> SysResult<Arc<dyn CharDevice>> {
        let idx = Self::slot(major)?;
        self.slots.write()[idx].take().ok_or(SysError::NotFound)
    }

    /// Busca o driver do slot `major`
    pub fn lookup(&self, major: u32) -> Option<Arc<dyn CharDevice>> {
        let idx = Self::slot(major).ok()?;
        self.slots.read()[idx].clone()
    }

    /// Despacha um `read` para o driver de `major`
    pub fn read(&self, major: u32, dst: &mut dyn UserOut, n: usize) -> SysResult<usize> {
        // Clona o Arc para não segurar o lock da tabela durante o IO
        let device = self.lookup(major).ok_or(SysError::NotFound)?;
        device.read(dst, n)
    }

    /// Despacha um `write` para o driver de `major`
    pub fn write(&self, major: u32, src: &dyn UserIn, n: usize) -> SysResult<usize> {
        let device = self.lookup(major).ok_or(SysError::NotFound)?;
        device.write(src, n)
    }
}

impl Default for DeviceSwitch {
    fn default() -> Self {
        Self::new()
    }
}
