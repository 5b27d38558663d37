//! DevFS - Device Filesystem
//!
//! Dispositivos de caractere do kernel (/dev) e a tabela que despacha
//! `read`/`write` para o driver de cada major number.
//!
//! # Módulos
//!
//! - `device` - Trait Device e tipos base
//! - `char_device` - Dispositivos de caractere (par read/write)
//! - `devsw` - Tabela de drivers por major (DeviceSwitch)
//! - `devices/*` - Implementações específicas

pub mod char_device;
pub mod device;
pub mod devices;
pub mod devsw;


use alloc::sync::Arc;

// Re-exports públicos
pub use char_device::CharDevice;
pub use device::{Device, DeviceNumber, DeviceType};
pub use devsw::DeviceSwitch;

use crate::config::RANDOM_MAJOR;
use crate::mm::uaccess::{UserIn, UserOut};
use crate::syscall::error::SysResult;
use devices::RandomDevice;

/// DevFS - Device Filesystem
pub struct DevFS {
    /// Tabela de drivers
    devsw: DeviceSwitch,
    /// /dev/random
    random: Arc<RandomDevice>,
}

impl DevFS {
    /// Cria uma nova instância de DevFS com os dispositivos essenciais
    pub fn new() -> SysResult<Self> {
        let devsw = DeviceSwitch::new();
        let random = devices::random::init(&devsw)?;

        crate::kinfo!("(DevFS) Dispositivos essenciais registrados");
        Ok(Self { devsw, random })
    }

    /// Tabela de drivers
    pub fn devsw(&self) -> &DeviceSwitch {
        &self.devsw
    }

    /// Instância do /dev/random
    pub fn random(&self) -> &Arc<RandomDevice> {
        &self.random
    }

    /// Lê de um dispositivo
    pub fn read(&self, major: u32, dst: &mut dyn UserOut, n: usize) -> SysResult<usize> {
        self.devsw.read(major, dst, n)
    }

    /// Escreve em um dispositivo
    pub fn write(&self, major: u32, src: &dyn UserIn, n: usize) -> SysResult<usize> {
        self.devsw.write(major, src, n)
    }
}

// Constantes de dispositivos

/// /dev/random - gerador LFSR (non-blocking)
pub const DEV_RANDOM: DeviceNumber = DeviceNumber::new(RANDOM_MAJOR, 0);
