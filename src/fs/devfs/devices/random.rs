//! /dev/random - Gerador pseudo-aleatório LFSR de 8 bits
//!
//! # Semântica
//!
//! - `read(dst, n)`: até 8 bytes por chamada. Cada byte avança o LFSR uma
//!   vez; o novo estado é o byte entregue e também a próxima seed.
//! - `write(src, 1)`: substitui a seed pelo byte de `src` (reseed completo,
//!   sem mistura). Qualquer outro tamanho falha com `InvalidArgument`.
//! - Seed inicial: `0x2A`, fixa a cada boot.
//!
//! # Concorrência
//!
//! A seed vive atrás de um único spinlock, retido durante toda a operação,
//! incluindo a cópia para o chamador. Leituras e escritas são totalmente
//! serializadas. A cópia é síncrona (copia ou falha), então nada dorme com
//! o lock retido.
//!
//! # Segurança
//! ⚠️ NÃO é criptograficamente seguro. Sem pool de entropia.

use alloc::sync::Arc;

use crate::config::{RANDOM_DEFAULT_SEED, RANDOM_LOCK_NAME, RANDOM_MAJOR, RANDOM_MAX_READ};
use crate::fs::devfs::char_device::CharDevice;
use crate::fs::devfs::device::{Device, DeviceNumber, DeviceType};
use crate::fs::devfs::devsw::DeviceSwitch;
use crate::klib::lfsr;
use crate::mm::uaccess::{UserIn, UserOut};
use crate::sync::Spinlock;
use crate::syscall::error::{SysError, SysResult};

/// /dev/random device
pub struct RandomDevice {
    dev: DeviceNumber,
    seed: Spinlock<u8>,
}

impl RandomDevice {
    /// Cria um novo /dev/random com a seed padrão
    pub const fn new() -> Self {
        Self::with_seed(RANDOM_DEFAULT_SEED)
    }

    /// Cria um /dev/random com uma seed explícita
    pub const fn with_seed(seed: u8) -> Self {
        Self {
            dev: DeviceNumber::new(RANDOM_MAJOR, 0),
            seed: Spinlock::new(RANDOM_LOCK_NAME, seed),
        }
    }

    /// Seed atual (lida sob o lock)
    #[cfg(any(test, feature = "self_test"))]
    pub(crate) fn seed(&self) -> u8 {
        *self.seed.lock()
    }

    /// Lock da seed (para verificar que nenhum caminho o deixa retido)
    #[cfg(test)]
    pub(crate) fn seed_lock(&self) -> &Spinlock<u8> {
        &self.seed
    }
}

impl Default for RandomDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for RandomDevice {
    fn name(&self) -> &str {
        "random"
    }

    fn device_type(&self) -> DeviceType {
        DeviceType::Character
    }

    fn device_number(&self) -> DeviceNumber {
        self.dev
    }
}

impl CharDevice for RandomDevice {
    fn read(&self, dst: &mut dyn UserOut, n: usize) -> SysResult<usize> {
        let n = n.min(RANDOM_MAX_READ);
        let mut seed = self.seed.lock();

        let mut written = 0;
        while written < n {
            // A seed avança antes da cópia: um byte que falha ao copiar
            // ainda conta como consumido.
            *seed = lfsr::next(*seed);
            if dst.copy_out(written, &[*seed]).is_err() {
                crate::kdebug!("(Random) Leitura curta, bytes=", written);
                break;
            }
            written += 1;
        }

        Ok(written)
    }

    fn write(&self, src: &dyn UserIn, n: usize) -> SysResult<usize> {
        if n != 1 {
            crate::kdebug!("(Random) Write rejeitado, len=", n);
            return Err(SysError::InvalidArgument);
        }

        let mut seed = self.seed.lock();
        let mut byte = [0u8; 1];
        src.copy_in(0, &mut byte)?;
        *seed = byte[0];

        crate::ktrace!("(Random) Reseed=", byte[0]);
        Ok(1)
    }
}

/// Inicializa o /dev/random e registra no slot `RANDOM_MAJOR`.
///
/// A seed já é `0x2A` antes do registro, então nenhuma requisição é
/// atendida com estado não inicializado.
pub fn init(devsw: &DeviceSwitch) -> SysResult<Arc<RandomDevice>> {
    let device = Arc::new(RandomDevice::new());
    devsw.register(RANDOM_MAJOR, device.clone())?;

    crate::kok!("(Random) /dev/random registrado (LFSR 8-bit, seed 0x2A)");
    Ok(device)
}
