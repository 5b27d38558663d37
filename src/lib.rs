//! Forge Random - Dispositivo de caractere pseudo-aleatório.
//!
//! Implementa o `/dev/random` do kernel Forge: um gerador LFSR de 8 bits
//! exposto a processos de usuário pela interface read/write de dispositivos.
//!
//! # Arquitetura
//!
//! ```text
//! syscall::io  ->  fs::devfs::DeviceSwitch  ->  RandomDevice  ->  klib::lfsr
//!                                               (Spinlock + mm::uaccess)
//! ```
//!
//! - Ler do dispositivo retorna no máximo 8 bytes por chamada.
//! - Escrever exatamente 1 byte redefine a seed. Qualquer outro tamanho
//!   falha com `InvalidArgument`.

#![cfg_attr(not(test), no_std)]

// Habilitar alocação dinâmica (Arc/Vec)
extern crate alloc;

// --- Infraestrutura ---
pub mod config; // Constantes do driver
pub mod core; // Logging
pub mod klib; // LFSR
pub mod mm; // Cópia user/kernel
pub mod sync; // Spinlock

// --- Subsistemas ---
pub mod fs; // DevFS e DeviceSwitch
pub mod syscall; // Erros e glue de syscall

pub use crate::fs::devfs::devices::random::RandomDevice;
pub use crate::fs::devfs::{DevFS, DeviceSwitch};
pub use crate::syscall::error::{SysError, SysResult};
