//! # Synchronization Primitives
//!
//! Primitivas de sincronização para ambiente SMP.
//!
//! ## Regras
//!
//! - **Spinlock**: seções críticas curtas que NÃO podem dormir
//! - O guard libera o lock ao sair do escopo, inclusive em early return

/// Spinlock (busy-wait, não dorme)
pub mod spinlock;

pub use spinlock::{Spinlock, SpinlockGuard};
