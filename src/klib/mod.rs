//! Kernel Library (KLib).
//!
//! Utilitários agnósticos de hardware para uso interno do Kernel.

pub mod lfsr;

pub use lfsr::Lfsr8;
