//! Interface com a camada de syscalls
//!
//! # Módulos
//!
//! - `error`: Códigos de erro (SysError)
//! - `io`: read/write de dispositivos de caractere

pub mod error;
pub mod io;

// Re-exports principais
pub use error::{result_to_isize, SysError, SysResult};
