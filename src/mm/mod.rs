//! # Memory Management (MM)
//!
//! Apenas o necessário para drivers moverem bytes entre o kernel e o
//! chamador de uma syscall.
//!
//! | Módulo    | Responsabilidade |
//! |-----------|------------------|
//! | `uaccess` | Cópia verificada kernel <-> chamador (`UserOut`/`UserIn`). |
//! | `user`    | Espaço de endereçamento de usuário (regiões mapeadas + flags). |

pub mod uaccess;
pub mod user;

pub use uaccess::{AddressSpace, KernelBuf, KernelSlice, UserIn, UserOut, UserPtr};
pub use user::{PageFlags, UserMemory};
