//! Testes para o módulo de dispositivos
//!
//! # Como Executar os Testes
//!
//! ```bash
//! # Executar todos os testes de dispositivos
//! cargo test --lib fs::tests
//!
//! # Executar testes de um módulo específico
//! cargo test --lib fs::tests::random
//! ```
//!
//! # Estrutura dos Testes
//!
//! - `devfs.rs` - DeviceNumber, DeviceSwitch, DevFS
//! - `random.rs` - Contrato read/write do /dev/random
//! - `stress.rs` - Leituras e escritas concorrentes
//! - `integration.rs` - Caminho completo pela camada de syscall
//!
//! # Convenções
//!
//! - Prefixo `test_` para testes unitários
//! - Prefixo `integration_` para testes de integração
//! - Prefixo `stress_` para testes multi-thread

#![cfg(test)]

pub mod integration;
pub mod random;

pub use crate::fs::devfs::DevFS;
use crate::mm::user::{PageFlags, UserMemory};

/// Base das regiões de usuário usadas nos testes
pub const USER_BASE: usize = 0x0040_0000;

/// Helper: Cria um DevFS para testes
pub fn create_test_devfs() -> DevFS {
    DevFS::new().expect("DevFS com dispositivos essenciais")
}

/// Helper: Espaço de usuário com `len` bytes RW mapeados em `USER_BASE`
pub fn create_user_memory(len: usize) -> UserMemory {
    let mem = UserMemory::new();
    mem.map(USER_BASE, len, PageFlags::USER_RW)
        .expect("mapeamento de teste");
    mem
}
