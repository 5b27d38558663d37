//! # Configuração do Driver Random
//!
//! Define constantes e configurações globais do dispositivo `/dev/random`
//! e dos colaboradores que ele usa (DeviceSwitch, cópia de usuário).

// =============================================================================
// GERADOR
// =============================================================================

/// Seed inicial do gerador após o boot.
///
/// Fixa (não derivada de tempo nem de hardware): a sequência é reproduzível
/// de boot para boot até alguém escrever uma nova seed.
pub const RANDOM_DEFAULT_SEED: u8 = 0x2A;

/// Máximo de bytes entregues por chamada de `read`.
///
/// Limita o tempo em que o lock da seed fica retido.
pub const RANDOM_MAX_READ: usize = 8;

/// Nome do spinlock da seed (aparece em logs e debug)
pub const RANDOM_LOCK_NAME: &str = "rand";

// =============================================================================
// DEVICE SWITCH
// =============================================================================

/// Número de slots na tabela de dispositivos (major numbers 0..NDEV)
pub const NDEV: usize = 10;

/// Major number do dispositivo random
pub const RANDOM_MAJOR: u32 = 2;

// =============================================================================
// ESPAÇO DE USUÁRIO
// =============================================================================

/// Fim do espaço de usuário (x86_64 canonical, bit 47 limpo)
pub const USER_SPACE_END: usize = 0x0000_8000_0000_0000;
