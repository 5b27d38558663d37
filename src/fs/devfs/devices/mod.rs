//! Devices - Implementações de dispositivos específicos

pub mod random;

// Re-exports para facilitar uso
pub use random::RandomDevice;
