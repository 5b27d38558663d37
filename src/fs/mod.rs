//! Sistema de Arquivos de dispositivos.
//!
//! Submódulos:
//! - `devfs`: Dispositivos virtuais (/dev) e a tabela de drivers.

pub mod devfs;

#[cfg(test)]
mod tests;
