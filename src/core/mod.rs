//! Core Module
//!
//! Infraestrutura central do driver, independente de arquitetura.

pub mod logging;
