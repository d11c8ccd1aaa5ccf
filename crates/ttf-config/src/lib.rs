//! Generator configuration (TOML).

pub mod config;

pub use config::{ForgeConfig, GenerationConfig, OracleBackendConfig, OracleConfig};
