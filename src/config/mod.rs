//! Configuration module for Registrar
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (REGISTRAR_*)
//! 3. Project config (./registrar.toml)
//! 4. User config (<config_dir>/registrar/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, PROJECT_CONFIG_FILE};
pub use types::{
    Config, ConfigWarning, LogLevel, LoggingConfig, StorageConfig, DEFAULT_DATA_FILE,
};
