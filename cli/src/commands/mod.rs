pub mod check;
pub mod cli;
pub mod generate;
pub mod unlock;

use std::path::Path;

use keygate_core::config::{self, AppConfig};
use keygate_core::error::ConfigError;

/// Loads config (explicit path, else `keygate.toml`, else defaults) and
/// applies command-line overrides.
pub fn load_config(path: Option<&Path>, cmd: &cli::Commands) -> Result<AppConfig, ConfigError> {
    let mut cfg = match path {
        Some(p) => config::load_from_path(p)?,
        None => config::load_default()?,
    };

    if let cli::Commands::Unlock(unlock) = cmd {
        if let Some(n) = unlock.max_attempts {
            cfg.gate.max_attempts = n;
            cfg.validate()?;
        }
    }
    Ok(cfg)
}
