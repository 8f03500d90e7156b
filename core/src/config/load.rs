use std::path::Path;

use super::types::AppConfig;
use crate::error::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "keygate.toml";

const ENV_MAX_ATTEMPTS: &str = "KEYGATE_MAX_ATTEMPTS";
const ENV_EXIT_SENTINEL: &str = "KEYGATE_EXIT_SENTINEL";
const ENV_LOG_LEVEL: &str = "KEYGATE_LOG_LEVEL";

/// Loads `keygate.toml` from the working directory (defaults when absent),
/// then applies env overrides.
pub fn load_default() -> Result<AppConfig, ConfigError> {
    let cfg = if Path::new(DEFAULT_CONFIG_FILE).exists() {
        read_file(Path::new(DEFAULT_CONFIG_FILE))?
    } else {
        AppConfig::default()
    };
    finish(cfg)
}

pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let cfg = read_file(path)?;
    finish(cfg)
}

fn read_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let cfg = toml::from_str::<AppConfig>(&s).map_err(ConfigError::Parse)?;
    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(cfg)
}

fn finish(mut cfg: AppConfig) -> Result<AppConfig, ConfigError> {
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;
    cfg.validate()?;
    Ok(cfg)
}

pub(crate) fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = non_empty(lookup(ENV_MAX_ATTEMPTS)) {
        cfg.gate.max_attempts = v.parse().map_err(|source| ConfigError::EnvInvalid {
            key: ENV_MAX_ATTEMPTS.to_string(),
            source,
        })?;
    }
    if let Some(v) = non_empty(lookup(ENV_EXIT_SENTINEL)) {
        cfg.gate.exit_sentinel = v;
    }
    if let Some(v) = non_empty(lookup(ENV_LOG_LEVEL)) {
        cfg.logging.level = v;
    }
    Ok(())
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
