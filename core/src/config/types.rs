use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub gate: GateConfig,

    #[serde(default)]
    pub acceptance: AcceptanceConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gate.max_attempts == 0 {
            return Err(ConfigError::Validation(
                "gate.max_attempts must be at least 1".to_string(),
            ));
        }
        if self.gate.exit_sentinel.trim().is_empty() {
            return Err(ConfigError::Validation(
                "gate.exit_sentinel must not be empty".to_string(),
            ));
        }

        let AcceptanceProvider::Digest(ref rule) = self.acceptance.provider;
        if rule.key_length == 0 {
            return Err(ConfigError::Validation(
                "acceptance.key_length must be at least 1".to_string(),
            ));
        }
        if rule.head_digits + rule.tail_letters > 64 {
            return Err(ConfigError::Validation(format!(
                "acceptance.head_digits + acceptance.tail_letters exceeds digest width ({} > 64)",
                rule.head_digits + rule.tail_letters
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "default_exit_sentinel")]
    pub exit_sentinel: String,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_exit_sentinel() -> String {
    "exit".to_string()
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            exit_sentinel: default_exit_sentinel(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptanceConfig {
    #[serde(flatten)]
    pub provider: AcceptanceProvider,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider")]
pub enum AcceptanceProvider {
    #[serde(rename = "digest")]
    Digest(DigestRuleConfig),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestRuleConfig {
    #[serde(default = "default_key_length")]
    pub key_length: usize,
    #[serde(default = "default_head_digits")]
    pub head_digits: usize,
    #[serde(default = "default_tail_letters")]
    pub tail_letters: usize,
}

// NOTE: DigestRuleConfig -> DigestRule lives in crate::acceptance so config
// stays free of rule logic.

fn default_key_length() -> usize { 24 }
fn default_head_digits() -> usize { 2 }
fn default_tail_letters() -> usize { 2 }

fn default_acceptance_provider() -> AcceptanceProvider {
    AcceptanceProvider::Digest(DigestRuleConfig::default())
}

impl Default for DigestRuleConfig {
    fn default() -> Self {
        Self {
            key_length: default_key_length(),
            head_digits: default_head_digits(),
            tail_letters: default_tail_letters(),
        }
    }
}

impl Default for AcceptanceConfig {
    fn default() -> Self {
        Self {
            provider: default_acceptance_provider(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Optional log file; logs go to stderr only when unset.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
