//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `keygate_core::api` instead of reaching into internal modules.

pub use crate::acceptance::{evaluate, AcceptanceTest, AcceptanceVerdict, DigestRule, VerdictReason};
pub use crate::config::{AcceptanceProvider, AppConfig, GateConfig, LoggingConfig};
pub use crate::error::{CliError, ConfigError, GateError};
pub use crate::gate::{
    AbortCause, GateController, GateEvent, GateOutcome, GateReporter, InputEvent, LineInput,
    ProtectedFeature,
};
pub use crate::keygen::{generate_key, generate_keys, GeneratedKey, DEFAULT_MAX_ROUNDS};
