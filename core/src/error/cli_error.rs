// core/src/error/cli_error.rs
use thiserror::Error;

use super::{ConfigError, GateError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Gate(#[from] GateError),

    #[error("io error")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Command(String),
}
