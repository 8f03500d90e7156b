mod cli_error;
mod config_error;
mod gate_error;

pub use cli_error::CliError;
pub use config_error::ConfigError;
pub use gate_error::GateError;
