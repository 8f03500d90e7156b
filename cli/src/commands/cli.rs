use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use keygate_core::keygen::DEFAULT_MAX_ROUNDS;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "keygate", version, about = "Key-gated access to a protected program")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (defaults to ./keygate.toml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct UnlockArgs {
    /// Override `gate.max_attempts`.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct CheckArgs {
    /// Key to evaluate (surrounding whitespace is ignored).
    pub key: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct GenerateArgs {
    /// Seed for deterministic output; a random one is used when omitted.
    #[arg(long)]
    pub seed: Option<String>,

    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub count: u64,

    /// Candidates tried per key before giving up.
    #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
    pub max_rounds: u64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Prompt for a key, then open the protected menu (default).
    Unlock(UnlockArgs),
    /// Evaluate one key without prompting.
    Check(CheckArgs),
    /// Print keys that pass the acceptance rule.
    Generate(GenerateArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Unlock(UnlockArgs::default())
    }
}
