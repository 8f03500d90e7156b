use clap::Parser;
mod commands;
mod logging;
use commands::cli;
use keygate_core::error;

#[tokio::main]
async fn main() -> Result<(), error::CliError> {
    let mut args = cli::Args::parse();
    let cmd = args.command.take().unwrap_or_default();

    let cfg = commands::load_config(args.config.as_deref(), &cmd)?;
    let log_guard = logging::init(&cfg.logging)?;

    let exit = dispatch(cmd, cfg).await?;

    // process::exit skips destructors; flush the file sink first. Exiting
    // this way also stops a pending blocking stdin read from holding the
    // runtime open after Ctrl-C.
    drop(log_guard);
    std::process::exit(exit);
}

async fn dispatch(
    cmd: cli::Commands,
    cfg: keygate_core::config::AppConfig,
) -> Result<i32, error::CliError> {
    match cmd {
        cli::Commands::Unlock(_) => commands::unlock::handle_unlock(&cfg).await,
        cli::Commands::Check(check_args) => commands::check::handle_check(check_args, &cfg),
        cli::Commands::Generate(gen_args) => commands::generate::handle_generate(gen_args, &cfg),
    }
}
