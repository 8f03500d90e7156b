use keygate_core::api::{AppConfig, CliError};
use keygate_plugins::console::StdConsole;
use keygate_plugins::factory;
use keygate_plugins::menu::ProtectedMenu;
use keygate_plugins::reporter::ConsoleReporter;

pub async fn handle_unlock(cfg: &AppConfig) -> Result<i32, CliError> {
    let mut input = StdConsole::stdin();
    let mut menu = ProtectedMenu::new(input.clone(), std::io::stdout());
    let mut reporter = ConsoleReporter::stdout();
    let mut gate = factory::build_gate(cfg);

    tracing::info!(
        max_attempts = cfg.gate.max_attempts,
        "gate started"
    );
    let outcome = gate.run(&mut input, &mut reporter, &mut menu).await?;
    tracing::info!(
        outcome = outcome.category(),
        exit_code = outcome.exit_code(),
        "gate finished"
    );
    Ok(outcome.exit_code())
}
