use anyhow::Context;
use keygate_core::api::{AcceptanceVerdict, AppConfig, CliError};
use keygate_plugins::factory;

use super::cli::{CheckArgs, OutputFormat};

pub fn handle_check(args: CheckArgs, cfg: &AppConfig) -> Result<i32, CliError> {
    let acceptance = factory::build_acceptance(cfg);
    let verdict = acceptance.evaluate(args.key.trim());
    tracing::debug!(rule = acceptance.name(), accepted = verdict.accepted(), "key checked");

    let rendered =
        render_verdict(&verdict, args.format).map_err(|e| CliError::Command(format!("{e:#}")))?;
    println!("{rendered}");
    Ok(if verdict.accepted() { 0 } else { 1 })
}

fn render_verdict(verdict: &AcceptanceVerdict, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let status = if verdict.accepted() { "accepted" } else { "rejected" };
            Ok(format!("{status}: {}", verdict.reason()))
        }
        OutputFormat::Json => serde_json::to_string(verdict).context("serialize verdict"),
    }
}
