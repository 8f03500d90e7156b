use anyhow::Context;
use keygate_core::api::{generate_keys, AppConfig, CliError, GeneratedKey};

use super::cli::{GenerateArgs, OutputFormat};

pub fn handle_generate(args: GenerateArgs, cfg: &AppConfig) -> Result<i32, CliError> {
    let rule = cfg.digest_rule();
    let seed = args
        .seed
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let count = usize::try_from(args.count)
        .map_err(|_| CliError::Command(format!("--count too large: {}", args.count)))?;

    let Some(keys) = generate_keys(&rule, &seed, count, args.max_rounds) else {
        eprintln!(
            "no key found within {} rounds; try another seed or raise --max-rounds",
            args.max_rounds
        );
        return Ok(1);
    };

    tracing::info!(count = keys.len(), "keys generated");
    let rendered =
        render_keys(&seed, &keys, args.format).map_err(|e| CliError::Command(format!("{e:#}")))?;
    println!("{rendered}");
    Ok(0)
}

fn render_keys(seed: &str, keys: &[GeneratedKey], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(keys
            .iter()
            .map(|k| k.key.as_str())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "seed": seed,
            "keys": keys,
        }))
        .context("serialize generated keys"),
    }
}
