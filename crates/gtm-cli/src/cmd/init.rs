use crate::output::print_json;
use anyhow::Context;
use gtm_core::config::Config;
use gtm_core::io::{write_if_missing, WriteOutcome};
use std::path::Path;

pub fn run(path: &Path, json: bool) -> anyhow::Result<()> {
    let data = default_config_yaml(&Config::default())?;
    let outcome = write_if_missing(path, data)
        .with_context(|| format!("failed to write {}", path.display()))?;

    if json {
        return print_json(&serde_json::json!({
            "path": path,
            "outcome": outcome,
            "created": outcome.created(),
        }));
    }
    match outcome {
        WriteOutcome::Created => println!("Created {}", path.display()),
        WriteOutcome::Kept => println!("{} already exists; left unchanged", path.display()),
    }
    Ok(())
}

fn default_config_yaml(config: &Config) -> anyhow::Result<String> {
    let header = "# GTM blueprint configuration\n";
    let body = config.to_yaml()?;
    Ok(format!("{header}{body}"))
}
