use crate::output::print_json;
use anyhow::Context;
use clap::Args;
use gtm_core::config::Config;
use gtm_core::input::{normalize, EnumMode};
use gtm_core::render::render_markdown;
use gtm_core::GtmError;
use serde_json::{Map, Value};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// JSON payload file (`-` reads stdin). Flags below override its fields.
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[arg(long)]
    pub product_name: Option<String>,

    /// What the product does, phrased to follow the product name
    #[arg(long)]
    pub description: Option<String>,

    /// Target audience / ICP
    #[arg(long)]
    pub audience: Option<String>,

    /// Brand voice
    #[arg(long)]
    pub voice: Option<String>,

    /// North star adoption goal
    #[arg(long)]
    pub goal: Option<String>,

    /// concept, beta, ga or scale
    #[arg(long)]
    pub stage: Option<String>,

    /// lean, balanced or aggressive
    #[arg(long)]
    pub budget: Option<String>,

    /// 2-weeks, 1-month, quarter or half-year
    #[arg(long)]
    pub timeline: Option<String>,

    /// Focus area tag (repeatable)
    #[arg(long = "focus", value_name = "TAG")]
    pub focus: Vec<String>,

    /// Reject unknown stage / budget / timeline values
    #[arg(long)]
    pub strict: bool,

    /// Write the output to a file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(config_path: Option<&Path>, args: PlanArgs, json: bool) -> anyhow::Result<()> {
    let config = Config::load_or_default(config_path).context("failed to load config")?;
    let mode = if args.strict {
        EnumMode::Strict
    } else {
        config.enum_mode()
    };

    let payload = build_payload(&args)?;
    let input = normalize(&payload, mode)?;
    let plan = gtm_core::generate_plan(&input);

    let rendered = if json {
        let mut text = serde_json::to_string_pretty(&serde_json::json!({ "plan": plan }))?;
        text.push('\n');
        text
    } else {
        render_markdown(&input.product_name, Some(&plan))
    };

    match &args.output {
        Some(path) => {
            gtm_core::io::atomic_write(path, rendered.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            if json {
                print_json(&serde_json::json!({ "written": path }))?;
            } else {
                println!("Wrote plan to {}", path.display());
            }
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Read the base payload (file, stdin, or `{}`) and overlay flag values.
///
/// Flags only overlay onto an object; a non-object base is passed through so
/// normalization reports it as an invalid payload.
fn build_payload(args: &PlanArgs) -> anyhow::Result<Value> {
    let mut payload = match &args.input {
        None => Value::Object(Map::new()),
        Some(path) => {
            let text = if path.as_os_str() == "-" {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read stdin")?;
                buf
            } else {
                std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?
            };
            serde_json::from_str(&text).map_err(|e| GtmError::InvalidJson(e.to_string()))?
        }
    };

    if let Value::Object(obj) = &mut payload {
        let overrides = [
            ("productName", &args.product_name),
            ("productDescription", &args.description),
            ("targetAudience", &args.audience),
            ("brandVoice", &args.voice),
            ("adoptionGoal", &args.goal),
            ("stage", &args.stage),
            ("budgetLevel", &args.budget),
            ("launchTimeline", &args.timeline),
        ];
        for (key, value) in overrides {
            if let Some(v) = value {
                obj.insert(key.to_string(), Value::String(v.clone()));
            }
        }
        if !args.focus.is_empty() {
            obj.insert(
                "focusAreas".to_string(),
                Value::Array(args.focus.iter().cloned().map(Value::String).collect()),
            );
        }
    }
    Ok(payload)
}
