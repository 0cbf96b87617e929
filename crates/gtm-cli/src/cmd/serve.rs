use anyhow::Context;
use gtm_core::config::Config;
use std::path::Path;

/// Command-line values that take precedence over `server:` in gtm.yaml.
#[derive(Debug, Default)]
pub struct Overrides {
    pub port: Option<u16>,
    pub host: Option<String>,
    pub open: bool,
}

pub fn run(config_path: Option<&Path>, overrides: Overrides) -> anyhow::Result<()> {
    let config = apply(
        Config::load_or_default(config_path).context("failed to load config")?,
        overrides,
    );
    match config_path {
        Some(p) => tracing::info!("using config {}", p.display()),
        None => tracing::info!("no gtm.yaml found; using defaults"),
    }

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(gtm_server::serve(config))
}

fn apply(mut config: Config, overrides: Overrides) -> Config {
    if let Some(port) = overrides.port {
        config.server.port = port;
    }
    if let Some(host) = overrides.host {
        config.server.host = host;
    }
    if overrides.open {
        config.server.open_browser = true;
    }
    config
}
