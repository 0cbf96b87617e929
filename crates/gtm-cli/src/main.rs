mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, plan::PlanArgs};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gtm",
    about = "Go-to-market blueprint generator: turn product context into a launch plan",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (default: nearest gtm.yaml above the current directory)
    #[arg(long, global = true, env = "GTM_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default gtm.yaml
    Init,

    /// Generate a plan from a JSON payload and/or flags
    Plan(PlanArgs),

    /// List the accepted stage, budget, timeline and focus values
    Options,

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },

    /// Serve the web form and JSON API
    Serve {
        /// Port to listen on (overrides config; 0 = OS-assigned)
        #[arg(long)]
        port: Option<u16>,

        /// Host to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Open the form in a browser once listening
        #[arg(long)]
        open: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let explicit = cli.config.as_deref();

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root::init_target(explicit), cli.json),
        Commands::Plan(args) => cmd::plan::run(root::resolve_config(explicit).as_deref(), args, cli.json),
        Commands::Options => cmd::options::run(cli.json),
        Commands::Config { subcommand } => {
            cmd::config::run(root::resolve_config(explicit).as_deref(), subcommand, cli.json)
        }
        Commands::Serve { port, host, open } => cmd::serve::run(
            root::resolve_config(explicit).as_deref(),
            cmd::serve::Overrides { port, host, open },
        ),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
