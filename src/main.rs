//! Main entry point for the catalog translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use i18n_autotranslate::cli::commands::{self, Commands};

/// Translate a JSON message catalog into every configured locale
#[derive(Parser, Debug)]
#[command(name = "i18n-autotranslate", version, about, long_about = None)]
struct Args {
    /// JSON configuration file (compiled-in defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={}", env!("CARGO_CRATE_NAME"), log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = args.config.as_deref();

    match args.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::handle_run(config_path).await?,
        Commands::ShowConfig { output } => commands::handle_show_config(config_path, output).await?,
    }

    Ok(())
}
