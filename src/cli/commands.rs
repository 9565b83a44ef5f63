//! CLI command definitions and handlers

use clap::Subcommand;
use std::path::{Path, PathBuf};

use crate::core::client::LibreTranslateClient;
use crate::core::config::TranslatorConfig;
use crate::processors::catalog::CatalogProcessor;

/// Commands for the catalog translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate the source catalog into every target locale (default)
    Run,

    /// Print the effective configuration as JSON
    ShowConfig {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle the translation run
pub async fn handle_run(config_path: Option<&Path>) -> anyhow::Result<()> {
    use std::time::Instant;
    use tracing::info;

    let start_time = Instant::now();

    let config = TranslatorConfig::load(config_path)?;

    info!("Source: {}", config.source_file.display());
    info!("Output: {}", config.output_dir.display());
    info!("Targets: {}", config.target_locales.join(", "));
    info!("Endpoint: {}", config.api_endpoint);

    let client = LibreTranslateClient::new(config.clone())?;
    let processor = CatalogProcessor::new(client, config);

    let report = processor.run().await?;

    let duration = start_time.elapsed();
    info!(
        "Completed: {} written, {} skipped in {:?}",
        report.written(),
        report.skipped(),
        duration
    );

    println!("\n✅ Translation completed (every locale that succeeded was written)");
    for outcome in &report.outcomes {
        println!("   {}", outcome);
    }
    println!("   Written: {}", report.written());
    println!("   Skipped: {}", report.skipped());
    println!("   Time: {:?}", duration);

    Ok(())
}

/// Handle show-config command
pub async fn handle_show_config(config_path: Option<&Path>, output: Option<PathBuf>) -> anyhow::Result<()> {
    let config = TranslatorConfig::load(config_path)?;
    config.validate()?;

    match output {
        Some(path) => {
            config.to_file(&path)?;
            println!("📝 Configuration saved to: {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&config)?),
    }

    Ok(())
}
