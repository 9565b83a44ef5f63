//! Message catalog runner: one translated JSON file per target locale

use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::core::client::TextTranslator;
use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{LocaleOutcome, RunReport};
use crate::processors::json::JsonProcessor;

/// Drives a full run over every configured target locale, sequentially
#[derive(Debug)]
pub struct CatalogProcessor<T> {
    translator: T,
    config: TranslatorConfig,
}

impl<T: TextTranslator> CatalogProcessor<T> {
    /// Runner over `config.target_locales`
    pub fn new(translator: T, config: TranslatorConfig) -> Self {
        Self { translator, config }
    }

    /// Underlying translator
    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// Read and parse the source catalog
    pub async fn load_source(&self) -> Result<Value> {
        let path = &self.config.source_file;
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| file_error(path, e))?;

        serde_json::from_str(&content).map_err(|e| TranslationError::FileError {
            path: path.display().to_string(),
            message: format!("invalid JSON: {}", e),
        })
    }

    /// Load the source catalog and translate it into every target locale
    pub async fn run(&self) -> Result<RunReport> {
        let source = self.load_source().await?;
        info!("Loaded source catalog {}", self.config.source_file.display());
        Ok(self.run_with_source(&source).await)
    }

    /// Translate an already loaded catalog into every target locale.
    ///
    /// A failing locale is logged and skipped; the remaining locales still run.
    /// The configured pause follows every attempted locale.
    pub async fn run_with_source(&self, source: &Value) -> RunReport {
        let mut report = RunReport::default();

        for locale in &self.config.target_locales {
            info!("Translating {} -> {}", self.config.source_locale, locale);

            let outcome = match self.translate_locale(source, locale).await {
                Ok((path, strings)) => {
                    info!("Saved {} ({} strings)", path.display(), strings);
                    LocaleOutcome::Written {
                        locale: locale.clone(),
                        path,
                        strings,
                    }
                }
                Err(e) => {
                    if e.is_request_error() {
                        warn!("Translation endpoint failed for {}: {}", locale, e);
                    } else {
                        warn!("Failed to translate {}: {}", locale, e);
                    }
                    LocaleOutcome::Skipped {
                        locale: locale.clone(),
                        reason: e.to_string(),
                    }
                }
            };
            report.outcomes.push(outcome);

            tokio::time::sleep(self.config.pause()).await;
        }

        info!(
            "Done: {} locales written, {} skipped",
            report.written(),
            report.skipped()
        );
        report
    }

    /// Translate the whole catalog into one locale and write it out
    async fn translate_locale(&self, source: &Value, locale: &str) -> Result<(PathBuf, usize)> {
        let mut processor = JsonProcessor::new(&self.translator);
        let translated = processor.translate_document(source, locale).await?;

        let path = self.config.output_path(locale);
        write_catalog(&path, &translated).await?;

        Ok((path, processor.translated_strings()))
    }
}

/// Write a catalog as pretty JSON, replacing any previous file in one step
pub async fn write_catalog(path: &Path, catalog: &Value) -> Result<()> {
    let content = serde_json::to_string_pretty(catalog)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| file_error(parent, e))?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, content)
        .await
        .map_err(|e| file_error(&tmp, e))?;

    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
            warn!("Could not remove {}: {}", tmp.display(), cleanup);
        }
        return Err(file_error(path, e));
    }

    Ok(())
}

fn file_error(path: &Path, e: std::io::Error) -> TranslationError {
    TranslationError::FileError {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}
