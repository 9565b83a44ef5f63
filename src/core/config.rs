//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::core::errors::{Result, TranslationError};
use crate::core::locale::LocaleTable;

/// Environment variable consulted for the LibreTranslate API key
pub const API_KEY_ENV: &str = "LIBRETRANSLATE_API_KEY";

/// Default target locales, processed in this order
const DEFAULT_TARGET_LOCALES: &[&str] = &[
    "en", "de", "ro", "sk", "cz", "fr", "se", "no", "dk", "it", "pl",
];

/// Configuration for a translation run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Source catalog
    pub source_file: PathBuf,
    /// Directory receiving `<locale>.json` files
    pub output_dir: PathBuf,
    /// Internal code of the source language
    pub source_locale: String,
    /// Target locales, processed in order
    pub target_locales: Vec<String>,
    /// Internal locale → engine code table
    pub engine_lang_map: LocaleTable,
    /// LibreTranslate `/translate` URL
    pub api_endpoint: String,
    /// Optional LibreTranslate API key
    pub api_key: Option<String>,
    /// Per-request timeout
    pub timeout_ms: u64,
    /// Pause after each locale
    pub pause_ms: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            source_file: PathBuf::from("messages").join("hu.json"),
            output_dir: PathBuf::from("messages"),
            source_locale: "en".to_string(),
            target_locales: DEFAULT_TARGET_LOCALES.iter().map(|l| l.to_string()).collect(),
            engine_lang_map: LocaleTable::default(),
            api_endpoint: "https://libretranslate.com/translate".to_string(),
            api_key: None,
            timeout_ms: 30000,
            pause_ms: 1000,
        }
    }
}

impl TranslatorConfig {
    /// Load configuration: compiled-in defaults, optionally overridden by a
    /// JSON file, with the API key falling back to the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let config = Self::from_file(path)?;
                info!("Loaded configuration from {}", path.display());
                config
            }
            None => Self::default(),
        };

        if config.api_key.is_none() {
            config.api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        }

        Ok(config)
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TranslationError::FileError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| TranslationError::ConfigError {
            message: format!("{}: {}", path.display(), e),
        })
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_endpoint.is_empty() {
            return Err(config_error("API endpoint is required"));
        }

        if self.target_locales.is_empty() {
            return Err(config_error("at least one target locale is required"));
        }

        if self.timeout_ms == 0 {
            return Err(config_error("timeout_ms must be greater than 0"));
        }

        // Unmapped locales are not fatal: each one fails on its own at run time.
        if !self.engine_lang_map.contains(&self.source_locale) {
            warn!("Source locale {} has no engine code", self.source_locale);
        }
        for locale in &self.target_locales {
            if !self.engine_lang_map.contains(locale) {
                warn!("Target locale {} has no engine code and will be skipped", locale);
            }
        }

        Ok(())
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Pause after each locale
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    /// Output path for a locale's catalog
    pub fn output_path(&self, locale: &str) -> PathBuf {
        self.output_dir.join(format!("{}.json", locale))
    }
}

fn config_error(message: &str) -> TranslationError {
    TranslationError::ConfigError {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TranslatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.target_locales.len(), 11);
        assert_eq!(config.target_locales[4], "cz");
        assert_eq!(config.pause(), Duration::from_secs(1));
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_config_validation_missing_endpoint() {
        let config = TranslatorConfig {
            api_endpoint: "".to_string(),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_rejects_empty_targets_and_zero_timeout() {
        let no_targets = TranslatorConfig {
            target_locales: vec![],
            ..Default::default()
        };
        assert!(no_targets.validate().is_err());

        let zero_timeout = TranslatorConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        assert!(zero_timeout.validate().is_err());
    }

    #[test]
    fn test_unmapped_target_is_not_fatal() {
        let config = TranslatorConfig {
            target_locales: vec!["de".to_string(), "hu".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"target_locales": ["de", "cz"], "pause_ms": 250, "api_key": "secret"}"#,
        )
        .unwrap();

        let config = TranslatorConfig::load(Some(&path)).unwrap();
        assert_eq!(config.target_locales, vec!["de", "cz"]);
        assert_eq!(config.pause_ms, 250);
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.api_endpoint, "https://libretranslate.com/translate");
        assert_eq!(config.engine_lang_map.engine_code("cz").unwrap(), "cs");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"pause_ms": "soon"}"#).unwrap();

        let err = TranslatorConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, TranslationError::ConfigError { .. }));
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = TranslatorConfig {
            output_dir: PathBuf::from("out"),
            ..Default::default()
        };
        config.to_file(&path).unwrap();

        let loaded = TranslatorConfig::from_file(&path).unwrap();
        assert_eq!(loaded.output_dir, PathBuf::from("out"));
        assert_eq!(loaded.output_path("dk"), PathBuf::from("out").join("dk.json"));
    }
}
