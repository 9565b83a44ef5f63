//! Core data models for translation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Body of a LibreTranslate `/translate` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate
    pub q: String,
    /// Engine code of the source language
    pub source: String,
    /// Engine code of the target language
    pub target: String,
    /// Always `"text"`
    pub format: String,
    /// LibreTranslate API key, omitted when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl TranslationRequest {
    /// Plain-text request from `source` to `target` engine codes
    pub fn new(
        text: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            q: text.into(),
            source: source.into(),
            target: target.into(),
            format: "text".to_string(),
            api_key: None,
        }
    }

    /// Attach an API key
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }
}

/// Successful LibreTranslate response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResponse {
    /// Translated text
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

/// What happened to one target locale during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleOutcome {
    /// Catalog fully translated and written
    Written {
        /// Target locale
        locale: String,
        /// Catalog file written
        path: PathBuf,
        /// Non-blank strings translated
        strings: usize,
    },
    /// Translation or write failed; no file was produced for the locale
    Skipped {
        /// Target locale
        locale: String,
        /// Error that aborted the locale
        reason: String,
    },
}

impl LocaleOutcome {
    /// Target locale of this outcome
    pub fn locale(&self) -> &str {
        match self {
            LocaleOutcome::Written { locale, .. } | LocaleOutcome::Skipped { locale, .. } => locale,
        }
    }

    /// Whether a catalog file was produced
    pub fn is_written(&self) -> bool {
        matches!(self, LocaleOutcome::Written { .. })
    }
}

impl fmt::Display for LocaleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleOutcome::Written { locale, path, strings } => {
                write!(f, "{}: {} strings -> {}", locale, strings, path.display())
            }
            LocaleOutcome::Skipped { locale, reason } => write!(f, "{}: skipped ({})", locale, reason),
        }
    }
}

/// Per-locale outcomes of a run, in processing order
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// One entry per target locale
    pub outcomes: Vec<LocaleOutcome>,
}

impl RunReport {
    /// Number of locales written
    pub fn written(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_written()).count()
    }

    /// Number of locales skipped
    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.written()
    }

    /// Skipped locale codes, in run order
    pub fn skipped_locales(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| !o.is_written())
            .map(LocaleOutcome::locale)
            .collect()
    }
}
