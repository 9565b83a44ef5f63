//! i18n-autotranslate - JSON message catalog translator
//!
//! Reads a source catalog of UI strings, translates every string leaf through
//! a LibreTranslate endpoint, and writes one catalog per target locale.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod processors;

// Re-export key types for convenience
pub use crate::core::{
    client::{LibreTranslateClient, TextTranslator},
    config::TranslatorConfig,
    errors::TranslationError,
    locale::LocaleTable,
    models::{LocaleOutcome, RunReport, TranslationRequest, TranslationResponse},
};

pub use crate::processors::{catalog::CatalogProcessor, json::JsonProcessor};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
