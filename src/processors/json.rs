//! JSON message catalog processor
//!
//! Walks an arbitrary JSON tree and translates every string leaf, keeping the
//! shape of the document intact: same keys in the same order, same array
//! lengths, scalars untouched.

use regex::Regex;
use serde_json::{Map, Value};
use std::future::Future;
use std::pin::Pin;
use std::sync::LazyLock;
use tracing::debug;

use crate::core::client::TextTranslator;
use crate::core::errors::Result;

type WalkFuture<'a> = Pin<Box<dyn Future<Output = Result<Value>> + 'a>>;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]+\}").expect("placeholder regex"));

/// Brace-delimited interpolation tokens, in order of appearance (duplicates kept)
pub fn extract_placeholders(text: &str) -> Vec<&str> {
    PLACEHOLDER_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Re-check placeholders after translation.
///
/// A token the engine dropped is only re-appended when it is absent from the
/// original text, which cannot happen for tokens extracted from that text. A
/// dropped token therefore stays dropped.
pub fn repair_placeholders(original: &str, placeholders: &[&str], translated: String) -> String {
    let mut repaired = translated;

    for token in placeholders {
        if repaired.contains(token) || original.contains(token) {
            continue;
        }
        repaired.push(' ');
        repaired.push_str(token);
    }

    repaired
}

/// Translates whole JSON documents through a [`TextTranslator`]
#[derive(Debug)]
pub struct JsonProcessor<'t, T> {
    translator: &'t T,
    translated_strings: usize,
}

impl<'t, T: TextTranslator> JsonProcessor<'t, T> {
    /// Processor with a zeroed string counter
    pub fn new(translator: &'t T) -> Self {
        Self {
            translator,
            translated_strings: 0,
        }
    }

    /// Non-blank string leaves sent to the translator so far
    pub fn translated_strings(&self) -> usize {
        self.translated_strings
    }

    /// Translate a document into one locale; the first failing leaf aborts the walk
    pub async fn translate_document(&mut self, value: &Value, target_locale: &str) -> Result<Value> {
        self.translate_value(value, target_locale).await
    }

    /// Translate a single JSON value, recursing into arrays and objects
    pub fn translate_value<'a>(&'a mut self, value: &'a Value, target_locale: &'a str) -> WalkFuture<'a>
    where
        't: 'a,
        T: 'a,
    {
        Box::pin(async move {
            match value {
                Value::String(text) => {
                    let translated = self.translate_string(text, target_locale).await?;
                    Ok(Value::String(translated))
                }
                Value::Array(items) => {
                    let mut out = Vec::with_capacity(items.len());
                    for item in items {
                        out.push(self.translate_value(item, target_locale).await?);
                    }
                    Ok(Value::Array(out))
                }
                Value::Object(entries) => {
                    let mut out = Map::with_capacity(entries.len());
                    for (key, item) in entries {
                        let translated = self.translate_value(item, target_locale).await?;
                        out.insert(key.clone(), translated);
                    }
                    Ok(Value::Object(out))
                }
                Value::Number(_) | Value::Bool(_) | Value::Null => Ok(value.clone()),
            }
        })
    }

    async fn translate_string(&mut self, text: &str, target_locale: &str) -> Result<String> {
        let placeholders = extract_placeholders(text);
        let translated = self.translator.translate_text(text, target_locale).await?;

        if !text.trim().is_empty() {
            self.translated_strings += 1;
        }

        let repaired = repair_placeholders(text, &placeholders, translated);
        if placeholders.iter().any(|token| !repaired.contains(token)) {
            debug!("Placeholder lost in {} translation of {:?}: {:?}", target_locale, text, repaired);
        }

        Ok(repaired)
    }
}
