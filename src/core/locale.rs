//! Locale code table
//!
//! Internal locale codes (the names of the message files) do not always match
//! the language codes the translation engine expects, e.g. the Czech catalog
//! is `cz.json` while LibreTranslate wants `cs`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::errors::{Result, TranslationError};

/// Default internal locale → engine code pairs
const DEFAULT_ENGINE_CODES: &[(&str, &str)] = &[
    ("en", "en"),
    ("de", "de"),
    ("ro", "ro"),
    ("sk", "sk"),
    ("cz", "cs"),
    ("fr", "fr"),
    ("se", "sv"),
    ("no", "no"),
    ("dk", "da"),
    ("it", "it"),
    ("pl", "pl"),
];

/// One-way mapping from internal locale codes to engine language codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTable {
    codes: BTreeMap<String, String>,
}

impl Default for LocaleTable {
    fn default() -> Self {
        DEFAULT_ENGINE_CODES.iter().copied().collect()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for LocaleTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self {
            codes: iter
                .into_iter()
                .map(|(locale, engine)| (locale.to_string(), engine.to_string()))
                .collect(),
        }
    }
}

impl LocaleTable {
    /// Resolve the engine code for an internal locale
    pub fn engine_code(&self, locale: &str) -> Result<&str> {
        self.codes
            .get(locale)
            .map(String::as_str)
            .ok_or_else(|| TranslationError::LookupError {
                locale: locale.to_string(),
            })
    }

    /// Whether the locale has an entry
    pub fn contains(&self, locale: &str) -> bool {
        self.codes.contains_key(locale)
    }

    /// Find the internal locale that maps to the given engine code
    pub fn internal_code_for(&self, engine: &str) -> Option<&str> {
        self.codes
            .iter()
            .find(|(_, code)| code.as_str() == engine)
            .map(|(locale, _)| locale.as_str())
    }

    /// Number of mapped locales
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Pick the first supported locale from an `Accept-Language` header value.
    ///
    /// Quality weights are ignored; tags are tried in header order. Region
    /// subtags are dropped (`en-US` → `en`) and the primary tag is mapped back
    /// through the table, so `cs-CZ` resolves to `cz`. Norwegian Bokmål and
    /// Nynorsk both resolve to `no`.
    ///
    /// Library helper for web front-ends serving the generated catalogs; the
    /// translation run never calls it. There is no site-specific fallback
    /// locale: `None` means no tag matched and the caller picks its default.
    pub fn match_accept_language<'s, S>(&self, accept: &str, supported: &'s [S]) -> Option<&'s str>
    where
        S: AsRef<str>,
    {
        let tags = accept
            .split(',')
            .filter_map(|part| part.split(';').next())
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty());

        for tag in tags {
            let primary = tag.split('-').next().unwrap_or_default();
            let primary = match primary {
                "nb" | "nn" => "no",
                other => other,
            };
            let mapped = self.internal_code_for(primary).unwrap_or(primary);

            if let Some(found) = supported.iter().find(|s| s.as_ref() == mapped) {
                return Some(found.as_ref());
            }
        }

        None
    }
}
