//! End-to-end runs over a catalog on disk with an in-process translator

use assert_json_diff::assert_json_eq;
use serde_json::{json, Value};
use std::path::Path;

use i18n_autotranslate::{
    CatalogProcessor, LocaleTable, TextTranslator, TranslationError, TranslatorConfig,
};

/// Uppercases text, keeps `{tokens}` verbatim, and rejects one locale the way
/// the engine rejects an unsupported language
struct ShoutingEngine {
    table: LocaleTable,
    unsupported: &'static str,
}

impl TextTranslator for ShoutingEngine {
    async fn translate_text(&self, text: &str, target_locale: &str) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }
        let code = self.table.engine_code(target_locale)?;
        if code == self.unsupported {
            return Err(TranslationError::ApiError {
                status: 400,
                message: format!("{} is not supported", code),
            });
        }

        let mut out = String::new();
        let mut in_token = false;
        for c in text.chars() {
            match c {
                '{' => in_token = true,
                '}' => in_token = false,
                _ => {}
            }
            if in_token {
                out.push(c);
            } else {
                out.extend(c.to_uppercase());
            }
        }
        Ok(out)
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_catalog_translated_per_locale() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("hu.json");
    std::fs::write(
        &source,
        r#"{"greeting": "Hello {name}", "count": 3, "items": ["a", "b"], "nav": {"home": "home", "blank": " "}}"#,
    )
    .unwrap();

    let config = TranslatorConfig {
        source_file: source,
        output_dir: dir.path().join("messages"),
        target_locales: vec!["de".to_string(), "fr".to_string(), "it".to_string()],
        ..Default::default()
    };
    let engine = ShoutingEngine {
        table: config.engine_lang_map.clone(),
        unsupported: "fr",
    };

    let report = CatalogProcessor::new(engine, config).run().await.unwrap();

    assert_eq!(report.written(), 2);
    assert_eq!(report.skipped_locales(), vec!["fr"]);

    let expected = json!({
        "greeting": "HELLO {name}",
        "count": 3,
        "items": ["A", "B"],
        "nav": {"home": "HOME", "blank": " "}
    });
    let out = dir.path().join("messages");
    assert_json_eq!(read_json(&out.join("de.json")), expected.clone());
    assert_json_eq!(read_json(&out.join("it.json")), expected);
    assert!(!out.join("fr.json").exists());

    let mut files: Vec<String> = std::fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    files.sort();
    assert_eq!(files, vec!["de.json", "it.json"]);
}

#[tokio::test(start_paused = true)]
async fn test_unmapped_locale_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let config = TranslatorConfig {
        output_dir: dir.path().to_path_buf(),
        target_locales: vec!["hu".to_string(), "cz".to_string()],
        ..Default::default()
    };
    let engine = ShoutingEngine {
        table: config.engine_lang_map.clone(),
        unsupported: "none",
    };

    let report = CatalogProcessor::new(engine, config)
        .run_with_source(&json!({"title": "ok"}))
        .await;

    assert_eq!(report.skipped_locales(), vec!["hu"]);
    assert_json_eq!(read_json(&dir.path().join("cz.json")), json!({"title": "OK"}));
}
