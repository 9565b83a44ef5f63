//! LibreTranslate client
//!
//! One request per string, no retries. Every failure is returned to the
//! caller, which decides what to abandon.

use std::sync::Arc;
use tracing::debug;

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{TranslationRequest, TranslationResponse};

/// Translates a single string into an internal target locale
#[allow(async_fn_in_trait)]
pub trait TextTranslator {
    /// Translate `text` into `target_locale`; blank text comes back unchanged
    async fn translate_text(&self, text: &str, target_locale: &str) -> Result<String>;
}

/// HTTP client for a LibreTranslate `/translate` endpoint
#[derive(Debug, Clone)]
pub struct LibreTranslateClient {
    client: reqwest::Client,
    config: Arc<TranslatorConfig>,
}

impl LibreTranslateClient {
    /// Create a new client
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Build the request body, resolving both locales to engine codes
    pub fn build_request(&self, text: &str, target_locale: &str) -> Result<TranslationRequest> {
        let table = &self.config.engine_lang_map;
        let target = table.engine_code(target_locale)?;
        let source = table.engine_code(&self.config.source_locale)?;

        Ok(TranslationRequest::new(text, source, target).with_api_key(self.config.api_key.clone()))
    }

    /// Send actual HTTP request
    async fn send_request(&self, request: &TranslationRequest) -> Result<String> {
        debug!("POST {} ({} -> {})", self.config.api_endpoint, request.source, request.target);

        let response = self
            .client
            .post(&self.config.api_endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| TranslationError::NetworkError {
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(TranslationError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: TranslationResponse =
            serde_json::from_str(&body).map_err(|e| TranslationError::InvalidResponseError {
                message: format!("{}: {}", e, body),
            })?;

        Ok(parsed.translated_text)
    }
}

impl TextTranslator for LibreTranslateClient {
    async fn translate_text(&self, text: &str, target_locale: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let request = self.build_request(text, target_locale)?;
        self.send_request(&request).await
    }
}
