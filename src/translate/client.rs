use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use super::interface::{TranslateRequest, TranslateResponse, Translator};
use crate::config::TranslateServiceConfig;
use crate::error::TranslationError;

/// Client for the translation gateway
#[derive(Debug, Clone)]
pub struct TranslateServiceClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl TranslateServiceClient {
    pub fn new(config: &TranslateServiceConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl Translator for TranslateServiceClient {
    async fn translate(&self, request: &TranslateRequest) -> Result<String, TranslationError> {
        let url = format!("{}/translate", self.base_url);
        debug!(
            "Translating {} -> {}: {}",
            request.source_language, request.target_language, request.text
        );

        let mut http_request = self.client.post(&url).json(request);
        if let Some(key) = &self.api_key {
            http_request = http_request.bearer_auth(key);
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| TranslationError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("Translation failed with HTTP {}: {}", status, message);
            return Err(TranslationError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let result: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::Decode(e.to_string()))?;

        Ok(result.translated_text)
    }
}
