use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::{debug, error};

use super::interface::{DetectLabelsResponse, LabelDetector, LabelItem};
use crate::config::LabelServiceConfig;
use crate::error::DetectionError;

/// Client for the label-detection gateway
#[derive(Debug, Clone)]
pub struct LabelServiceClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl LabelServiceClient {
    pub fn new(config: &LabelServiceConfig) -> anyhow::Result<Self> {
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
impl LabelDetector for LabelServiceClient {
    async fn detect(&self, image: &[u8]) -> Result<Vec<LabelItem>, DetectionError> {
        let url = format!("{}/labels/detect", self.base_url);
        debug!("Sending {} image bytes to {}", image.len(), url);

        let mut request = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/octet-stream")
            .body(image.to_vec());
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DetectionError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("Label detection failed with HTTP {}: {}", status, message);
            return Err(DetectionError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let result: DetectLabelsResponse = response
            .json()
            .await
            .map_err(|e| DetectionError::Decode(e.to_string()))?;

        debug!("Label service returned {} labels", result.labels.len());
        Ok(result.labels)
    }
}
