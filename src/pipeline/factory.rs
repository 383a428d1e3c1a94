use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use super::orchestrator::{LabelPipeline, PipelineSettings};
use crate::config::AppConfig;
use crate::image::HttpImageFetcher;
use crate::labels::LabelServiceClient;
use crate::translate::TranslateServiceClient;

/// Builds a pipeline wired to the HTTP-backed clients
pub struct PipelineFactory;

impl PipelineFactory {
    /// Create the pipeline described by `config`.
    ///
    /// Clients are built once here and reused by every invocation.
    pub fn create_pipeline(config: &AppConfig) -> Result<LabelPipeline> {
        info!(
            "Initializing label service client: {}",
            config.label_service.base_url
        );
        let detector = LabelServiceClient::new(&config.label_service)?;

        info!(
            "Initializing translation client: {} ({} -> {})",
            config.translate_service.base_url,
            config.translate_service.source_language,
            config.translate_service.target_language
        );
        let translator = TranslateServiceClient::new(&config.translate_service)?;

        let images = HttpImageFetcher::new(&config.image_fetch)?;

        Ok(LabelPipeline::new(
            Arc::new(images),
            Arc::new(detector),
            Arc::new(translator),
            PipelineSettings::from_config(config),
        ))
    }
}
