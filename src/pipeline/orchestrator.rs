use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use super::formatter::format_results;
use super::types::{InvocationEvent, ResponseEnvelope, Stage};
use crate::config::{AppConfig, DelimiterPair, TranslationMode};
use crate::error::{PipelineError, TranslationError};
use crate::image::{parse_image_url, ImageSource};
use crate::labels::{filter_confident, DetectedLabels, LabelDetector};
use crate::translate::{split_fragments, TranslateRequest, Translator};

/// Pipeline behaviour that is not tied to a particular client
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub source_language: String,
    pub target_language: String,
    pub delimiters: DelimiterPair,
    pub translation_mode: TranslationMode,
    pub invocation_timeout: Duration,
}

impl PipelineSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            source_language: config.translate_service.source_language.clone(),
            target_language: config.translate_service.target_language.clone(),
            delimiters: config.pipeline.delimiters.clone(),
            translation_mode: config.pipeline.translation_mode,
            invocation_timeout: Duration::from_secs(config.pipeline.invocation_timeout_secs),
        }
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

/// Runs one invocation: fetch image, detect labels, translate, format.
///
/// Cheap to share; all clients sit behind `Arc` and hold no per-request state.
pub struct LabelPipeline {
    images: Arc<dyn ImageSource>,
    detector: Arc<dyn LabelDetector>,
    translator: Arc<dyn Translator>,
    settings: PipelineSettings,
}

impl LabelPipeline {
    pub fn new(
        images: Arc<dyn ImageSource>,
        detector: Arc<dyn LabelDetector>,
        translator: Arc<dyn Translator>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            images,
            detector,
            translator,
            settings,
        }
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Handle an event and always produce an envelope. Failures are logged
    /// with their classification and reported as an opaque 500.
    pub async fn handle(&self, event: &InvocationEvent) -> ResponseEnvelope {
        let request_id = Uuid::new_v4();
        let span = info_span!("invocation", %request_id);

        async {
            match self.run_with_deadline(event.image_url()).await {
                Ok(text) => {
                    info!(stage = %Stage::Respond, "Finished");
                    ResponseEnvelope::ok(&text)
                }
                Err(e) => {
                    error!(kind = e.kind(), error = %e, "Invocation failed");
                    ResponseEnvelope::internal_error()
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn run_with_deadline(&self, image_url: Option<&str>) -> Result<String, PipelineError> {
        let limit = self.settings.invocation_timeout;
        tokio::time::timeout(limit, self.run(image_url))
            .await
            .map_err(|_| PipelineError::DeadlineExceeded(limit))?
    }

    /// Run every stage and return the formatted lines (without the header)
    pub async fn run(&self, image_url: Option<&str>) -> Result<String, PipelineError> {
        info!(stage = %Stage::ReceiveRequest, "Validating imageUrl");
        let url = parse_image_url(image_url)?;

        info!(stage = %Stage::FetchImage, %url, "Downloading image");
        let image = self.images.fetch(&url).await?;

        info!(stage = %Stage::DetectLabels, bytes = image.len(), "Detecting labels");
        let labels = self.detector.detect(&image).await?;
        let detected = filter_confident(labels, &self.settings.delimiters.join);

        if detected.is_empty() {
            info!("No label above the confidence threshold, skipping translation");
            return Ok(String::new());
        }

        info!(
            stage = %Stage::Translate,
            labels = detected.retained.len(),
            "Translating to {}",
            self.settings.target_language
        );
        let fragments = self.translate_labels(&detected).await?;

        info!(stage = %Stage::Format, "Formatting results");
        Ok(format_results(&fragments, &detected.retained)?)
    }

    async fn translate_labels(
        &self,
        detected: &DetectedLabels,
    ) -> Result<Vec<String>, TranslationError> {
        if self.settings.translation_mode == TranslationMode::PerLabel {
            return self.translate_each(detected).await;
        }

        let translated = self
            .translator
            .translate(&self.request_for(&detected.joined_names))
            .await?;
        let fragments = split_fragments(&translated, &self.settings.delimiters.split);

        if fragments.len() == detected.retained.len() {
            return Ok(fragments);
        }

        warn!(
            expected = detected.retained.len(),
            actual = fragments.len(),
            translated = %translated,
            "Translation did not split into one fragment per label, translating labels one by one"
        );
        self.translate_each(detected).await
    }

    async fn translate_each(
        &self,
        detected: &DetectedLabels,
    ) -> Result<Vec<String>, TranslationError> {
        let mut fragments = Vec::with_capacity(detected.retained.len());
        for name in detected.names() {
            let translated = self.translator.translate(&self.request_for(name)).await?;
            fragments.push(translated.trim().to_string());
        }
        Ok(fragments)
    }

    fn request_for(&self, text: &str) -> TranslateRequest {
        TranslateRequest::new(
            &self.settings.source_language,
            &self.settings.target_language,
            text,
        )
    }
}
