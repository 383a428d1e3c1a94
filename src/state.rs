use std::sync::Arc;

use crate::config::AppConfig;
use crate::pipeline::{LabelPipeline, PipelineFactory};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub pipeline: Arc<LabelPipeline>,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let pipeline = PipelineFactory::create_pipeline(&config)?;
        Ok(Self::with_pipeline(config, pipeline))
    }

    /// Use an already wired pipeline, e.g. one built from fake clients
    pub fn with_pipeline(config: AppConfig, pipeline: LabelPipeline) -> Self {
        Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
        }
    }
}
