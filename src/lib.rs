//! Image label translator
//!
//! Downloads an image, asks a label-detection service what it shows, keeps
//! the confident labels, translates them to Portuguese and formats a short
//! text answer.

pub mod config;
pub mod config_manager;
pub mod error;
pub mod image;
pub mod labels;
pub mod pipeline;
pub mod routes;
pub mod state;
pub mod translate;

pub use config::AppConfig;
pub use error::PipelineError;
pub use pipeline::{InvocationEvent, LabelPipeline, ResponseEnvelope};
pub use state::AppState;
