pub mod types;
pub mod formatter;
pub mod orchestrator;
pub mod factory;

pub use types::*;
pub use formatter::format_results;
pub use orchestrator::{LabelPipeline, PipelineSettings};
pub use factory::PipelineFactory;
