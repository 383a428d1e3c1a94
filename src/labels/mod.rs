pub mod interface;
pub mod client;
pub mod filter;

pub use interface::{DetectLabelsResponse, LabelDetector, LabelItem};
pub use client::LabelServiceClient;
pub use filter::{filter_confident, DetectedLabels, CONFIDENCE_THRESHOLD};
