//! Error types for the label pipeline
//!
//! Each external call has its own error enum so failures can be classified in
//! logs. Callers of the pipeline never see these: every variant collapses into
//! the same opaque 500 envelope.

use std::time::Duration;

use thiserror::Error;

/// Problems with the inbound event itself
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("query parameter imageUrl is missing")]
    MissingImageUrl,

    #[error("query parameter imageUrl is empty")]
    EmptyImageUrl,

    #[error("imageUrl is not a valid URL: {0}")]
    InvalidUrl(String),

    #[error("imageUrl scheme {0} is not supported, expected http or https")]
    UnsupportedScheme(String),
}

/// Image download failures
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("timed out fetching image from {0}")]
    Timeout(String),

    #[error("HTTP error fetching image: {0}")]
    Request(String),

    #[error("image source returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("image is {size} bytes, limit is {limit}")]
    TooLarge { size: usize, limit: usize },

    #[error("image source returned an empty body for {0}")]
    Empty(String),
}

/// Label-detection service failures
#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("label service request failed: {0}")]
    Request(String),

    #[error("label service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("label service response could not be decoded: {0}")]
    Decode(String),
}

/// Translation service failures
#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("translation service request failed: {0}")]
    Request(String),

    #[error("translation service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("translation service response could not be decoded: {0}")]
    Decode(String),
}

/// Translated fragments and retained labels could not be paired
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected {expected} translated fragments, got {actual}")]
pub struct AlignmentError {
    pub expected: usize,
    pub actual: usize,
}

/// Any failure of a single pipeline invocation
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Detection(#[from] DetectionError),

    #[error(transparent)]
    Translation(#[from] TranslationError),

    #[error(transparent)]
    Alignment(#[from] AlignmentError),

    #[error("invocation exceeded its deadline of {0:?}")]
    DeadlineExceeded(Duration),
}

impl PipelineError {
    /// Short, stable classification used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Input(_) => "input",
            Self::Fetch(_) => "fetch",
            Self::Detection(_) => "detection",
            Self::Translation(_) => "translation",
            Self::Alignment(_) => "alignment",
            Self::DeadlineExceeded(_) => "deadline",
        }
    }
}
