use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Header line of every successful response body
pub const SUCCESS_PREFIX: &str = "A Imagem tem \n";

/// Body of every failed response
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error!";

/// Function-style inbound event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationEvent {
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl InvocationEvent {
    pub fn with_image_url(image_url: impl Into<String>) -> Self {
        let mut params = HashMap::new();
        params.insert("imageUrl".to_string(), image_url.into());
        Self {
            query_string_parameters: Some(params),
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get("imageUrl"))
            .map(|s| s.as_str())
    }
}

/// The only output of an invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub body: String,
}

impl ResponseEnvelope {
    pub fn ok(formatted: &str) -> Self {
        Self {
            status_code: 200,
            body: format!("{}{}", SUCCESS_PREFIX, formatted),
        }
    }

    pub fn internal_error() -> Self {
        Self {
            status_code: 500,
            body: INTERNAL_ERROR_BODY.to_string(),
        }
    }
}

/// Pipeline stages, used as a log field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ReceiveRequest,
    FetchImage,
    DetectLabels,
    Translate,
    Format,
    Respond,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ReceiveRequest => "receive_request",
            Self::FetchImage => "fetch_image",
            Self::DetectLabels => "detect_labels",
            Self::Translate => "translate",
            Self::Format => "format",
            Self::Respond => "respond",
        };
        f.write_str(name)
    }
}
