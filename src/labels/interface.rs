use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::DetectionError;

/// A detected visual concept and its confidence (0-100)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelItem {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Confidence")]
    pub confidence: f64,
}

impl LabelItem {
    pub fn new(name: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }
}

/// Label gateway response body. Accepts Rekognition's capitalised field
/// names as well.
#[derive(Debug, Serialize, Deserialize)]
pub struct DetectLabelsResponse {
    #[serde(alias = "Labels", default)]
    pub labels: Vec<LabelItem>,
}

/// Label-detection service
#[async_trait]
pub trait LabelDetector: Send + Sync {
    /// Detect labels in raw image bytes, in the service's ranking order
    async fn detect(&self, image: &[u8]) -> Result<Vec<LabelItem>, DetectionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_accepts_both_casings() {
        let lower: DetectLabelsResponse =
            serde_json::from_str(r#"{"labels":[{"name":"Cat","confidence":95.5}]}"#).unwrap();
        let upper: DetectLabelsResponse =
            serde_json::from_str(r#"{"Labels":[{"Name":"Cat","Confidence":95.5}]}"#).unwrap();

        assert_eq!(lower.labels, vec![LabelItem::new("Cat", 95.5)]);
        assert_eq!(lower.labels, upper.labels);
    }

    #[test]
    fn test_response_without_labels_is_empty() {
        let response: DetectLabelsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.labels.is_empty());
    }
}
