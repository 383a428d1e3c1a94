use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::TranslationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub source_language: String,
    pub target_language: String,
    pub text: String,
}

impl TranslateRequest {
    pub fn new(source_language: &str, target_language: &str, text: impl Into<String>) -> Self {
        Self {
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    #[serde(alias = "TranslatedText")]
    pub translated_text: String,
}

/// Machine translation service
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `request.text`, returning the translated phrase
    async fn translate(&self, request: &TranslateRequest) -> Result<String, TranslationError>;
}

/// Split a translated phrase back into per-label fragments.
///
/// Inverse of joining names before translation; only lines up when the
/// service rendered the join word as `delimiter`.
pub fn split_fragments(translated: &str, delimiter: &str) -> Vec<String> {
    translated
        .split(delimiter)
        .map(|fragment| fragment.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fragments() {
        assert_eq!(
            split_fragments("Gato e Animal de estimação e Mamífero", " e "),
            vec!["Gato", "Animal de estimação", "Mamífero"]
        );
        assert_eq!(split_fragments("Gato", " e "), vec!["Gato"]);
    }

    #[test]
    fn test_split_ignores_e_inside_words() {
        // "e" only counts when surrounded by spaces
        assert_eq!(
            split_fragments("Elefante e Leão", " e "),
            vec!["Elefante", "Leão"]
        );
    }

    #[test]
    fn test_request_wire_format() {
        let request = TranslateRequest::new("en", "pt", "Cat and Dog");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "source_language": "en",
                "target_language": "pt",
                "text": "Cat and Dog"
            })
        );
    }

    #[test]
    fn test_response_accepts_aws_casing() {
        let response: TranslateResponse =
            serde_json::from_str(r#"{"TranslatedText":"Gato"}"#).unwrap();
        assert_eq!(response.translated_text, "Gato");
    }
}
