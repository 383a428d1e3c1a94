use async_trait::async_trait;
use reqwest::Url;

use crate::error::{FetchError, InputError};

/// Source of raw image bytes
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Download the image at `url` and return its bytes untouched
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError>;
}

/// Validate the `imageUrl` query value before any network call
pub fn parse_image_url(raw: Option<&str>) -> Result<Url, InputError> {
    let raw = raw.ok_or(InputError::MissingImageUrl)?.trim();
    if raw.is_empty() {
        return Err(InputError::EmptyImageUrl);
    }

    let url = Url::parse(raw).map_err(|e| InputError::InvalidUrl(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(InputError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_image_url_accepts_http_and_https() {
        let url = parse_image_url(Some("https://example.com/cat.jpg")).unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
        assert!(parse_image_url(Some("  http://example.com/a.png ")).is_ok());
    }

    #[test]
    fn test_parse_image_url_rejects_bad_input() {
        assert_eq!(parse_image_url(None), Err(InputError::MissingImageUrl));
        assert_eq!(parse_image_url(Some("   ")), Err(InputError::EmptyImageUrl));
        assert!(matches!(
            parse_image_url(Some("cat.jpg")),
            Err(InputError::InvalidUrl(_))
        ));
        assert_eq!(
            parse_image_url(Some("file:///etc/passwd")),
            Err(InputError::UnsupportedScheme("file".to_string()))
        );
    }
}
