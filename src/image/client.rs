use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use super::interface::ImageSource;
use crate::config::ImageFetchConfig;
use crate::error::FetchError;

/// Downloads images over HTTP(S)
pub struct HttpImageFetcher {
    client: Client,
    max_image_bytes: usize,
}

impl HttpImageFetcher {
    pub fn new(config: &ImageFetchConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self {
            client,
            max_image_bytes: config.max_image_bytes,
        })
    }

    fn map_request_error(url: &Url, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(url.to_string())
        } else {
            FetchError::Request(e.to_string())
        }
    }
}

#[async_trait]
impl ImageSource for HttpImageFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        debug!("Fetching image from: {}", url);

        let mut response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Self::map_request_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        if let Some(declared) = response.content_length() {
            let declared = declared as usize;
            if declared > self.max_image_bytes {
                return Err(FetchError::TooLarge {
                    size: declared,
                    limit: self.max_image_bytes,
                });
            }
        }

        // Bodies without a Content-Length are only bounded while streaming
        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| Self::map_request_error(url, e))?
        {
            let size = bytes.len() + chunk.len();
            if size > self.max_image_bytes {
                return Err(FetchError::TooLarge {
                    size,
                    limit: self.max_image_bytes,
                });
            }
            bytes.extend_from_slice(&chunk);
        }

        if bytes.is_empty() {
            return Err(FetchError::Empty(url.to_string()));
        }

        debug!("Fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes)
    }
}
