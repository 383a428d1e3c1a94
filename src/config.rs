use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub image_fetch: ImageFetchConfig,
    #[serde(default)]
    pub label_service: LabelServiceConfig,
    #[serde(default)]
    pub translate_service: TranslateServiceConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    12393
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageFetchConfig {
    #[serde(default = "default_fetch_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

/// Rekognition-style services reject inline images above 5 MB
fn default_max_image_bytes() -> usize {
    5 * 1024 * 1024
}

fn default_user_agent() -> String {
    format!("label-translator/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ImageFetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_fetch_timeout_secs(),
            max_image_bytes: default_max_image_bytes(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelServiceConfig {
    #[serde(default = "default_service_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_service_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LabelServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_service_url(),
            api_key: None,
            timeout_secs: default_service_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateServiceConfig {
    #[serde(default = "default_service_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_service_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

fn default_service_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_service_timeout_secs() -> u64 {
    15
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "pt".to_string()
}

impl Default for TranslateServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_service_url(),
            api_key: None,
            timeout_secs: default_service_timeout_secs(),
            source_language: default_source_language(),
            target_language: default_target_language(),
        }
    }
}

/// How label names are sent to the translation service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationMode {
    /// One call with all names joined, split afterwards. Falls back to
    /// `PerLabel` when the split does not line up with the labels.
    #[default]
    Joined,
    /// One call per label name
    PerLabel,
}

/// Separator used to join label names before translation and the separator
/// expected in the translated text.
///
/// The split side only works while the service renders the join word the way
/// `split` expects ("and" -> "e" for en -> pt).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterPair {
    #[serde(default = "default_join_delimiter")]
    pub join: String,
    #[serde(default = "default_split_delimiter")]
    pub split: String,
}

fn default_join_delimiter() -> String {
    " and ".to_string()
}

fn default_split_delimiter() -> String {
    " e ".to_string()
}

impl Default for DelimiterPair {
    fn default() -> Self {
        Self {
            join: default_join_delimiter(),
            split: default_split_delimiter(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_invocation_timeout_secs")]
    pub invocation_timeout_secs: u64,
    #[serde(default)]
    pub translation_mode: TranslationMode,
    #[serde(default)]
    pub delimiters: DelimiterPair,
}

fn default_invocation_timeout_secs() -> u64 {
    60
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            invocation_timeout_secs: default_invocation_timeout_secs(),
            translation_mode: TranslationMode::default(),
            delimiters: DelimiterPair::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("server.port must be non-zero".to_string());
        }
        if self.server.host.parse::<std::net::IpAddr>().is_err() {
            return Err(format!("server.host {} is not an IP address", self.server.host));
        }

        for (name, url) in [
            ("label_service.base_url", &self.label_service.base_url),
            ("translate_service.base_url", &self.translate_service.base_url),
        ] {
            reqwest::Url::parse(url).map_err(|e| format!("{} is invalid: {}", name, e))?;
        }

        let timeouts = [
            ("image_fetch.timeout_secs", self.image_fetch.timeout_secs),
            ("label_service.timeout_secs", self.label_service.timeout_secs),
            ("translate_service.timeout_secs", self.translate_service.timeout_secs),
            ("pipeline.invocation_timeout_secs", self.pipeline.invocation_timeout_secs),
        ];
        if let Some((name, _)) = timeouts.iter().find(|(_, secs)| *secs == 0) {
            return Err(format!("{} must be greater than zero", name));
        }

        if self.image_fetch.max_image_bytes == 0 {
            return Err("image_fetch.max_image_bytes must be greater than zero".to_string());
        }

        let delimiters = &self.pipeline.delimiters;
        if delimiters.join.is_empty() || delimiters.split.is_empty() {
            return Err("pipeline.delimiters must not be empty".to_string());
        }

        Ok(())
    }
}
