use reqwest::Url;

pub const BASE_URL_ENV: &str = "TELEMETRY_BASE_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("telemetry base URL is not set (TELEMETRY_BASE_URL)")]
    MissingBaseUrl,
    #[error("invalid telemetry base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("telemetry base URL `{0}` must use http or https")]
    UnsupportedScheme(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TelemetryConfig {
    pub base_url: Url,
}

impl TelemetryConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(Self { base_url: url }),
            _ => Err(ConfigError::UnsupportedScheme(base_url.to_string())),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(None, std::env::var(BASE_URL_ENV).ok())
    }

    /// An explicit base URL wins over the environment value. Blank values
    /// count as unset.
    pub fn resolve(explicit: Option<&str>, env_value: Option<String>) -> Result<Self, ConfigError> {
        let base_url = explicit
            .map(str::to_string)
            .or(env_value)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;
        Self::new(base_url.trim())
    }
}
