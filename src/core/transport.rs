use reqwest::{redirect, Method, StatusCode};

use crate::core::activity::ActivityPayload;

/// A single request handed to a [`Transport`]. `url` is relative to the
/// transport's base URL and `data` is sent as the JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub data: ActivityPayload,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransportResponse {
    pub status: StatusCode,
}

/// The HTTP collaborator behind the telemetry client.
///
/// Implementations resolve on a successful response and fail with their own
/// error type on anything else; callers see that error unchanged.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn request(&self, request: TransportRequest) -> Result<TransportResponse, Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("telemetry server responded with {0}")]
    Status(StatusCode),
}

impl TransportError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TransportError::Http(e) => e.status(),
            TransportError::Status(status) => Some(*status),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    pub client: reqwest::Client,
    pub base_url: String,
}

impl ReqwestTransport {
    /// Redirects are not followed; a 3xx answer is a failed request.
    pub fn new(base_url: impl Into<String>) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(redirect::Policy::none())
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Timeouts, proxies, redirect policy and the like live on the supplied
    /// client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    type Error = TransportError;

    async fn request(&self, request: TransportRequest) -> Result<TransportResponse, Self::Error> {
        let res = self
            .client
            .request(request.method, format!("{}{}", &self.base_url, request.url))
            .json(&request.data)
            .send()
            .await?;

        // The body is never read; only the status decides the outcome.
        let status = res.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }

        Ok(TransportResponse { status })
    }
}
