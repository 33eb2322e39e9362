use reqwest::Method;

use crate::config::TelemetryConfig;
use crate::core::{
    activity::ActivityPayload,
    transport::{ReqwestTransport, Transport, TransportRequest},
};

pub const ACTIVITY_PATH: &str = "/telemetry/activity";

/// Telemetry client over the default `reqwest` transport.
pub type Client = TelemetryClient<ReqwestTransport>;

#[derive(Clone, Debug)]
pub struct TelemetryClient<T> {
    transport: T,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> reqwest::Result<Self> {
        Ok(Self::with_transport(ReqwestTransport::new(base_url)?))
    }

    pub fn from_config(config: &TelemetryConfig) -> reqwest::Result<Self> {
        Self::new(config.base_url.as_str())
    }
}

impl<T: Transport> TelemetryClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Reports user activity with a single `POST /telemetry/activity`.
    ///
    /// Transport errors are returned as-is and never retried.
    #[tracing::instrument(skip_all, fields(user_id = %payload.user_id))]
    pub async fn activity(&self, payload: ActivityPayload) -> Result<(), T::Error> {
        let request = TransportRequest {
            method: Method::POST,
            url: ACTIVITY_PATH.to_string(),
            data: payload,
        };

        match self.transport.request(request).await {
            Ok(res) => {
                tracing::debug!(status = %res.status, "activity reported");
                Ok(())
            }
            Err(e) => {
                tracing::debug!(error = %e, "activity report failed");
                Err(e)
            }
        }
    }
}
