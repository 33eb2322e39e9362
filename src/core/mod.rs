pub mod activity;
pub mod client;
pub mod transport;

pub use activity::ActivityPayload;
pub use client::{Client, TelemetryClient, ACTIVITY_PATH};
pub use transport::{
    ReqwestTransport, Transport, TransportError, TransportRequest, TransportResponse,
};
