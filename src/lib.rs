pub mod config;
pub mod core;

pub use crate::config::{ConfigError, TelemetryConfig};
pub use crate::core::{ActivityPayload, Client, TelemetryClient};
