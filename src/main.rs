use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use telemetry_client::{ActivityPayload, Client, TelemetryConfig};
use tracing_subscriber::EnvFilter;

/// Report a single user activity event to a telemetry server.
#[derive(Parser, Debug)]
#[command(name = "telemetry-client", version)]
struct Args {
    /// Base URL of the telemetry server; falls back to TELEMETRY_BASE_URL
    #[arg(long)]
    base_url: Option<String>,

    #[arg(long)]
    user_id: String,

    /// Extra activity metadata as key=value; values are parsed as JSON when possible
    #[arg(long = "property", value_parser = parse_property)]
    properties: Vec<(String, Value)>,
}

fn parse_property(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))?;
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match args.base_url.as_deref() {
        Some(base_url) => TelemetryConfig::new(base_url)?,
        None => TelemetryConfig::from_env()?,
    };
    let client = Client::from_config(&config)?;

    let payload = args
        .properties
        .into_iter()
        .fold(ActivityPayload::new(args.user_id), |payload, (key, value)| {
            payload.with_property(key, value)
        });

    client
        .activity(payload)
        .await
        .with_context(|| format!("failed to report activity to {}", config.base_url))?;

    tracing::info!("activity reported");
    Ok(())
}
