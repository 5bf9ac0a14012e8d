//! Where the renderer gets records from.
//!
//! The only network-facing implementation here is [`GatewayClient`], which
//! talks to the proxy gateway. Nothing in this crate ever holds the Airtable
//! credential.

use std::time::Duration;

use aptsite_core::{GatewayPayload, Record, RecordKind};
use reqwest::{Client, Url};
use thiserror::Error;

const GATEWAY_PATH: &str = "api/data";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("gateway returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("record source is not configured: {0}")]
    NotConfigured(String),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("invalid gateway URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Supplies the records for one kind per call.
#[async_trait::async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch(&self, kind: RecordKind) -> Result<Vec<Record>, SourceError>;
}

/// HTTP client for the proxy gateway's combined endpoint.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    endpoint: Url,
}

impl GatewayClient {
    /// Creates a client for the gateway rooted at `gateway_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidUrl`] if `gateway_url` is not absolute, or
    /// [`SourceError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(gateway_url: &str, timeout_secs: u64) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("aptsite/0.1 (renderer)")
            .build()?;

        let normalised = format!("{}/", gateway_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join(GATEWAY_PATH))
            .map_err(|e| SourceError::InvalidUrl {
                url: gateway_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetches the combined pricing + FAQ payload.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Http`] on network failure.
    /// - [`SourceError::Status`] on a non-2xx status, carrying the gateway's
    ///   `message` when it sent one.
    /// - [`SourceError::Deserialize`] if a 2xx body is not a gateway payload.
    pub async fn fetch_payload(&self) -> Result<GatewayPayload, SourceError> {
        let response = self.client.get(self.endpoint.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    v.get("message")
                        .or_else(|| v.get("error"))
                        .and_then(serde_json::Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
            return Err(SourceError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| SourceError::Deserialize {
            context: self.endpoint.to_string(),
            source: e,
        })
    }
}

#[async_trait::async_trait]
impl RecordSource for GatewayClient {
    async fn fetch(&self, kind: RecordKind) -> Result<Vec<Record>, SourceError> {
        let payload = self.fetch_payload().await?;
        Ok(payload.take(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_gateway_path() {
        let client = GatewayClient::new("https://example.com", 5).unwrap();
        assert_eq!(client.endpoint().as_str(), "https://example.com/api/data");
    }

    #[test]
    fn endpoint_keeps_path_prefix() {
        let client = GatewayClient::new("https://example.com/site/", 5).unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://example.com/site/api/data"
        );
    }

    #[test]
    fn rejects_relative_gateway_url() {
        assert!(matches!(
            GatewayClient::new("/api", 5),
            Err(SourceError::InvalidUrl { .. })
        ));
    }
}
