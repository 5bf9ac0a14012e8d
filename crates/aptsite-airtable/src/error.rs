use thiserror::Error;

/// Errors returned by the Airtable client.
#[derive(Debug, Error)]
pub enum AirtableError {
    /// Network/TLS failure or a non-2xx status from the API.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not match the list-records envelope.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid Airtable base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
