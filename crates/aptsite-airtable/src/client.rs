//! HTTP client for the Airtable REST API.
//!
//! Wraps `reqwest` with bearer authentication, URL construction for
//! `/{base}/{table}` collection endpoints, and typed decoding of the
//! list-records envelope into [`RecordsPage`].

use std::time::Duration;

use aptsite_core::{Record, RecordsPage};
use reqwest::{Client, Url};

use crate::error::AirtableError;

/// Client for one Airtable base.
///
/// The API root always comes from configuration (`AIRTABLE_API_URL`, which
/// defaults to the public Airtable endpoint), so tests and production share
/// [`AirtableClient::with_base_url`].
pub struct AirtableClient {
    client: Client,
    token: String,
    base_url: Url,
}

impl std::fmt::Debug for AirtableClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AirtableClient")
            .field("token", &"[redacted]")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl AirtableClient {
    /// Creates a client rooted at `api_url` for the base `base_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AirtableError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`AirtableError::InvalidBaseUrl`] if `api_url` is not an
    /// absolute URL.
    pub fn with_base_url(
        token: &str,
        base_id: &str,
        timeout_secs: u64,
        api_url: &str,
    ) -> Result<Self, AirtableError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("aptsite/0.1 (listing-widget)")
            .build()?;

        // Normalise to exactly one trailing slash before appending segments.
        let normalised = format!("{}/", api_url.trim_end_matches('/'));
        let mut base_url = Url::parse(&normalised).map_err(|e| AirtableError::InvalidBaseUrl {
            url: api_url.to_string(),
            reason: e.to_string(),
        })?;
        base_url
            .path_segments_mut()
            .map_err(|()| AirtableError::InvalidBaseUrl {
                url: api_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .push(base_id);

        Ok(Self {
            client,
            token: token.to_owned(),
            base_url,
        })
    }

    /// Lists the first page of records in `table`.
    ///
    /// An envelope without a `records` key yields an empty list.
    ///
    /// # Errors
    ///
    /// - [`AirtableError::Http`] on network failure or non-2xx HTTP status.
    /// - [`AirtableError::Deserialize`] if the body is not a list-records
    ///   envelope.
    pub async fn list_records(&self, table: &str) -> Result<Vec<Record>, AirtableError> {
        let url = self.table_url(table);
        tracing::debug!(%url, "fetching airtable records");

        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        let page: RecordsPage =
            serde_json::from_str(&body).map_err(|e| AirtableError::Deserialize {
                context: format!("listRecords(table={table})"),
                source: e,
            })?;

        tracing::debug!(table, count = page.records.len(), "airtable records fetched");
        Ok(page.records)
    }

    /// Builds `{api}/{base}/{table}` with the table name percent-encoded as a
    /// single path segment.
    fn table_url(&self, table: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(table);
        }
        url
    }
}
