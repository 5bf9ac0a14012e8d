//! Proxy gateway: one GET fans out to both Airtable tables and returns them
//! together. The credential stays on this side of the wire.

use aptsite_airtable::AirtableError;
use aptsite_core::GatewayPayload;
use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::AppState;

pub(super) const CREDENTIAL_MISSING: &str = "AIRTABLE_TOKEN is not configured";

#[derive(Debug)]
pub(super) enum GatewayError {
    NotConfigured,
    Upstream(AirtableError),
    MethodNotAllowed,
}

#[derive(Debug, Serialize)]
struct GatewayErrorBody {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::NotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GatewayErrorBody {
                    error: "Server configuration error",
                    message: Some(CREDENTIAL_MISSING.to_string()),
                },
            ),
            Self::Upstream(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GatewayErrorBody {
                    error: "Failed to fetch data",
                    message: Some(e.to_string()),
                },
            ),
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                GatewayErrorBody {
                    error: "Method not allowed",
                    message: None,
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}

/// Fetches both tables concurrently. Either failure fails the whole request.
///
/// axum routes HEAD to GET handlers; HEAD is refused here before any
/// upstream call.
pub(super) async fn fetch_data(
    method: Method,
    State(state): State<AppState>,
) -> Result<Json<GatewayPayload>, GatewayError> {
    if method != Method::GET {
        return Err(GatewayError::MethodNotAllowed);
    }
    let Some(client) = state.upstream.as_deref() else {
        tracing::error!("gateway request refused: {CREDENTIAL_MISSING}");
        return Err(GatewayError::NotConfigured);
    };

    let (pricing, faq) = tokio::try_join!(
        client.list_records(&state.pricing_table),
        client.list_records(&state.faq_table),
    )
    .map_err(|e| {
        tracing::error!(error = %e, "upstream fetch failed");
        GatewayError::Upstream(e)
    })?;

    tracing::debug!(
        pricing = pricing.len(),
        faq = faq.len(),
        "gateway payload assembled"
    );
    Ok(Json(GatewayPayload { pricing, faq }))
}

pub(super) async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub(super) async fn method_not_allowed() -> GatewayError {
    GatewayError::MethodNotAllowed
}
