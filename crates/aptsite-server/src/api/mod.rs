mod gateway;
mod page;

use std::sync::Arc;

use aptsite_airtable::AirtableClient;
use aptsite_core::RecordKind;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::middleware::{request_id, request_span, RequestId};

/// Shared handler state. `upstream` is `None` when no Airtable credential is
/// configured.
#[derive(Clone)]
pub struct AppState {
    upstream: Option<Arc<AirtableClient>>,
    pricing_table: Arc<str>,
    faq_table: Arc<str>,
}

impl AppState {
    pub fn new(
        upstream: Option<Arc<AirtableClient>>,
        pricing_table: &str,
        faq_table: &str,
    ) -> Self {
        Self {
            upstream,
            pricing_table: Arc::from(pricing_table),
            faq_table: Arc::from(faq_table),
        }
    }

    fn table(&self, kind: RecordKind) -> &str {
        match kind {
            RecordKind::Pricing => &self.pricing_table,
            RecordKind::Faq => &self.faq_table,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ResponseMeta {
    fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

/// `/api/data` with the fixed CORS and content-type headers on every
/// response, including preflight and 405.
fn gateway_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/data",
            get(gateway::fetch_data)
                .options(gateway::preflight)
                .fallback(gateway::method_not_allowed),
        )
        .layer(
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::overriding(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static("*"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::ACCESS_CONTROL_ALLOW_METHODS,
                    HeaderValue::from_static("GET, OPTIONS"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::ACCESS_CONTROL_ALLOW_HEADERS,
                    HeaderValue::from_static("Content-Type"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )),
        )
}

pub fn build_app(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/", get(page::index))
        .route("/api/health", get(health));

    Router::new()
        .merge(public_routes)
        .merge(gateway_router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http().make_span_with(request_span)),
        )
        .with_state(state)
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse {
            data: HealthData { status: "ok" },
            meta: ResponseMeta::new(req_id.0),
        }),
    )
}

#[cfg(test)]
mod tests;
