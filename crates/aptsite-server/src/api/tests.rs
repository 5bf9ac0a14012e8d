use aptsite_widget::renderer::PRICING_ERROR;
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

const TOKEN: &str = "pat-secret-token";

fn upstream_state(server: &MockServer) -> AppState {
    let client = AirtableClient::with_base_url(TOKEN, "appBase", 5, &server.uri())
        .expect("client builds");
    AppState::new(Some(Arc::new(client)), "Pricing", "FAQ")
}

fn unconfigured_state() -> AppState {
    AppState::new(None, "Pricing", "FAQ")
}

async fn mount_table(server: &MockServer, table: &str, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/appBase/{table}")))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    (status, headers, String::from_utf8(body.to_vec()).expect("utf8"))
}

fn assert_gateway_headers(headers: &axum::http::HeaderMap) {
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "GET, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    assert_eq!(headers["content-type"], "application/json");
}

#[tokio::test]
async fn gateway_returns_both_tables() {
    let server = MockServer::start().await;
    mount_table(
        &server,
        "Pricing",
        200,
        json!({ "records": [{ "id": "rec1", "fields": { "Unit": "Studio", "Price": 1000 } }] }),
    )
    .await;
    mount_table(&server, "FAQ", 200, json!({})).await;

    let app = build_app(upstream_state(&server));
    let (status, headers, body) = send(app, Method::GET, "/api/data").await;

    assert_eq!(status, StatusCode::OK);
    assert_gateway_headers(&headers);
    let json: serde_json::Value = serde_json::from_str(&body).expect("json");
    assert_eq!(json["pricing"][0]["id"], "rec1");
    assert_eq!(json["pricing"][0]["fields"]["Unit"], "Studio");
    assert_eq!(json["faq"], json!([]), "missing records key yields []");
}

#[tokio::test]
async fn gateway_without_credential_is_configuration_error() {
    let app = build_app(unconfigured_state());
    let (status, headers, body) = send(app, Method::GET, "/api/data").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_gateway_headers(&headers);
    let json: serde_json::Value = serde_json::from_str(&body).expect("json");
    assert_eq!(
        json,
        json!({
            "error": "Server configuration error",
            "message": "AIRTABLE_TOKEN is not configured"
        })
    );
}

#[tokio::test]
async fn gateway_fails_whole_request_when_one_table_fails() {
    let server = MockServer::start().await;
    mount_table(
        &server,
        "Pricing",
        200,
        json!({ "records": [{ "id": "rec1", "fields": {} }] }),
    )
    .await;
    mount_table(
        &server,
        "FAQ",
        401,
        json!({ "error": "AUTHENTICATION_REQUIRED" }),
    )
    .await;

    let app = build_app(upstream_state(&server));
    let (status, headers, body) = send(app, Method::GET, "/api/data").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_gateway_headers(&headers);
    let json: serde_json::Value = serde_json::from_str(&body).expect("json");
    assert_eq!(json["error"], "Failed to fetch data");
    assert!(json["message"].as_str().is_some_and(|m| !m.is_empty()));
    assert!(json.get("pricing").is_none(), "no partial payload");
    assert!(!body.contains(TOKEN));
}

#[tokio::test]
async fn gateway_answers_preflight() {
    let app = build_app(unconfigured_state());
    let (status, headers, body) = send(app, Method::OPTIONS, "/api/data").await;

    assert_eq!(status, StatusCode::OK);
    assert_gateway_headers(&headers);
    assert!(body.is_empty());
}

#[tokio::test]
async fn gateway_rejects_other_methods() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = build_app(upstream_state(&server));
    let (status, headers, body) = send(app, Method::POST, "/api/data").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_gateway_headers(&headers);
    let json: serde_json::Value = serde_json::from_str(&body).expect("json");
    assert_eq!(json, json!({ "error": "Method not allowed" }));
}

#[tokio::test]
async fn gateway_rejects_head_without_upstream_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "records": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let app = build_app(upstream_state(&server));
    let (status, headers, _) = send(app, Method::HEAD, "/api/data").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_gateway_headers(&headers);
    assert!(server
        .received_requests()
        .await
        .is_some_and(|requests| requests.is_empty()));
}

#[tokio::test]
async fn index_renders_page_with_structured_data() {
    let server = MockServer::start().await;
    mount_table(
        &server,
        "Pricing",
        200,
        json!({ "records": [
            { "id": "rec1", "fields": { "Unit": "Studio", "Price": "$1,250" } },
            { "id": "rec2", "fields": { "Unit": "1 Bed", "Price": 1600 } }
        ] }),
    )
    .await;
    mount_table(
        &server,
        "FAQ",
        200,
        json!({ "records": [{ "id": "recA", "fields": { "Question": "Pets?", "Answer": "Yes" } }] }),
    )
    .await;

    let app = build_app(upstream_state(&server));
    let (status, headers, body) = send(app, Method::GET, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers["content-type"]
        .to_str()
        .is_ok_and(|v| v.starts_with("text/html")));
    assert!(body.contains("$1,250"));
    assert!(body.contains("Pets?"));
    assert!(body.contains(r#"id="schema-offer""#));
    assert!(body.contains(r#"id="schema-faq""#));
    assert!(body.contains("<iframe"));
}

#[tokio::test]
async fn index_without_credential_shows_error_messages() {
    let app = build_app(unconfigured_state());
    let (status, _, body) = send(app, Method::GET, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(PRICING_ERROR));
    assert!(!body.contains("application/ld+json"));
    assert!(body.contains("<iframe"), "map renders regardless");
}

#[tokio::test]
async fn health_reports_ok_with_request_id() {
    let app = build_app(unconfigured_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header("x-request-id", "req-health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-request-id"], "req-health");
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json: serde_json::Value = serde_json::from_slice(&body).expect("json parse");
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["meta"]["request_id"], "req-health");
    assert!(json["meta"]["timestamp"].is_string());
}
