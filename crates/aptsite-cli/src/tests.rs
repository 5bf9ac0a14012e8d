use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

async fn gateway(status: u16, body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/data"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    server
}

#[test]
fn parses_render_command_with_out() {
    let cli = Cli::try_parse_from([
        "aptsite-cli",
        "render",
        "--gateway-url",
        "https://example.com",
        "--out",
        "page.html",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Render {
            gateway_url,
            out,
            title,
            timeout_secs,
        } => {
            assert_eq!(gateway_url, "https://example.com");
            assert_eq!(out, Some(PathBuf::from("page.html")));
            assert_eq!(title, render::DEFAULT_TITLE);
            assert_eq!(timeout_secs, 15);
        }
        Commands::Schema { .. } => panic!("expected render"),
    }
}

#[test]
fn parses_schema_command() {
    let cli = Cli::try_parse_from([
        "aptsite-cli",
        "schema",
        "--gateway-url",
        "http://localhost:3000",
    ])
    .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Schema { .. }));
}

#[test]
fn missing_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["aptsite-cli"]).is_err());
}

#[tokio::test]
async fn render_writes_page_to_file() {
    let server = gateway(
        200,
        json!({
            "pricing": [{ "id": "rec1", "fields": { "Unit": "Studio", "Price": 1250 } }],
            "faq": []
        }),
    )
    .await;
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("index.html");

    let page = render::render_page(&server.uri(), "Test", 5)
        .await
        .expect("page");
    render::write_page(&page, Some(&out)).expect("write");

    let html = std::fs::read_to_string(&out).expect("read back");
    assert!(html.contains("$1,250"));
    assert!(html.contains("No FAQs available at this time."));
}

#[tokio::test]
async fn schema_prints_published_documents() {
    let server = gateway(
        200,
        json!({
            "pricing": [
                { "id": "rec1", "fields": { "Unit": "Studio", "Price": 1000 } },
                { "id": "rec2", "fields": { "Unit": "1 Bed", "Price": 1500 } }
            ],
            "faq": [{ "id": "recA", "fields": { "Question": "Pets?", "Answer": "Yes" } }]
        }),
    )
    .await;

    let docs = render::schema_documents(&server.uri(), 5)
        .await
        .expect("docs");
    let json: serde_json::Value = serde_json::from_str(&docs).expect("json");
    assert_eq!(json["schema-offer"]["offerCount"], 2);
    assert_eq!(json["schema-faq"]["@type"], "FAQPage");
}

#[tokio::test]
async fn schema_fails_when_gateway_errors() {
    let server = gateway(500, json!({ "error": "Server configuration error" })).await;
    let err = render::schema_documents(&server.uri(), 5)
        .await
        .expect_err("nothing published");
    assert!(err.to_string().contains("no structured data"));
}
