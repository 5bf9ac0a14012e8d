//! Command handlers: load the page through the gateway, then emit HTML or
//! the published JSON-LD.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use aptsite_widget::schema::{FAQ_SCRIPT_ID, OFFER_SCRIPT_ID};
use aptsite_widget::{GatewayClient, Page, RenderStatus};

pub const DEFAULT_TITLE: &str = "Pricing & FAQ";

/// Fetches both kinds through the gateway and builds the finished page.
///
/// A failed kind still yields a page; its container carries the error
/// message, same as in the browser.
pub async fn render_page(
    gateway_url: &str,
    title: &str,
    timeout_secs: u64,
) -> anyhow::Result<Page> {
    let client = GatewayClient::new(gateway_url, timeout_secs)
        .with_context(|| format!("invalid gateway URL '{gateway_url}'"))?;

    let mut page = Page::new(title);
    let (pricing, faq) = page.load_all(&client).await;
    page.init_map();

    for (kind, status) in [("pricing", pricing), ("faq", faq)] {
        match status {
            RenderStatus::Rendered(count) => tracing::info!(kind, count, "rendered"),
            RenderStatus::Empty => tracing::warn!(kind, "gateway returned no records"),
            RenderStatus::Failed => tracing::warn!(kind, "load failed; error message rendered"),
        }
    }

    Ok(page)
}

/// Writes the full document to `out`, or stdout when `None`.
pub fn write_page(page: &Page, out: Option<&Path>) -> anyhow::Result<()> {
    let html = page.to_html();
    match out {
        Some(path) => {
            std::fs::write(path, html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "page written");
        }
        None => std::io::stdout()
            .lock()
            .write_all(html.as_bytes())
            .context("failed to write page to stdout")?,
    }
    Ok(())
}

/// Pretty-printed JSON object keyed by script id, holding each published
/// document.
///
/// # Errors
///
/// Fails when the gateway yielded nothing publishable for either kind.
pub async fn schema_documents(gateway_url: &str, timeout_secs: u64) -> anyhow::Result<String> {
    let page = render_page(gateway_url, DEFAULT_TITLE, timeout_secs).await?;

    let mut docs = serde_json::Map::new();
    for id in [OFFER_SCRIPT_ID, FAQ_SCRIPT_ID] {
        if let Some(json) = page.head().get(id) {
            let value: serde_json::Value = serde_json::from_str(json)
                .with_context(|| format!("published document '{id}' is not valid JSON"))?;
            docs.insert(id.to_string(), value);
        }
    }

    anyhow::ensure!(
        !docs.is_empty(),
        "no structured data published; the gateway returned no usable records"
    );
    Ok(serde_json::to_string_pretty(&serde_json::Value::Object(docs))?)
}
