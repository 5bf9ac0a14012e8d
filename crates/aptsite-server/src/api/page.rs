//! Server-rendered marketing page, filled from the in-process Airtable
//! client rather than through the public gateway.

use aptsite_core::{Record, RecordKind};
use aptsite_widget::{Page, RecordSource, SourceError};
use axum::{extract::State, response::Html};

use super::{gateway::CREDENTIAL_MISSING, AppState};

pub(super) const PAGE_TITLE: &str = "Pricing & FAQ";

#[async_trait::async_trait]
impl RecordSource for AppState {
    async fn fetch(&self, kind: RecordKind) -> Result<Vec<Record>, SourceError> {
        let client = self
            .upstream
            .as_deref()
            .ok_or_else(|| SourceError::NotConfigured(CREDENTIAL_MISSING.to_string()))?;
        client
            .list_records(self.table(kind))
            .await
            .map_err(|e| SourceError::Upstream(e.to_string()))
    }
}

pub(super) async fn index(State(state): State<AppState>) -> Html<String> {
    let mut page = Page::new(PAGE_TITLE);
    let (pricing, faq) = page.load_all(&state).await;
    page.init_map();
    tracing::debug!(?pricing, ?faq, "page rendered");
    Html(page.to_html())
}
