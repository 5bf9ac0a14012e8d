//! Fetch-and-render operations for the pricing and FAQ containers.
//!
//! Each load follows the same contract: the container shows a loading
//! indicator, one fetch is issued, and the outcome replaces the container
//! with an error message, a "no data" message, or the built fragment. Only a
//! non-empty success triggers the structured-data publisher, and only for
//! its own kind.

use aptsite_core::{FaqEntry, PricingEntry, Record, RecordKind};

use crate::accordion::AccordionState;
use crate::fragment::{faq_accordion, pricing_table};
use crate::page::{Content, Page};
use crate::source::{RecordSource, SourceError};

pub const PRICING_ERROR: &str = "Unable to load pricing. Please try again later.";
pub const FAQ_ERROR: &str = "Unable to load FAQs. Please try again later.";
pub const PRICING_EMPTY: &str = "No pricing available at this time.";
pub const FAQ_EMPTY: &str = "No FAQs available at this time.";

/// Outcome of one load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    Rendered(usize),
    Empty,
    Failed,
}

impl Page {
    /// Puts the container for `kind` into its loading state.
    pub fn begin(&mut self, kind: RecordKind) {
        self.container_mut(kind).replace(Content::Loading);
    }

    /// Applies a fetch outcome to the container for `kind`.
    pub fn finish(
        &mut self,
        kind: RecordKind,
        outcome: Result<Vec<Record>, SourceError>,
    ) -> RenderStatus {
        let records = match outcome {
            Ok(records) => records,
            Err(error) => {
                tracing::error!(%kind, error = %error, "failed to load records");
                let message = match kind {
                    RecordKind::Pricing => PRICING_ERROR,
                    RecordKind::Faq => FAQ_ERROR,
                };
                self.container_mut(kind).replace(Content::Error(message));
                return RenderStatus::Failed;
            }
        };

        if records.is_empty() {
            let message = match kind {
                RecordKind::Pricing => PRICING_EMPTY,
                RecordKind::Faq => FAQ_EMPTY,
            };
            self.container_mut(kind).replace(Content::NoData(message));
            return RenderStatus::Empty;
        }

        let count = records.len();
        match kind {
            RecordKind::Pricing => self.render_pricing(&records),
            RecordKind::Faq => self.render_faq(&records),
        }
        tracing::debug!(%kind, count, "rendered records");
        RenderStatus::Rendered(count)
    }

    /// Loads and renders the pricing table.
    pub async fn load_pricing<S: RecordSource>(&mut self, source: &S) -> RenderStatus {
        self.begin(RecordKind::Pricing);
        let outcome = source.fetch(RecordKind::Pricing).await;
        self.finish(RecordKind::Pricing, outcome)
    }

    /// Loads and renders the FAQ accordion.
    pub async fn load_faq<S: RecordSource>(&mut self, source: &S) -> RenderStatus {
        self.begin(RecordKind::Faq);
        let outcome = source.fetch(RecordKind::Faq).await;
        self.finish(RecordKind::Faq, outcome)
    }

    /// Loads both kinds with the two fetches in flight together.
    ///
    /// A failure of one kind does not affect the other.
    pub async fn load_all<S: RecordSource>(&mut self, source: &S) -> (RenderStatus, RenderStatus) {
        self.begin(RecordKind::Pricing);
        self.begin(RecordKind::Faq);
        let (pricing, faq) = tokio::join!(
            source.fetch(RecordKind::Pricing),
            source.fetch(RecordKind::Faq)
        );
        (
            self.finish(RecordKind::Pricing, pricing),
            self.finish(RecordKind::Faq, faq),
        )
    }

    fn render_pricing(&mut self, records: &[Record]) {
        let entries: Vec<PricingEntry> = records.iter().map(PricingEntry::from_record).collect();
        self.pricing.replace(Content::Fragment(pricing_table(&entries)));
        self.pricing.clear_placeholder();
        self.publish(Some(entries), None);
    }

    fn render_faq(&mut self, records: &[Record]) {
        let entries: Vec<FaqEntry> = records.iter().map(FaqEntry::from_record).collect();
        // A fresh fragment starts with every panel closed.
        self.accordion = AccordionState::default();
        self.faq
            .replace(Content::Fragment(faq_accordion(&entries, &self.accordion)));
        self.faq.clear_placeholder();
        self.faq_entries.clone_from(&entries);
        self.publish(None, Some(entries));
    }

    fn publish(&mut self, pricing: Option<Vec<PricingEntry>>, faq: Option<Vec<FaqEntry>>) {
        if let Err(error) = self.publisher.update_schema(&mut self.head, pricing, faq) {
            tracing::error!(error = %error, "failed to publish structured data");
        }
    }
}

#[cfg(test)]
#[path = "renderer_test.rs"]
mod tests;
