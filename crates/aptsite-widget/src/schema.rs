//! schema.org structured data derived from the cached pricing and FAQ lists.
//!
//! [`SchemaPublisher`] owns a [`SchemaCache`] so the pricing and FAQ loads can
//! arrive independently, in either order, and each still contributes to the
//! published documents. Every publish recomputes its document from the full
//! cached list.

use aptsite_core::{FaqEntry, PricingEntry};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::head::Head;

pub const OFFER_SCRIPT_ID: &str = "schema-offer";
pub const FAQ_SCRIPT_ID: &str = "schema-faq";

const SCHEMA_CONTEXT: &str = "https://schema.org";
const IN_STOCK: &str = "https://schema.org/InStock";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateOffer {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    pub price_currency: &'static str,
    #[serde(with = "rust_decimal::serde::float")]
    pub low_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub high_price: Decimal,
    pub offer_count: usize,
    pub availability: &'static str,
}

impl AggregateOffer {
    /// Summarises every entry with a valid price.
    ///
    /// Returns `None` when no entry has a price, since there is no range to
    /// report.
    #[must_use]
    pub fn from_entries(entries: &[PricingEntry]) -> Option<Self> {
        let mut prices = entries.iter().filter_map(|e| e.price);
        let first = prices.next()?;
        let (low, high, count) = prices.fold((first, first, 1_usize), |(lo, hi, n), p| {
            (lo.min(p), hi.max(p), n + 1)
        });

        Some(Self {
            context: SCHEMA_CONTEXT,
            kind: "Offer",
            price_currency: "USD",
            low_price: low,
            high_price: high,
            offer_count: count,
            availability: IN_STOCK,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqDocument {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    pub main_entity: Vec<FaqQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqQuestion {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: String,
    pub accepted_answer: FaqAnswer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqAnswer {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub text: String,
}

impl FaqDocument {
    /// One `Question` per entry, upstream order preserved.
    #[must_use]
    pub fn from_entries(entries: &[FaqEntry]) -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            kind: "FAQPage",
            main_entity: entries
                .iter()
                .map(|e| FaqQuestion {
                    kind: "Question",
                    name: e.question.clone(),
                    accepted_answer: FaqAnswer {
                        kind: "Answer",
                        text: e.answer.clone(),
                    },
                })
                .collect(),
        }
    }
}

/// Last-seen pricing and FAQ lists.
///
/// Starts empty and is only ever overwritten slot by slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaCache {
    pricing: Vec<PricingEntry>,
    faq: Vec<FaqEntry>,
}

impl SchemaCache {
    /// Replaces each provided slot; `None` leaves that slot untouched.
    pub fn merge(&mut self, pricing: Option<Vec<PricingEntry>>, faq: Option<Vec<FaqEntry>>) {
        if let Some(pricing) = pricing {
            self.pricing = pricing;
        }
        if let Some(faq) = faq {
            self.faq = faq;
        }
    }

    #[must_use]
    pub fn pricing(&self) -> &[PricingEntry] {
        &self.pricing
    }

    #[must_use]
    pub fn faq(&self) -> &[FaqEntry] {
        &self.faq
    }
}

#[derive(Debug, Clone, Default)]
pub struct SchemaPublisher {
    cache: SchemaCache,
}

impl SchemaPublisher {
    #[must_use]
    pub fn cache(&self) -> &SchemaCache {
        &self.cache
    }

    /// Merges the provided lists, then republishes each document whose cached
    /// list is non-empty.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if a document cannot be encoded.
    pub fn update_schema(
        &mut self,
        head: &mut Head,
        pricing: Option<Vec<PricingEntry>>,
        faq: Option<Vec<FaqEntry>>,
    ) -> Result<(), serde_json::Error> {
        self.cache.merge(pricing, faq);

        if !self.cache.pricing.is_empty() {
            match AggregateOffer::from_entries(&self.cache.pricing) {
                Some(offer) => head.publish(OFFER_SCRIPT_ID, &offer)?,
                None => tracing::debug!("no priced units; offer summary not published"),
            }
        }

        if !self.cache.faq.is_empty() {
            head.publish(FAQ_SCRIPT_ID, &FaqDocument::from_entries(&self.cache.faq))?;
        }

        Ok(())
    }
}
