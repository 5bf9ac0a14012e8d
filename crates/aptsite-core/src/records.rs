//! Airtable record shapes and the pricing/FAQ views derived from them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::price::normalize_price;

pub const UNIT_FIELD: &str = "Unit";
pub const PRICE_FIELD: &str = "Price";
pub const PROMOTION_FIELD: &str = "Promotion";
pub const QUESTION_FIELD: &str = "Question";
pub const ANSWER_FIELD: &str = "Answer";

pub const UNIT_FALLBACK: &str = "Apartment";
pub const CALL_FOR_PRICING: &str = "Call for pricing";
pub const QUESTION_FALLBACK: &str = "Question";
pub const ANSWER_FALLBACK: &str = "Answer";

/// A single upstream row: an id plus loosely typed named fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(
        rename = "createdTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_time: Option<String>,
}

impl Record {
    /// Returns a trimmed, non-empty string field, if present.
    ///
    /// Numeric cells are rendered with their JSON representation so a unit
    /// named `2` in Airtable still displays.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<String> {
        match self.fields.get(name)? {
            Value::String(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Envelope returned by the Airtable list-records endpoint.
///
/// A body without `records` deserializes to an empty list. `offset` is kept
/// only so it round-trips; pages beyond the first are never requested.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordsPage {
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
}

/// Combined body served by the proxy gateway.
///
/// Either list defaults to empty when absent from the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GatewayPayload {
    #[serde(default)]
    pub pricing: Vec<Record>,
    #[serde(default)]
    pub faq: Vec<Record>,
}

impl GatewayPayload {
    /// Moves out the list for `kind`.
    #[must_use]
    pub fn take(self, kind: RecordKind) -> Vec<Record> {
        match kind {
            RecordKind::Pricing => self.pricing,
            RecordKind::Faq => self.faq,
        }
    }
}

/// The two record collections the site consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Pricing,
    Faq,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Pricing => write!(f, "pricing"),
            RecordKind::Faq => write!(f, "faq"),
        }
    }
}

/// Pricing row with fallbacks applied and the price normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingEntry {
    pub unit: String,
    /// `None` means "Call for pricing".
    pub price: Option<Decimal>,
    pub promotion: Option<String>,
}

impl PricingEntry {
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self {
            unit: record
                .text(UNIT_FIELD)
                .unwrap_or_else(|| UNIT_FALLBACK.to_string()),
            price: record.fields.get(PRICE_FIELD).and_then(normalize_price),
            promotion: record.text(PROMOTION_FIELD),
        }
    }

    #[must_use]
    pub fn display_price(&self) -> String {
        self.price
            .map_or_else(|| CALL_FOR_PRICING.to_string(), crate::price::format_usd)
    }
}

/// FAQ row with fallbacks applied. `answer` may contain inline markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self {
            question: record
                .text(QUESTION_FIELD)
                .unwrap_or_else(|| QUESTION_FALLBACK.to_string()),
            answer: record
                .text(ANSWER_FIELD)
                .unwrap_or_else(|| ANSWER_FALLBACK.to_string()),
        }
    }
}
