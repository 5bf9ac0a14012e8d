//! Price normalization and display formatting.
//!
//! Airtable price cells arrive either as numbers or as free-form currency
//! strings typed by whoever maintains the base (`"$1,250"`, `"1250.00 "`).
//! Normalization uses plain character scanning; see [`crate::records`] for
//! how normalized prices feed the rendered views.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

/// Normalizes a raw price cell into a positive [`Decimal`].
///
/// - Numbers are used as-is.
/// - Strings are stripped of currency symbols, thousands separators and
///   whitespace before parsing.
///
/// Returns `None` for absent, non-numeric, zero or negative values; callers
/// render those as "Call for pricing" and leave them out of offer summaries.
#[must_use]
pub fn normalize_price(value: &Value) -> Option<Decimal> {
    let parsed = match value {
        Value::Number(n) => Decimal::from_str(&n.to_string())
            .ok()
            .or_else(|| n.as_f64().and_then(|f| Decimal::try_from(f).ok())),
        Value::String(s) => parse_price_str(s),
        _ => None,
    }?;

    (parsed > Decimal::ZERO).then_some(parsed)
}

/// Drops `$`, `,` and whitespace; whatever remains must be a plain decimal.
/// Any other text (unit labels, ranges, "from") rejects the whole cell.
fn parse_price_str(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Formats a price as US dollars with thousands separators.
///
/// Whole-dollar amounts omit cents: `1250` → `"$1,250"`, `1250.5` →
/// `"$1,250.50"`.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };

    if cents == "00" {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{cents}")
    }
}
