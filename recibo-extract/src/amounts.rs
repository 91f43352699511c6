//! Monetary amount resolution (total, tax, subtotal).
//!
//! Tier 1: typed entity with the exact field type. Tier 2: labeled-amount
//! regex over the full text. The grand total alone has a third tier that
//! picks the largest decimal token anywhere on the receipt; totals are
//! typically the largest printed figure. That last rule is an inherited
//! heuristic, not a guarantee (a quantity-times-price line can exceed it).

use once_cell::sync::Lazy;
use regex::Regex;

use recibo_core::RawOcrResult;

static TOTAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:total|amount due|balance)[:\s]*\$?(\d+\.?\d*)").unwrap());
static TAX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:tax|hst|gst|vat)[:\s]*\$?(\d+\.?\d*)").unwrap());
static SUBTOTAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:subtotal|sub[- ]total)[:\s]*\$?(\d+\.?\d*)").unwrap());
static DECIMAL_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$?(\d+\.\d{1,2})\b").unwrap());

/// Round to exactly two fraction digits.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parse a printed amount ("$1,234.50", "17.82"). Negative or
/// non-numeric input is treated as not-found, never as zero.
pub fn parse_amount(s: &str) -> Option<f64> {
    let cleaned: String = s.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    let value: f64 = cleaned.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(round2(value))
}

/// Entity tier, then labeled-regex tier over the text.
fn labeled_amount(raw: &RawOcrResult, entity_type: &str, pattern: &Regex) -> Option<f64> {
    if let Some(entity) = raw.find_entity(&[entity_type]) {
        if let Some(value) = parse_amount(&entity.mention_text) {
            return Some(value);
        }
    }
    let value = pattern
        .captures(&raw.text)
        .and_then(|caps| parse_amount(&caps[1]));
    if value.is_some() {
        tracing::debug!(field = entity_type, "amount resolved from text pattern");
    }
    value
}

/// Largest positive decimal token in the text, if any.
pub fn largest_amount(text: &str) -> Option<f64> {
    DECIMAL_TOKEN_RE
        .captures_iter(text)
        .filter_map(|caps| parse_amount(&caps[1]))
        .filter(|v| *v > 0.0)
        .max_by(|a, b| a.total_cmp(b))
}

pub fn extract_total(raw: &RawOcrResult) -> Option<f64> {
    labeled_amount(raw, "total_amount", &TOTAL_RE).or_else(|| {
        let fallback = largest_amount(&raw.text);
        if fallback.is_some() {
            tracing::debug!("total resolved from largest-amount heuristic");
        }
        fallback
    })
}

pub fn extract_tax(raw: &RawOcrResult) -> Option<f64> {
    labeled_amount(raw, "tax_amount", &TAX_RE)
}

pub fn extract_subtotal(raw: &RawOcrResult) -> Option<f64> {
    labeled_amount(raw, "subtotal_amount", &SUBTOTAL_RE)
}
