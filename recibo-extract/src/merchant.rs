//! Merchant name resolution.
//!
//! Providers disagree on the entity type for the merchant, so the lookup
//! covers the known aliases. The text fallback scans the top of the
//! receipt, where the store name is printed, and skips lines that are
//! clearly something else (street address, header boilerplate, phone).

use once_cell::sync::Lazy;
use regex::Regex;

use recibo_core::{RawOcrResult, UNKNOWN_MERCHANT};

const MERCHANT_ENTITY_TYPES: &[&str] = &["supplier_name", "merchant_name", "supplier"];

/// Lines scanned from the top before giving up.
const SCAN_LINES: usize = 5;

static HEADER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)receipt|invoice|bill").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\d{3}\)").unwrap());

fn plausible_name(line: &str) -> bool {
    if line.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return false; // street address
    }
    if HEADER_RE.is_match(line) || PHONE_RE.is_match(line) {
        return false;
    }
    let len = line.chars().count();
    (3..=50).contains(&len)
}

pub fn extract_merchant(raw: &RawOcrResult) -> String {
    if let Some(entity) = raw.find_entity(MERCHANT_ENTITY_TYPES) {
        let name = entity.mention_text.trim();
        if !name.is_empty() {
            return name.to_string();
        }
    }

    let hit = raw
        .text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(SCAN_LINES)
        .find(|l| plausible_name(l));

    match hit {
        Some(name) => {
            tracing::debug!("merchant resolved from line scan");
            name.to_string()
        }
        None => UNKNOWN_MERCHANT.to_string(),
    }
}
