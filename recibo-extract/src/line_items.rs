//! Line-item scan: one physical text line, description then trailing
//! amount. Summary rows (total/tax/subtotal/balance) match the same shape
//! and are excluded so downstream sums do not double-count them.

use once_cell::sync::Lazy;
use regex::Regex;

use recibo_core::LineItem;

use crate::amounts::parse_amount;

static ITEM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?)\s+\$?(\d+\.?\d*)$").unwrap());
static SUMMARY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)total|tax|subtotal|balance").unwrap());

/// Parse purchased items out of the raw text, in the order printed.
/// Quantity is always 1; receipts that fold quantity into the description
/// ("2x Coffee") keep it there.
pub fn extract_line_items(text: &str) -> Vec<LineItem> {
    let mut items = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some(caps) = ITEM_RE.captures(line) else {
            continue;
        };
        let description = caps[1].trim();
        if description.chars().count() <= 2 || SUMMARY_RE.is_match(description) {
            continue;
        }
        let Some(amount) = parse_amount(&caps[2]) else {
            continue;
        };
        items.push(LineItem::new(description, amount));
    }

    items
}
