//! The extraction entry point: one pass, one record.

use recibo_core::{RawOcrResult, ReceiptRecord};

use crate::{amounts, datetime, line_items, merchant, tender};

/// Turn one OCR result into a normalized receipt record.
///
/// Pure function of its input apart from the documented wall-clock
/// default for a missing date. Never fails: malformed text degrades to
/// the per-field defaults, and the only quality signal the caller gets
/// is `confidence_score`.
pub fn extract(raw: &RawOcrResult) -> ReceiptRecord {
    ReceiptRecord {
        merchant_name: merchant::extract_merchant(raw),
        total_amount: amounts::extract_total(raw),
        tax_amount: amounts::extract_tax(raw),
        subtotal_amount: amounts::extract_subtotal(raw),
        date: datetime::extract_date(raw),
        time: datetime::extract_time(&raw.text),
        line_items: line_items::extract_line_items(&raw.text),
        currency: tender::extract_currency(&raw.text),
        payment_method: tender::detect_payment_method(&raw.text),
        confidence_score: confidence_score(raw),
    }
}

/// Mean entity confidence when entities are present (missing per-entity
/// values count as 0.5), else the document-level score, else 0.5.
fn confidence_score(raw: &RawOcrResult) -> f64 {
    if raw.entities.is_empty() {
        return raw.confidence.unwrap_or(0.5);
    }
    let sum: f64 = raw
        .entities
        .iter()
        .map(|e| e.confidence.unwrap_or(0.5))
        .sum();
    sum / raw.entities.len() as f64
}
