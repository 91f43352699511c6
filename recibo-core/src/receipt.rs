//! Normalized receipt record produced by the extractor.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel merchant name when no plausible candidate survives.
pub const UNKNOWN_MERCHANT: &str = "Unknown Merchant";

/// One purchased product/service entry parsed from a single receipt line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    /// Non-negative, two fraction digits.
    pub amount: f64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl LineItem {
    pub fn new(description: impl Into<String>, amount: f64) -> Self {
        Self {
            description: description.into(),
            amount,
            quantity: 1,
        }
    }
}

/// Payment classification detected from receipt text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    #[serde(rename = "Cash")]
    Cash,
    #[serde(rename = "PayPal")]
    PayPal,
    #[serde(rename = "Mobile Payment")]
    MobilePayment,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::MobilePayment => "Mobile Payment",
        }
    }
}

/// Structured receipt, one per extraction call. Every amount, once `Some`,
/// is a non-negative value already rounded to two fraction digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRecord {
    pub merchant_name: String,
    pub total_amount: Option<f64>,
    pub tax_amount: Option<f64>,
    pub subtotal_amount: Option<f64>,
    /// Receipt date, or the extraction-time local date when not found.
    pub date: NaiveDate,
    /// Free-form matched time string ("3:41 PM"), when present.
    pub time: Option<String>,
    pub line_items: Vec<LineItem>,
    /// ISO-like 3-letter code, "USD" by default.
    pub currency: String,
    pub payment_method: Option<PaymentMethod>,
    /// Extraction quality in [0, 1]; downstream review flows key off this.
    pub confidence_score: f64,
}

impl ReceiptRecord {
    /// Empty record carrying only defaults for the given date.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            merchant_name: UNKNOWN_MERCHANT.to_string(),
            total_amount: None,
            tax_amount: None,
            subtotal_amount: None,
            date,
            time: None,
            line_items: Vec::new(),
            currency: "USD".to_string(),
            payment_method: None,
            confidence_score: 0.5,
        }
    }

    /// Sum of parsed line items (not necessarily the printed total).
    pub fn items_total(&self) -> f64 {
        self.line_items
            .iter()
            .map(|i| i.amount * i.quantity as f64)
            .sum()
    }

    /// Short human-readable block used for confirmation prompts.
    pub fn summary(&self) -> String {
        let mut out = format!("{} — {}", self.merchant_name, self.date);
        if let Some(time) = &self.time {
            out.push_str(&format!(" {}", time));
        }
        out.push('\n');

        for item in &self.line_items {
            out.push_str(&format!(
                "  {} x{}  {:.2}\n",
                item.description, item.quantity, item.amount
            ));
        }

        if let Some(subtotal) = self.subtotal_amount {
            out.push_str(&format!("Subtotal: {:.2} {}\n", subtotal, self.currency));
        }
        if let Some(tax) = self.tax_amount {
            out.push_str(&format!("Tax: {:.2} {}\n", tax, self.currency));
        }
        if let Some(total) = self.total_amount {
            out.push_str(&format!("Total: {:.2} {}\n", total, self.currency));
        }
        if let Some(method) = self.payment_method {
            out.push_str(&format!("Paid: {}\n", method.label()));
        }
        out
    }
}
