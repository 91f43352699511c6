//! Currency and payment-method detection.

use once_cell::sync::Lazy;
use regex::Regex;

use recibo_core::PaymentMethod;

/// Symbol sniff priority; first symbol present anywhere in the text wins.
const CURRENCY_SYMBOLS: &[(char, &str)] = &[
    ('$', "USD"),
    ('€', "EUR"),
    ('£', "GBP"),
    ('¥', "JPY"),
];

static PAYMENT_RULES: Lazy<Vec<(Regex, PaymentMethod)>> = Lazy::new(|| {
    vec![
        (
            Regex::new(r"(?i)credit|visa|mastercard|amex").unwrap(),
            PaymentMethod::CreditCard,
        ),
        (Regex::new(r"(?i)debit").unwrap(), PaymentMethod::DebitCard),
        (Regex::new(r"(?i)cash").unwrap(), PaymentMethod::Cash),
        (Regex::new(r"(?i)paypal").unwrap(), PaymentMethod::PayPal),
        (
            Regex::new(r"(?i)apple pay|google pay").unwrap(),
            PaymentMethod::MobilePayment,
        ),
    ]
});

pub fn extract_currency(text: &str) -> String {
    for (symbol, code) in CURRENCY_SYMBOLS {
        if text.contains(*symbol) {
            return (*code).to_string();
        }
    }
    "USD".to_string()
}

/// First matching rule in priority order; `None` when the receipt does
/// not say how it was paid.
pub fn detect_payment_method(text: &str) -> Option<PaymentMethod> {
    PAYMENT_RULES
        .iter()
        .find(|(re, _)| re.is_match(text))
        .map(|(_, method)| *method)
}
