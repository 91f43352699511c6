use chrono::{Local, NaiveDate};
use recibo_core::{OcrEntity, RawOcrResult, UNKNOWN_MERCHANT};
use recibo_extract::extract;

const DEMO_RECEIPT: &str = "Demo Restaurant
Coffee               $4.50
Sandwich            $12.00
Tax                  $1.32
Total              $17.82";

/// End-to-end scenario over a realistic text-only receipt.
#[test]
fn test_demo_restaurant_receipt() {
    let raw = RawOcrResult::from_text(DEMO_RECEIPT);
    let record = extract(&raw);

    assert_eq!(record.merchant_name, "Demo Restaurant");
    assert_eq!(record.total_amount, Some(17.82));
    assert_eq!(record.tax_amount, Some(1.32));
    assert_eq!(record.subtotal_amount, None);
    assert_eq!(record.currency, "USD");
    assert_eq!(record.payment_method, None);

    let items: Vec<(&str, f64)> = record
        .line_items
        .iter()
        .map(|i| (i.description.as_str(), i.amount))
        .collect();
    assert_eq!(items, vec![("Coffee", 4.50), ("Sandwich", 12.00)]);
    assert!(record.line_items.iter().all(|i| i.quantity == 1));
}

/// A typed entity beats a conflicting value in the text.
#[test]
fn test_entity_tier_takes_precedence() {
    let raw = RawOcrResult {
        text: "Total: $99.00".to_string(),
        entities: vec![OcrEntity {
            entity_type: "total_amount".to_string(),
            mention_text: "$12.34".to_string(),
            confidence: Some(0.95),
        }],
        confidence: None,
    };
    assert_eq!(extract(&raw).total_amount, Some(12.34));
}

/// With no labeled total anywhere, the largest decimal token wins.
#[test]
fn test_largest_amount_total_fallback() {
    let raw = RawOcrResult::from_text("4.50\n12.00\n1.32\n17.82");
    assert_eq!(extract(&raw).total_amount, Some(17.82));
}

/// Missing date and currency resolve to the documented defaults.
#[test]
fn test_defaults_for_missing_fields() {
    let raw = RawOcrResult::from_text("Corner Store\nCoffee  4.50");
    let record = extract(&raw);
    assert_eq!(record.date, Local::now().date_naive());
    assert_eq!(record.currency, "USD");
    assert_eq!(record.time, None);
}

/// A dated, entity-rich dump in the provider's wrapped JSON shape.
#[test]
fn test_document_wrapped_json_dump() {
    let value = serde_json::json!({
        "document": {
            "text": "RECEIPT\nDemo Restaurant\nVisa ending 1234\nTotal $20.00\nOct 3, 2025 7:15 pm",
            "entities": [
                {"type": "supplier_name", "mentionText": "Demo Restaurant", "confidence": 0.97},
                {"type": "receipt_date", "mentionText": "2025-10-03", "confidence": 0.93}
            ]
        }
    });
    let raw = RawOcrResult::from_json_value(value).unwrap();
    let record = extract(&raw);

    assert_eq!(record.merchant_name, "Demo Restaurant");
    assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 10, 3).unwrap());
    assert_eq!(record.time.as_deref(), Some("7:15 pm"));
    assert_eq!(record.total_amount, Some(20.00));
    assert_eq!(
        record.payment_method.map(|m| m.label()),
        Some("Credit Card")
    );
    assert!((record.confidence_score - 0.95).abs() < 1e-9);
}

/// Extraction never fails, whatever the text looks like.
#[test]
fn test_never_panics_on_garbage() {
    let inputs = [
        "",
        "\n\n\n",
        "$$$ ¥¥¥ €€€",
        "no structure at all, just words",
        "9999999999999999999999.99",
        "Total: \nTax: abc\n12/99/9999",
    ];
    for text in inputs {
        let record = extract(&RawOcrResult::from_text(text));
        assert!(!record.merchant_name.is_empty());
        assert!((0.0..=1.0).contains(&record.confidence_score));
    }

    let record = extract(&RawOcrResult::default());
    assert_eq!(record.merchant_name, UNKNOWN_MERCHANT);
}

/// Amounts, once present, carry exactly two fraction digits.
#[test]
fn test_amounts_are_two_decimal_normalized() {
    let raw = RawOcrResult::from_text("Snack 3.5\nTotal 7.125");
    let record = extract(&raw);
    assert_eq!(record.line_items[0].amount, 3.50);
    assert_eq!(record.total_amount, Some(7.13));
}
