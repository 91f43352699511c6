//! Raw OCR provider output, as handed to the extractor.
//!
//! Providers nest the payload differently (Document AI wraps it in a
//! top-level `document` key) but the shape we consume is always the same:
//! full recognized text plus an optional list of typed entities.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A typed field recognized by the OCR provider,
/// e.g. `{type: "total_amount", mentionText: "$17.82"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrEntity {
    #[serde(rename = "type")]
    pub entity_type: String,
    #[serde(default)]
    pub mention_text: String,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// One OCR pass over one document. Entity types may repeat and the list
/// may be empty; completeness varies per provider and per document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOcrResult {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub entities: Vec<OcrEntity>,
    /// Overall document confidence in [0, 1], when the provider reports one.
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl RawOcrResult {
    /// Text-only result with no entity list (fixtures, plain-text dumps).
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entities: Vec::new(),
            confidence: None,
        }
    }

    /// Decode a JSON OCR dump, accepting both the bare shape and the
    /// provider shape that nests everything under a `document` key.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        let payload = match value {
            serde_json::Value::Object(mut map) => match map.remove("document") {
                Some(document) => document,
                None => serde_json::Value::Object(map),
            },
            other => other,
        };
        serde_json::from_value(payload).context("decoding OCR result")
    }

    /// First entity whose type matches any of `types`, scanning in input
    /// order. Types repeat in real provider output; first match wins.
    pub fn find_entity(&self, types: &[&str]) -> Option<&OcrEntity> {
        self.entities
            .iter()
            .find(|e| types.iter().any(|t| e.entity_type == *t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(entity_type: &str, mention: &str) -> OcrEntity {
        OcrEntity {
            entity_type: entity_type.to_string(),
            mention_text: mention.to_string(),
            confidence: Some(0.9),
        }
    }

    #[test]
    fn test_find_entity_first_match_wins() {
        let raw = RawOcrResult {
            text: String::new(),
            entities: vec![
                entity("total_amount", "$10.00"),
                entity("supplier_name", "First Cafe"),
                entity("merchant_name", "Second Cafe"),
            ],
            confidence: None,
        };

        let hit = raw
            .find_entity(&["supplier_name", "merchant_name", "supplier"])
            .unwrap();
        assert_eq!(hit.mention_text, "First Cafe");
        assert!(raw.find_entity(&["receipt_date"]).is_none());
    }

    #[test]
    fn test_decode_bare_shape() {
        let value = serde_json::json!({
            "text": "Total: $5.00",
            "entities": [{"type": "total_amount", "mentionText": "$5.00", "confidence": 0.97}],
            "confidence": 0.95
        });
        let raw = RawOcrResult::from_json_value(value).unwrap();
        assert_eq!(raw.entities.len(), 1);
        assert_eq!(raw.entities[0].entity_type, "total_amount");
        assert_eq!(raw.confidence, Some(0.95));
    }

    #[test]
    fn test_decode_document_wrapped_shape() {
        let value = serde_json::json!({
            "document": {
                "text": "Cafe\nTotal: $5.00",
                "entities": []
            }
        });
        let raw = RawOcrResult::from_json_value(value).unwrap();
        assert_eq!(raw.text, "Cafe\nTotal: $5.00");
        assert!(raw.entities.is_empty());
        assert_eq!(raw.confidence, None);
    }

    #[test]
    fn test_missing_fields_default() {
        let raw = RawOcrResult::from_json_value(serde_json::json!({})).unwrap();
        assert!(raw.text.is_empty());
        assert!(raw.entities.is_empty());
    }
}
