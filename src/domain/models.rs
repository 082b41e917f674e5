//! Catalog data models.
//!
//! Products live in a remote document store: each record carries a
//! store-assigned identifier plus arbitrary descriptive fields that this
//! application displays but never interprets.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A catalog record with a unique identifier and opaque descriptive fields.
///
/// The identifier is assigned by the persistence layer. All other fields
/// (name, price, ...) are carried through as-is so the catalog schema can
/// evolve without touching this application.
///
/// # Examples
///
/// ```
/// use prodcat::domain::Product;
///
/// let product: Product = serde_json::from_str(r#"{"id": 7, "name": "Mug"}"#).unwrap();
/// assert_eq!(product.id, "7");
/// assert_eq!(product.name(), "Mug");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier, unique within the catalog
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Remaining catalog fields, kept opaque
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Product {
    /// Display name of the product, or a placeholder when the record has none.
    pub fn name(&self) -> &str {
        self.fields
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("(unnamed)")
    }

    /// Renders a field as display text, if the record carries it.
    pub fn field_text(&self, key: &str) -> Option<String> {
        self.fields.get(key).map(value_text)
    }
}

/// A drafted product as collected by the add form, before the store has
/// assigned it an identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ProductDraft {
    /// Sets a text field on the draft.
    pub fn set_text(&mut self, key: &str, value: &str) {
        self.fields
            .insert(key.to_string(), Value::String(value.to_string()));
    }

    /// Sets a numeric field on the draft.
    pub fn set_number(&mut self, key: &str, value: f64) {
        if let Some(number) = serde_json::Number::from_f64(value) {
            self.fields.insert(key.to_string(), Value::Number(number));
        }
    }
}

/// Renders a JSON value the way the catalog views display it: strings
/// unquoted, nulls blank, everything else in JSON notation.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Document stores are inconsistent about identifier types; accept both
/// string and numeric ids and normalize to a string.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "unsupported product id: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_accepts_string_id() {
        let product: Product =
            serde_json::from_str(r#"{"id": "abc123", "name": "Desk"}"#).unwrap();
        assert_eq!(product.id, "abc123");
        assert_eq!(product.name(), "Desk");
    }

    #[test]
    fn test_product_accepts_numeric_id() {
        let product: Product = serde_json::from_str(r#"{"id": 42, "name": "Lamp"}"#).unwrap();
        assert_eq!(product.id, "42");
    }

    #[test]
    fn test_product_rejects_other_id_types() {
        let result: Result<Product, _> = serde_json::from_str(r#"{"id": [1], "name": "X"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_product_keeps_unknown_fields() {
        let product: Product = serde_json::from_str(
            r#"{"id": "1", "name": "Chair", "price": 49.5, "in_stock": true}"#,
        )
        .unwrap();
        assert_eq!(product.field_text("price").unwrap(), "49.5");
        assert_eq!(product.field_text("in_stock").unwrap(), "true");
        assert!(product.field_text("color").is_none());
    }

    #[test]
    fn test_product_name_placeholder() {
        let product: Product = serde_json::from_str(r#"{"id": "1"}"#).unwrap();
        assert_eq!(product.name(), "(unnamed)");
    }

    #[test]
    fn test_draft_serializes_flat() {
        let mut draft = ProductDraft::default();
        draft.set_text("name", "Shelf");
        draft.set_number("price", 12.0);

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["name"], "Shelf");
        assert_eq!(json["price"], 12.0);
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_value_text_rendering() {
        assert_eq!(value_text(&Value::String("plain".into())), "plain");
        assert_eq!(value_text(&Value::Null), "");
        assert_eq!(value_text(&serde_json::json!(3.25)), "3.25");
        assert_eq!(value_text(&serde_json::json!(["a", "b"])), r#"["a","b"]"#);
    }
}
