//! Loosely typed payload fields and their truthiness.
//!
//! The edge device sends whatever its firmware produces: weights as numbers
//! or strings, sometimes nested objects. Ingestion only checks presence, so
//! every field keeps the exact JSON it arrived with.

use core::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A product field as sent on the wire. Serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(Number),
    Text(String),
    /// Booleans, arrays and objects are stored as-is.
    Other(Value),
}

impl FieldValue {
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::Text(s),
            other => Self::Other(other),
        }
    }

    /// Parse command-line style input: numeric text becomes a number, anything
    /// else is kept as text.
    pub fn parse_lossy(input: &str) -> Self {
        match input.trim().parse::<Number>() {
            Ok(n) => Self::Number(n),
            Err(_) => Self::Text(input.to_string()),
        }
    }

    /// Build a numeric value from a float; non-finite values fall back to text.
    pub fn from_f64(value: f64) -> Self {
        match Number::from_f64(value) {
            Some(n) => Self::Number(n),
            None => Self::Text(value.to_string()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl PartialEq<str> for FieldValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for FieldValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<String> for FieldValue {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == Some(other.as_str())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => fmt::Display::fmt(n, f),
            Self::Text(s) => f.write_str(s),
            Self::Other(v) => fmt::Display::fmt(v, f),
        }
    }
}

/// Presence check used at ingestion.
///
/// Absent fields, `null`, `false`, zero and the empty string are falsy;
/// every other value (including empty arrays and objects) is truthy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_values_match_payload_semantics() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&json!(null))));
        assert!(!is_truthy(Some(&json!(false))));
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(Some(&json!(0.0))));
        assert!(!is_truthy(Some(&json!(""))));
    }

    #[test]
    fn truthy_values_match_payload_semantics() {
        assert!(is_truthy(Some(&json!(true))));
        assert!(is_truthy(Some(&json!(1))));
        assert!(is_truthy(Some(&json!(-0.5))));
        assert!(is_truthy(Some(&json!("0"))));
        assert!(is_truthy(Some(&json!([]))));
        assert!(is_truthy(Some(&json!({}))));
    }

    #[test]
    fn field_values_keep_wire_shape() {
        for raw in [json!(2), json!("1.50"), json!(true), json!(["a.png"]), json!({"amount": 2})] {
            let field: FieldValue = serde_json::from_value(raw.clone()).unwrap();
            assert_eq!(field, FieldValue::from_json(raw.clone()));
            assert_eq!(serde_json::to_value(&field).unwrap(), raw);
        }
    }

    #[test]
    fn only_text_compares_to_strings() {
        assert_eq!(FieldValue::from("Apple"), "Apple");
        assert_ne!(FieldValue::from(42), "42");
        assert_eq!(FieldValue::from(42).as_str(), None);
    }

    #[test]
    fn display_renders_non_text_as_json() {
        assert_eq!(FieldValue::from(3).to_string(), "3");
        assert_eq!(FieldValue::from("milk.png").to_string(), "milk.png");
        assert_eq!(FieldValue::from_json(json!({"amount": 2})).to_string(), r#"{"amount":2}"#);
    }

    #[test]
    fn parse_lossy_prefers_numbers() {
        assert_eq!(FieldValue::parse_lossy("12"), FieldValue::from(12));
        assert_eq!(FieldValue::parse_lossy("150g"), FieldValue::from("150g"));
        assert_eq!(FieldValue::parse_lossy("1.5").to_string(), "1.5");
    }
}
