//! Field deserializers that never fail.
//!
//! The API is loosely typed: ids arrive as numbers or strings, text fields are
//! sometimes numbers, and nested objects are sometimes plain names. Every
//! helper here maps anything it cannot use to `None` so a single odd field
//! never discards a whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept strings, numbers and booleans as text.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Accept integers, floats (rounded) and numeric strings.
pub fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Extract `name` from a nested object such as `{"mountain": {"name": "K2"}}`.
pub fn nested_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => match map.get("name") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        },
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::string")]
        text: Option<String>,
        #[serde(default, deserialize_with = "super::integer")]
        number: Option<i64>,
        #[serde(default, deserialize_with = "super::nested_name")]
        parent: Option<String>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).expect("probe should always deserialize")
    }

    #[test]
    fn test_string_accepts_scalars() {
        assert_eq!(probe(r#"{"text": "Nepal"}"#).text.as_deref(), Some("Nepal"));
        assert_eq!(probe(r#"{"text": 8849}"#).text.as_deref(), Some("8849"));
        assert_eq!(probe(r#"{"text": null}"#).text, None);
        assert_eq!(probe(r#"{"text": ["a"]}"#).text, None);
        assert_eq!(probe("{}").text, None);
    }

    #[test]
    fn test_integer_accepts_numbers_and_numeric_strings() {
        assert_eq!(probe(r#"{"number": 42}"#).number, Some(42));
        assert_eq!(probe(r#"{"number": 8848.86}"#).number, Some(8849));
        assert_eq!(probe(r#"{"number": " 7 "}"#).number, Some(7));
        assert_eq!(probe(r#"{"number": "tall"}"#).number, None);
        assert_eq!(probe(r#"{"number": {"v": 1}}"#).number, None);
    }

    #[test]
    fn test_nested_name() {
        assert_eq!(probe(r#"{"parent": {"name": "K2"}}"#).parent.as_deref(), Some("K2"));
        assert_eq!(probe(r#"{"parent": {"id": 3}}"#).parent, None);
        assert_eq!(probe(r#"{"parent": "K2"}"#).parent, None);
    }
}
