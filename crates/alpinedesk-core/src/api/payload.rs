use serde::de::DeserializeOwned;
use serde_json::Value;

/// A response body parsed as JSON, or nothing.
///
/// Bodies that are empty, not UTF-8 or not JSON become an absent payload;
/// callers render their empty state instead of failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload(Option<Value>);

impl Payload {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let value = std::str::from_utf8(bytes)
            .ok()
            .and_then(|text| serde_json::from_str(text).ok());
        Self(value)
    }

    pub fn absent() -> Self {
        Self(None)
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    pub fn is_non_empty_list(&self) -> bool {
        matches!(self.0, Some(Value::Array(ref items)) if !items.is_empty())
    }

    /// Records of a JSON array body; `None` when the body is not an array.
    /// Elements that are not objects are skipped.
    pub fn list<T: DeserializeOwned>(&self) -> Option<Vec<T>> {
        match self.0 {
            Some(Value::Array(ref items)) => Some(records(items)),
            _ => None,
        }
    }

    /// A single record; `None` unless the body is a JSON object.
    pub fn object<T: DeserializeOwned>(&self) -> Option<T> {
        match self.0 {
            Some(ref value @ Value::Object(_)) => serde_json::from_value(value.clone()).ok(),
            _ => None,
        }
    }

    /// Accept either `[...]` or `{"<key>": [...]}`.
    pub fn list_or_wrapped<T: DeserializeOwned>(&self, key: &str) -> Option<Vec<T>> {
        match self.0 {
            Some(Value::Object(ref map)) if map.contains_key(key) => match map.get(key) {
                Some(Value::Array(items)) => Some(records(items)),
                _ => None,
            },
            _ => self.list(),
        }
    }
}

fn records<T: DeserializeOwned>(items: &[Value]) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.is_object())
        .filter_map(|item| serde_json::from_value(item.clone()).ok())
        .collect()
}
