use serde::Deserialize;

use super::lenient;
use crate::utils::format::or_placeholder;

/// A scheduled or completed climb linking a mountain and a group.
///
/// Mountain and group arrive either flattened (`mountain_name`) or nested
/// (`mountain: {name}`); the flattened form wins.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ascent {
    #[serde(default, deserialize_with = "lenient::string")]
    pub mountain_name: Option<String>,
    #[serde(default, rename = "mountain", deserialize_with = "lenient::nested_name")]
    pub mountain_nested: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub group_name: Option<String>,
    #[serde(default, rename = "group", deserialize_with = "lenient::nested_name")]
    pub group_nested: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: Option<String>,
}

impl Ascent {
    pub fn mountain_display(&self) -> &str {
        first_present(&self.mountain_name, &self.mountain_nested)
    }

    pub fn group_display(&self) -> &str {
        first_present(&self.group_name, &self.group_nested)
    }

    /// Row text on the Ascents page.
    pub fn list_line(&self) -> String {
        format!(
            "{} — {} — {} -> {} — {}",
            self.mountain_display(),
            self.group_display(),
            or_placeholder(&self.start_date),
            or_placeholder(&self.end_date),
            or_placeholder(&self.status)
        )
    }
}

fn first_present<'a>(flat: &'a Option<String>, nested: &'a Option<String>) -> &'a str {
    match flat.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => or_placeholder(nested),
    }
}
