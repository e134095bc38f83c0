use chrono::NaiveDate;

/// Shown wherever a field is missing.
pub const PLACEHOLDER: &str = "—";

/// Date format used in query strings and request bodies.
const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Borrow an optional field, substituting the placeholder when missing or empty
pub fn or_placeholder(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => PLACEHOLDER,
    }
}

/// Keep at most `max_chars` characters, never splitting a code point
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

pub fn format_query_date(date: NaiveDate) -> String {
    date.format(QUERY_DATE_FORMAT).to_string()
}

pub fn parse_query_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), QUERY_DATE_FORMAT).ok()
}

/// Header title for a picker label: the text before the first `(`, trimmed.
/// `"Everest (Nepal)"` becomes `"Everest"`.
pub fn title_from_label(label: &str) -> &str {
    label.split('(').next().unwrap_or(label).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder(&Some("Alps".to_string())), "Alps");
        assert_eq!(or_placeholder(&Some(String::new())), "—");
        assert_eq!(or_placeholder(&None), "—");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("Hello", 10), "Hello");
        assert_eq!(truncate_chars("Hello World", 5), "Hello");
        assert_eq!(truncate_chars("Ötztal Alps", 6), "Ötztal");
    }

    #[test]
    fn test_query_dates() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        assert_eq!(format_query_date(date), "2025-07-04");
        assert_eq!(parse_query_date(" 2025-07-04 "), Some(date));
        assert_eq!(parse_query_date("04/07/2025"), None);
        assert_eq!(parse_query_date("2025-02-30"), None);
    }

    #[test]
    fn test_title_from_label() {
        assert_eq!(title_from_label("Everest (Nepal)"), "Everest");
        assert_eq!(title_from_label("Matterhorn"), "Matterhorn");
        assert_eq!(title_from_label(" (—)"), "");
    }
}
