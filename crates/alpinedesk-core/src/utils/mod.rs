//! Utility functions for string formatting and manipulation.

pub mod format;

// Re-export commonly used functions at module level
pub use format::{format_query_date, or_placeholder, parse_query_date, title_from_label, truncate_chars, PLACEHOLDER};
