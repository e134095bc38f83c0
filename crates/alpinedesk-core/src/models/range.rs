use chrono::{Months, NaiveDate};

use crate::utils::format::format_query_date;

/// Inclusive date filter sent as `start`/`end` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The default filter: one month back from `today` through `today`.
    pub fn last_month(today: NaiveDate) -> Self {
        let start = today.checked_sub_months(Months::new(1)).unwrap_or(today);
        Self { start, end: today }
    }

    pub fn query(&self) -> String {
        format!(
            "start={}&end={}",
            format_query_date(self.start),
            format_query_date(self.end)
        )
    }
}
