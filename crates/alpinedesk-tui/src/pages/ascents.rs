use chrono::NaiveDate;
use tracing::warn;

use alpinedesk_core::models::{Ascent, DateRange};
use alpinedesk_core::{ApiError, Payload};

use super::{step_selection, Effects, Notice, Overlay, Refresh, Request};
use crate::forms::{Form, FormKind};

/// Which ascents to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AscentQuery {
    Range(DateRange),
    Upcoming,
}

#[derive(Debug, Clone, Default)]
pub struct AscentsPage {
    pub ascents: Vec<Ascent>,
    pub selection: usize,
}

impl AscentsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_fetched(&mut self, result: Result<Payload, ApiError>) -> Effects {
        match result {
            Ok(payload) => {
                self.ascents = payload.list().unwrap_or_default();
                self.selection = 0;
                Effects::none()
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch ascents");
                Effects::notice(Notice::warning(e.to_string()))
            }
        }
    }

    pub fn begin_filter(&self, today: NaiveDate) -> Effects {
        Effects::open(Overlay::Form(Form::date_range(
            FormKind::AscentRange,
            "Ascents by date range",
            today,
        )))
    }

    pub fn submit(form: &Form) -> Effects {
        match form.date_range_value() {
            Some(range) => Effects::request(Request::Ascents(AscentQuery::Range(range))),
            None => Effects::notice(Notice::info("Dates must be YYYY-MM-DD")),
        }
    }

    pub fn upcoming(&self) -> Effects {
        Effects::request(Request::Ascents(AscentQuery::Upcoming))
    }

    pub fn lines(&self) -> Vec<String> {
        self.ascents.iter().map(Ascent::list_line).collect()
    }

    pub fn select_next(&mut self) {
        self.selection = step_selection(self.selection, self.ascents.len(), true);
    }

    pub fn select_prev(&mut self) {
        self.selection = step_selection(self.selection, self.ascents.len(), false);
    }
}

impl Refresh for AscentsPage {
    fn refresh(&mut self) -> Effects {
        self.upcoming()
    }
}
