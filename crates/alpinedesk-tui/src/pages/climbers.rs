use chrono::NaiveDate;
use tracing::warn;

use alpinedesk_core::models::Climber;
use alpinedesk_core::{ApiError, Payload};

use super::{step_selection, Effects, Notice, Overlay, Refresh, Request};
use crate::forms::{Form, FormKind};

#[derive(Debug, Clone, Default)]
pub struct ClimbersPage {
    pub climbers: Vec<Climber>,
    pub selection: usize,
}

impl ClimbersPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_fetched(&mut self, result: Result<Payload, ApiError>) -> Effects {
        match result {
            Ok(payload) => {
                self.climbers = payload.list().unwrap_or_default();
                self.selection = 0;
                Effects::none()
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch climbers");
                Effects::notice(Notice::warning(e.to_string()))
            }
        }
    }

    pub fn begin_filter(&self, today: NaiveDate) -> Effects {
        Effects::open(Overlay::Form(Form::date_range(
            FormKind::ClimberRange,
            "Climbers by date range",
            today,
        )))
    }

    pub fn submit(form: &Form) -> Effects {
        match form.date_range_value() {
            Some(range) => Effects::request(Request::Climbers(Some(range))),
            None => Effects::notice(Notice::info("Dates must be YYYY-MM-DD")),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.climbers.iter().map(Climber::list_line).collect()
    }

    pub fn select_next(&mut self) {
        self.selection = step_selection(self.selection, self.climbers.len(), true);
    }

    pub fn select_prev(&mut self) {
        self.selection = step_selection(self.selection, self.climbers.len(), false);
    }
}

impl Refresh for ClimbersPage {
    fn refresh(&mut self) -> Effects {
        Effects::request(Request::Climbers(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alpinedesk_core::models::DateRange;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()
    }

    #[test]
    fn test_refresh_lists_all_climbers() {
        assert_eq!(ClimbersPage::new().refresh().requests, vec![Request::Climbers(None)]);
    }

    #[test]
    fn test_rows() {
        let mut page = ClimbersPage::new();
        page.on_fetched(Ok(Payload::from_bytes(
            br#"[{"first_name": "Reinhold", "last_name": "Messner", "email": "rm@alps.it"},
                 {"email": "anon@x.org"},
                 7]"#,
        )));
        assert_eq!(
            page.lines(),
            vec!["Reinhold Messner — rm@alps.it", "anon@x.org — anon@x.org"]
        );
    }

    #[test]
    fn test_error_keeps_list() {
        let mut page = ClimbersPage::new();
        page.on_fetched(Ok(Payload::from_bytes(br#"[{"first_name": "Ann"}]"#)));

        let effects = page.on_fetched(Err(ApiError::NotFound("gone".to_string())));
        assert_eq!(effects.notice.unwrap().title(), "Error");
        assert_eq!(page.climbers.len(), 1);

        page.on_fetched(Ok(Payload::from_bytes(b"oops")));
        assert!(page.climbers.is_empty());
    }

    #[test]
    fn test_filter_form_submits_range() {
        let Some(Overlay::Form(form)) = ClimbersPage::new().begin_filter(today()).open else {
            panic!("expected range form");
        };
        assert_eq!(form.kind, FormKind::ClimberRange);

        let expected = DateRange::new(
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(),
            today(),
        );
        assert_eq!(
            ClimbersPage::submit(&form).requests,
            vec![Request::Climbers(Some(expected))]
        );
    }

    #[test]
    fn test_bad_date_blocks_request() {
        let mut form = Form::date_range(FormKind::ClimberRange, "Climbers by date range", today());
        form.backspace();
        let effects = ClimbersPage::submit(&form);
        assert!(effects.requests.is_empty());
        assert_eq!(effects.notice.unwrap().title(), "Info");
    }
}
