use chrono::NaiveDate;
use tracing::warn;

use alpinedesk_core::models::{Group, Mountain, NewGroup};
use alpinedesk_core::utils::format_query_date;
use alpinedesk_core::{ApiError, Payload};

use super::selector::NONE_SELECTED;
use super::{step_selection, Effects, MountainListUse, Notice, Overlay, Refresh, Request};
use crate::forms::{self, Form};

#[derive(Debug, Clone, Default)]
pub struct GroupsPage {
    pub groups: Vec<Group>,
    pub selection: usize,
}

impl GroupsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_fetched(&mut self, result: Result<Payload, ApiError>) -> Effects {
        match result {
            Ok(payload) => {
                self.groups = payload.list().unwrap_or_default();
                self.selection = 0;
                Effects::none()
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch groups");
                Effects::notice(Notice::warning(e.to_string()))
            }
        }
    }

    /// The form needs the mountain choices, so they are fetched first.
    pub fn begin_add(&self) -> Effects {
        Effects::request(Request::Mountains(MountainListUse::GroupForm))
    }

    pub fn on_form_mountains(&self, result: Result<Payload, ApiError>, today: NaiveDate) -> Effects {
        match result {
            Ok(payload) => {
                let mountains: Vec<Mountain> = payload.list().unwrap_or_default();
                Effects::open(Overlay::Form(Form::add_group(&mountains, today)))
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch mountains for group form");
                Effects::notice(Notice::warning(e.to_string()))
            }
        }
    }

    pub fn submit(form: &Form) -> Effects {
        let mountain_id = form.choice_id(forms::MOUNTAIN);
        if mountain_id == NONE_SELECTED {
            return Effects::notice(Notice::info("Select mountain"));
        }
        let Some(start) = form.date(forms::START) else {
            return Effects::notice(Notice::info("Start must be YYYY-MM-DD"));
        };

        Effects::request(Request::CreateGroup(NewGroup {
            name: form.text(forms::NAME),
            description: form.text(forms::DESCRIPTION),
            leader_id: form.number(forms::LEADER_ID),
            mountain_id,
            start_date: format_query_date(start),
        }))
    }

    /// The list is refreshed whether or not the group was created.
    pub fn on_created(&mut self, result: Result<Payload, ApiError>) -> Effects {
        let notice = match result {
            Ok(_) => Notice::success("Group created"),
            Err(e) => Notice::warning(e.to_string()),
        };
        self.refresh().with_notice(notice)
    }

    pub fn lines(&self) -> Vec<String> {
        self.groups.iter().map(Group::list_line).collect()
    }

    pub fn select_next(&mut self) {
        self.selection = step_selection(self.selection, self.groups.len(), true);
    }

    pub fn select_prev(&mut self) {
        self.selection = step_selection(self.selection, self.groups.len(), false);
    }
}

impl Refresh for GroupsPage {
    fn refresh(&mut self) -> Effects {
        Effects::request(Request::Groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
    }

    fn group_form() -> Form {
        let page = GroupsPage::new();
        let effects = page.on_form_mountains(
            Ok(Payload::from_bytes(br#"[{"id": 4, "name": "Denali", "country": "USA"}]"#)),
            today(),
        );
        match effects.open {
            Some(Overlay::Form(form)) => form,
            other => panic!("expected group form, got {:?}", other),
        }
    }

    #[test]
    fn test_rows() {
        let mut page = GroupsPage::new();
        page.on_fetched(Ok(Payload::from_bytes(
            br#"[{"name": "North Face Team", "leader_id": 12}, {"name": "Solo"}]"#,
        )));
        assert_eq!(page.lines(), vec!["North Face Team — leader:12", "Solo — leader:—"]);
    }

    #[test]
    fn test_add_fetches_mountains_first() {
        assert_eq!(
            GroupsPage::new().begin_add().requests,
            vec![Request::Mountains(MountainListUse::GroupForm)]
        );
    }

    #[test]
    fn test_submit_refused_without_mountain() {
        let form = group_form();
        let effects = GroupsPage::submit(&form);
        assert!(effects.requests.is_empty());
        assert_eq!(effects.notice, Some(Notice::info("Select mountain")));
    }

    #[test]
    fn test_form_mountains_error_opens_nothing() {
        let page = GroupsPage::new();
        let effects = page.on_form_mountains(Err(ApiError::ServerError("down".to_string())), today());
        assert!(effects.open.is_none());
        assert!(effects.requests.is_empty());
        let notice = effects.notice.unwrap();
        assert_eq!(notice.level, crate::pages::NoticeLevel::Warning);
        assert_eq!(notice.title(), "Error");
    }

    #[test]
    fn test_submit_refused_for_mountain_without_id() {
        let page = GroupsPage::new();
        let Some(Overlay::Form(mut form)) = page
            .on_form_mountains(Ok(Payload::from_bytes(br#"[{"name": "Unnamed col"}]"#)), today())
            .open
        else {
            panic!("expected group form");
        };
        form.focus_next();
        form.cycle_choice(true);

        let effects = GroupsPage::submit(&form);
        assert!(effects.requests.is_empty());
        assert_eq!(effects.notice, Some(Notice::info("Select mountain")));
    }

    #[test]
    fn test_submit_posts_group() {
        let mut form = group_form();
        for c in "Spring".chars() {
            form.input(c);
        }
        form.focus_next();
        form.cycle_choice(true);
        form.focus_next();
        form.backspace();
        form.input('4');
        form.input('2');

        let effects = GroupsPage::submit(&form);
        assert_eq!(
            effects.requests,
            vec![Request::CreateGroup(NewGroup {
                name: "Spring".to_string(),
                description: String::new(),
                leader_id: 42,
                mountain_id: 4,
                start_date: "2025-08-01".to_string(),
            })]
        );
    }

    #[test]
    fn test_created_refreshes_either_way() {
        let mut page = GroupsPage::new();
        let effects = page.on_created(Ok(Payload::absent()));
        assert_eq!(effects.notice, Some(Notice::success("Group created")));
        assert_eq!(effects.requests, vec![Request::Groups]);

        let effects = page.on_created(Err(ApiError::Status(422, "invalid".to_string())));
        assert_eq!(effects.notice.unwrap().title(), "Error");
        assert_eq!(effects.requests, vec![Request::Groups]);
    }
}
