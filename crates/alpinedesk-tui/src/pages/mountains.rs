//! Mountains page: detail of the selected mountain and its groups.
//!
//! The detail and the group list are fetched by two independent requests and
//! each handler only touches its own half of the view.

use tracing::{debug, warn};

use alpinedesk_core::models::{sort_chronologically, Climber, Group, Mountain};
use alpinedesk_core::{ApiError, Payload};

use super::{
    step_selection, Effects, GroupsUse, MountainListUse, Notice, Overlay, Refresh, Request,
};
use crate::forms::{Form, FormKind};

/// Request the detail and the groups of one mountain.
pub fn load_mountain(id: i64) -> Effects {
    if id <= 0 {
        debug!(id, "Ignoring load of mountain without id");
        return Effects::none();
    }
    Effects::requests(vec![
        Request::Mountain(id),
        Request::MountainGroups(id, GroupsUse::Display),
    ])
}

/// "View members" on a group detail dialog.
pub fn view_members(group: &Group) -> Effects {
    match group.key() {
        Some(id) => Effects::request(Request::GroupMembers(id)),
        None => Effects::notice(Notice::info("Group id not available")),
    }
}

/// Show member names. Both a bare list and `{"members": [...]}` are accepted.
pub fn members_overlay(result: Result<Payload, ApiError>) -> Effects {
    match result {
        Ok(payload) => {
            let members: Vec<Climber> = payload.list_or_wrapped("members").unwrap_or_default();
            Effects::open(Overlay::Members(
                members.iter().map(Climber::display_name).collect(),
            ))
        }
        Err(e) => {
            warn!(error = %e, "Failed to fetch group members");
            Effects::notice(Notice::warning(format!("Failed to fetch members: {}", e)))
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MountainsPage {
    /// Refresh goes through the header picker when the page sits in the shell.
    hosted: bool,
    pub current: Option<Mountain>,
    pub groups: Vec<Group>,
    pub selection: usize,
}

impl MountainsPage {
    pub fn new(hosted: bool) -> Self {
        Self { hosted, ..Self::default() }
    }

    pub fn is_hosted(&self) -> bool {
        self.hosted
    }

    pub fn current_id(&self) -> Option<i64> {
        self.current.as_ref().and_then(|m| m.id)
    }

    pub fn on_detail(&mut self, result: Result<Payload, ApiError>) -> Effects {
        match result {
            Ok(payload) => {
                if let Some(mountain) = payload.object::<Mountain>() {
                    self.current = Some(mountain);
                }
                Effects::none()
            }
            Err(e) => {
                warn!(error = %e, "Failed to load mountain");
                Effects::notice(Notice::warning(format!("Failed to load mountain: {}", e)))
            }
        }
    }

    pub fn on_groups(&mut self, result: Result<Payload, ApiError>) -> Effects {
        match result {
            Ok(payload) => {
                self.groups = payload.list().unwrap_or_default();
                sort_chronologically(&mut self.groups);
                self.selection = 0;
                Effects::none()
            }
            Err(e) => {
                warn!(error = %e, "Failed to load groups");
                Effects::notice(Notice::warning(format!("Failed to load groups: {}", e)))
            }
        }
    }

    /// Standalone refresh: keep the current mountain if it still exists,
    /// otherwise fall back to the first one.
    pub fn on_refresh_fetched(&mut self, result: Result<Payload, ApiError>) -> Effects {
        let payload = match result {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "Failed to refresh mountains");
                return Effects::notice(Notice::warning(format!("Failed to refresh mountains: {}", e)));
            }
        };

        let mountains: Vec<Mountain> = payload.list().unwrap_or_default();
        let Some(first) = mountains.first() else {
            self.current = None;
            self.groups.clear();
            self.selection = 0;
            return Effects::none();
        };

        if let Some(id) = self.current_id() {
            if mountains.iter().any(|m| m.id == Some(id)) {
                return load_mountain(id);
            }
        }
        load_mountain(first.id.unwrap_or(0))
    }

    pub fn begin_add(&self) -> Effects {
        Effects::open(Overlay::Form(Form::add_mountain()))
    }

    /// Editing is only allowed while the mountain has no groups, so the
    /// groups are re-fetched first.
    pub fn begin_edit(&self) -> Effects {
        match self.current_id() {
            Some(id) => Effects::request(Request::MountainGroups(id, GroupsUse::EditGuard)),
            None => Effects::notice(Notice::info("No mountain selected")),
        }
    }

    pub fn on_edit_guard(&self, id: i64, result: Result<Payload, ApiError>) -> Effects {
        let payload = match result {
            Ok(payload) => payload,
            Err(e) => return Effects::notice(Notice::warning(format!("Failed: {}", e))),
        };

        if payload.is_non_empty_list() {
            debug!(id, "Edit refused, mountain has groups");
            return Effects::notice(Notice::info(
                "Cannot edit mountain: ascents exist for this mountain",
            ));
        }

        match self.current.as_ref() {
            Some(mountain) if mountain.id == Some(id) => {
                Effects::open(Overlay::Form(Form::edit_mountain(id, mountain)))
            }
            _ => Effects::none(),
        }
    }

    /// Turn a submitted add/edit form into its request.
    pub fn submit(form: &Form) -> Effects {
        match form.kind {
            FormKind::AddMountain => Effects::request(Request::CreateMountain(form.mountain_form())),
            FormKind::EditMountain(id) => {
                Effects::request(Request::UpdateMountain(id, form.mountain_form()))
            }
            _ => Effects::none(),
        }
    }

    pub fn on_created(&mut self, result: Result<Payload, ApiError>) -> Effects {
        match result {
            Ok(_) => self.refresh().with_notice(Notice::success("Mountain created")),
            Err(e) => Effects::notice(Notice::warning(format!("Create failed: {}", e))),
        }
    }

    pub fn on_updated(&mut self, result: Result<Payload, ApiError>) -> Effects {
        match result {
            Ok(_) => self.refresh().with_notice(Notice::success("Mountain updated")),
            Err(e) => Effects::notice(Notice::warning(format!("Update failed: {}", e))),
        }
    }

    pub fn open_selected_group(&self) -> Effects {
        match self.groups.get(self.selection) {
            Some(group) => Effects::open(Overlay::GroupDetail(group.clone())),
            None => Effects::none(),
        }
    }

    pub fn select_next(&mut self) {
        self.selection = step_selection(self.selection, self.groups.len(), true);
    }

    pub fn select_prev(&mut self) {
        self.selection = step_selection(self.selection, self.groups.len(), false);
    }
}

impl Refresh for MountainsPage {
    fn refresh(&mut self) -> Effects {
        if self.hosted {
            Effects::request(Request::Mountains(MountainListUse::Selector))
        } else {
            Effects::request(Request::Mountains(MountainListUse::MountainsRefresh))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::NoticeLevel;

    fn ok(body: &str) -> Result<Payload, ApiError> {
        Ok(Payload::from_bytes(body.as_bytes()))
    }

    fn failed() -> Result<Payload, ApiError> {
        Err(ApiError::ServerError("unavailable".to_string()))
    }

    fn page_with_current(id: i64) -> MountainsPage {
        let mut page = MountainsPage::new(true);
        page.on_detail(ok(&format!(r#"{{"id": {}, "name": "Eiger", "height": 3967}}"#, id)));
        page
    }

    #[test]
    fn test_load_mountain_fires_both_requests() {
        assert_eq!(
            load_mountain(7).requests,
            vec![Request::Mountain(7), Request::MountainGroups(7, GroupsUse::Display)]
        );
        assert_eq!(load_mountain(0), Effects::none());
        assert_eq!(load_mountain(-1), Effects::none());
    }

    #[test]
    fn test_detail_handler() {
        let mut page = page_with_current(3);
        assert_eq!(page.current_id(), Some(3));

        // Not an object: view unchanged, no notice.
        assert_eq!(page.on_detail(ok("[1, 2]")), Effects::none());
        assert_eq!(page.on_detail(ok("garbage")), Effects::none());
        assert_eq!(page.current_id(), Some(3));

        let effects = page.on_detail(failed());
        let notice = effects.notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert!(notice.message.starts_with("Failed to load mountain: "));
        assert_eq!(page.current_id(), Some(3));
    }

    #[test]
    fn test_groups_sorted_by_start_date() {
        let mut page = MountainsPage::new(true);
        page.on_groups(ok(r#"[
            {"group_id": 1, "ascent_start_date": "2024-07-01"},
            {"group_id": 2},
            {"group_id": 3, "ascent_start_date": "2024-05-01"},
            {"group_id": 4, "ascent_start_date": "2024-06-01"}
        ]"#));

        let ids: Vec<Option<i64>> = page.groups.iter().map(Group::key).collect();
        assert_eq!(ids, vec![Some(2), Some(3), Some(4), Some(1)]);
    }

    #[test]
    fn test_groups_error_leaves_list() {
        let mut page = MountainsPage::new(true);
        page.on_groups(ok(r#"[{"group_id": 1}]"#));

        let effects = page.on_groups(failed());
        assert!(effects.notice.unwrap().message.starts_with("Failed to load groups: "));
        assert_eq!(page.groups.len(), 1);

        page.on_groups(ok("{}"));
        assert!(page.groups.is_empty());
    }

    #[test]
    fn test_edit_without_mountain() {
        let page = MountainsPage::new(true);
        assert_eq!(page.begin_edit(), Effects::notice(Notice::info("No mountain selected")));
    }

    #[test]
    fn test_edit_refused_when_groups_exist() {
        let page = page_with_current(5);
        assert_eq!(
            page.begin_edit().requests,
            vec![Request::MountainGroups(5, GroupsUse::EditGuard)]
        );

        let effects = page.on_edit_guard(5, ok(r#"[{"group_id": 1}]"#));
        assert!(effects.requests.is_empty());
        assert!(effects.open.is_none());
        assert_eq!(
            effects.notice.unwrap().message,
            "Cannot edit mountain: ascents exist for this mountain"
        );

        let effects = page.on_edit_guard(5, failed());
        assert!(effects.notice.unwrap().message.starts_with("Failed: "));
    }

    #[test]
    fn test_edit_opens_prefilled_form() {
        let page = page_with_current(5);
        let effects = page.on_edit_guard(5, ok("[]"));
        let Some(Overlay::Form(form)) = effects.open else {
            panic!("expected edit form");
        };
        assert_eq!(form.kind, FormKind::EditMountain(5));
        assert_eq!(form.mountain_form().name, "Eiger");

        let submit = MountainsPage::submit(&form);
        assert_eq!(
            submit.requests,
            vec![Request::UpdateMountain(5, form.mountain_form())]
        );
    }

    #[test]
    fn test_save_outcomes() {
        let mut page = MountainsPage::new(true);
        let effects = page.on_created(ok(r#"{"id": 9}"#));
        assert_eq!(effects.notice, Some(Notice::success("Mountain created")));
        assert_eq!(effects.requests, vec![Request::Mountains(MountainListUse::Selector)]);

        let effects = page.on_updated(failed());
        assert!(effects.requests.is_empty());
        assert!(effects.notice.unwrap().message.starts_with("Update failed: "));

        let mut standalone = MountainsPage::new(false);
        let effects = standalone.on_updated(ok(""));
        assert_eq!(effects.notice, Some(Notice::success("Mountain updated")));
        assert_eq!(
            effects.requests,
            vec![Request::Mountains(MountainListUse::MountainsRefresh)]
        );
    }

    #[test]
    fn test_standalone_refresh_fallback() {
        let mut page = MountainsPage::new(false);
        page.on_detail(ok(r#"{"id": 2, "name": "K2"}"#));
        page.on_groups(ok(r#"[{"group_id": 1}]"#));

        let list = r#"[{"id": 1, "name": "Everest"}, {"id": 2, "name": "K2"}]"#;
        assert_eq!(page.on_refresh_fetched(ok(list)), load_mountain(2));

        let list = r#"[{"id": 4, "name": "Lhotse"}]"#;
        assert_eq!(page.on_refresh_fetched(ok(list)), load_mountain(4));

        assert_eq!(page.on_refresh_fetched(ok("[]")), Effects::none());
        assert!(page.current.is_none());
        assert!(page.groups.is_empty());
    }

    #[test]
    fn test_standalone_refresh_error_keeps_view() {
        let mut page = MountainsPage::new(false);
        page.on_detail(ok(r#"{"id": 2, "name": "K2"}"#));
        page.on_groups(ok(r#"[{"group_id": 1}, {"group_id": 2}]"#));

        let effects = page.on_refresh_fetched(failed());
        assert!(effects.requests.is_empty());
        assert!(effects.open.is_none());
        let notice = effects.notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert!(notice.message.starts_with("Failed to refresh mountains: "));
        assert_eq!(page.current_id(), Some(2));
        assert_eq!(page.groups.len(), 2);
    }

    #[test]
    fn test_group_detail_and_members() {
        let mut page = MountainsPage::new(true);
        page.on_groups(ok(r#"[{"name": "Alpha"}, {"group_id": 8, "name": "Beta"}]"#));

        page.select_next();
        let Some(Overlay::GroupDetail(group)) = page.open_selected_group().open else {
            panic!("expected group detail");
        };
        assert_eq!(view_members(&group).requests, vec![Request::GroupMembers(8)]);

        page.select_prev();
        let Some(Overlay::GroupDetail(group)) = page.open_selected_group().open else {
            panic!("expected group detail");
        };
        assert_eq!(
            view_members(&group),
            Effects::notice(Notice::info("Group id not available"))
        );
    }

    #[test]
    fn test_members_accepts_both_shapes() {
        let bare = members_overlay(ok(r#"[{"first_name": "Ann", "last_name": "Lee"}]"#));
        assert_eq!(bare.open, Some(Overlay::Members(vec!["Ann Lee".to_string()])));

        let wrapped = members_overlay(ok(r#"{"members": [{"email": "b@x.org"}, {}]}"#));
        assert_eq!(
            wrapped.open,
            Some(Overlay::Members(vec!["b@x.org".to_string(), "Unknown".to_string()]))
        );

        let error = members_overlay(failed());
        assert!(error.notice.unwrap().message.starts_with("Failed to fetch members: "));
    }
}
