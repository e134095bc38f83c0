//! Page controllers.
//!
//! Each page owns the last snapshot it fetched and exposes its operations as
//! plain methods returning [`Effects`]: requests to send, a notice to show,
//! or an overlay to open. Nothing here touches the network or the terminal;
//! the shell in `app` sends the requests and routes every [`Outcome`] back to
//! the handler that asked for it.

pub mod ascents;
pub mod climbers;
pub mod groups;
pub mod mountains;
pub mod selector;
pub mod stats;

use alpinedesk_core::models::{DateRange, Group, MountainForm, NewGroup};
use alpinedesk_core::{ApiClient, ApiError, Payload};

use crate::forms::Form;

pub use ascents::{AscentQuery, AscentsPage};
pub use climbers::ClimbersPage;
pub use groups::GroupsPage;
pub use mountains::MountainsPage;
pub use selector::MountainSelector;
pub use stats::StatsPage;

/// Who receives a `GET /mountains/` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountainListUse {
    /// Top selector reload.
    Selector,
    /// Mountains page refreshing on its own.
    MountainsRefresh,
    /// Choices for the add-group form.
    GroupForm,
}

/// Who receives a `GET /mountains/{id}/groups` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupsUse {
    Display,
    EditGuard,
}

/// One API call, tagged with enough context to route its result.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Mountains(MountainListUse),
    Mountain(i64),
    MountainGroups(i64, GroupsUse),
    CreateMountain(MountainForm),
    UpdateMountain(i64, MountainForm),
    MountainStats,
    Climbers(Option<DateRange>),
    Groups,
    CreateGroup(NewGroup),
    GroupMembers(i64),
    Ascents(AscentQuery),
}

impl Request {
    pub async fn send(&self, api: &ApiClient) -> Result<Payload, ApiError> {
        match self {
            Request::Mountains(_) => api.fetch_mountains().await,
            Request::Mountain(id) => api.fetch_mountain(*id).await,
            Request::MountainGroups(id, _) => api.fetch_mountain_groups(*id).await,
            Request::CreateMountain(form) => api.create_mountain(form).await,
            Request::UpdateMountain(id, form) => api.update_mountain(*id, form).await,
            Request::MountainStats => api.fetch_mountain_stats().await,
            Request::Climbers(None) => api.fetch_climbers().await,
            Request::Climbers(Some(range)) => api.fetch_climbers_by_range(range).await,
            Request::Groups => api.fetch_groups().await,
            Request::CreateGroup(group) => api.create_group(group).await,
            Request::GroupMembers(id) => api.fetch_group_members(*id).await,
            Request::Ascents(AscentQuery::Range(range)) => api.fetch_ascents_by_range(range).await,
            Request::Ascents(AscentQuery::Upcoming) => api.fetch_upcoming_ascents().await,
        }
    }

    /// Short description for logs, e.g. `GET /mountains/1/groups`.
    pub fn describe(&self) -> String {
        match self {
            Request::Mountains(_) => "GET /mountains/".to_string(),
            Request::Mountain(id) => format!("GET /mountains/{}", id),
            Request::MountainGroups(id, _) => format!("GET /mountains/{}/groups", id),
            Request::CreateMountain(_) => "POST /mountains/".to_string(),
            Request::UpdateMountain(id, _) => format!("PUT /mountains/{}", id),
            Request::MountainStats => "GET /mountains/stats".to_string(),
            Request::Climbers(None) => "GET /climbers/".to_string(),
            Request::Climbers(Some(range)) => format!("GET /climbers/by-date-range?{}", range.query()),
            Request::Groups => "GET /groups/".to_string(),
            Request::CreateGroup(_) => "POST /groups/".to_string(),
            Request::GroupMembers(id) => format!("GET /groups/{}/members", id),
            Request::Ascents(AscentQuery::Range(range)) => {
                format!("GET /ascents/by-date-range?{}", range.query())
            }
            Request::Ascents(AscentQuery::Upcoming) => "GET /ascents/upcoming".to_string(),
        }
    }
}

/// A completed request travelling back to the UI thread.
#[derive(Debug)]
pub struct Outcome {
    pub request: Request,
    pub result: Result<Payload, ApiError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
}

/// Modal message shown on top of everything else.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }

    pub fn title(&self) -> &'static str {
        match self.level {
            NoticeLevel::Info => "Info",
            NoticeLevel::Success => "Success",
            NoticeLevel::Warning => "Error",
        }
    }
}

/// Modal layers stacked above the pages. The last one receives input.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Notice(Notice),
    Form(Form),
    GroupDetail(Group),
    /// Display names of a group's members.
    Members(Vec<String>),
}

/// What a page operation asks the shell to do.
#[derive(Debug, Default, PartialEq)]
pub struct Effects {
    pub requests: Vec<Request>,
    pub notice: Option<Notice>,
    pub open: Option<Overlay>,
}

impl Effects {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn request(request: Request) -> Self {
        Self { requests: vec![request], ..Self::default() }
    }

    pub fn requests(requests: Vec<Request>) -> Self {
        Self { requests, ..Self::default() }
    }

    pub fn notice(notice: Notice) -> Self {
        Self { notice: Some(notice), ..Self::default() }
    }

    pub fn open(overlay: Overlay) -> Self {
        Self { open: Some(overlay), ..Self::default() }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }
}

/// Every page can re-fetch its data; the shell calls this on each visit.
pub trait Refresh {
    fn refresh(&mut self) -> Effects;
}

/// Move a list cursor one step, clamped to the list bounds.
pub fn step_selection(selection: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        0
    } else if forward {
        (selection + 1).min(len - 1)
    } else {
        selection.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_selection() {
        assert_eq!(step_selection(0, 0, true), 0);
        assert_eq!(step_selection(0, 3, true), 1);
        assert_eq!(step_selection(2, 3, true), 2);
        assert_eq!(step_selection(0, 3, false), 0);
        assert_eq!(step_selection(2, 3, false), 1);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            Request::MountainGroups(1, GroupsUse::EditGuard).describe(),
            "GET /mountains/1/groups"
        );
        assert_eq!(Request::Ascents(AscentQuery::Upcoming).describe(), "GET /ascents/upcoming");
    }

    #[test]
    fn test_notice_titles() {
        assert_eq!(Notice::warning("x").title(), "Error");
        assert_eq!(Notice::success("x").title(), "Success");
        assert_eq!(Notice::info("x").title(), "Info");
    }
}
