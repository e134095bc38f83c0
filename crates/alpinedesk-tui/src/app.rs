//! Application state management for alpinedesk.
//!
//! `App` owns the pages, the header picker and the overlay stack. Page
//! operations hand back [`Effects`]; requests are queued here, sent on tokio
//! tasks by [`App::flush_requests`] and their outcomes routed back to the
//! owning page by [`App::check_outcomes`].

use anyhow::Result;
use chrono::NaiveDate;
use tokio::sync::mpsc;
use tracing::{debug, info};

use alpinedesk_core::{ApiClient, Config};

use crate::forms::FormKind;
use crate::pages::mountains::{members_overlay, view_members};
use crate::pages::{
    AscentsPage, ClimbersPage, Effects, GroupsPage, GroupsUse, MountainListUse, MountainSelector,
    MountainsPage, Outcome, Overlay, Refresh, Request, StatsPage,
};

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the outcome channel.
/// A page switch issues at most two requests; 32 leaves plenty of headroom.
const CHANNEL_BUFFER_SIZE: usize = 32;

/// Sidebar width with labels.
const SIDEBAR_EXPANDED_WIDTH: u16 = 18;

/// Sidebar width with shortcut keys only.
const SIDEBAR_COLLAPSED_WIDTH: u16 = 5;

// ============================================================================
// UI State Types
// ============================================================================

/// Pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Mountains,
    Climbers,
    Groups,
    Ascents,
    Stats,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Mountains,
        Page::Climbers,
        Page::Groups,
        Page::Ascents,
        Page::Stats,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Mountains => "Mountains",
            Page::Climbers => "Climbers",
            Page::Groups => "Groups",
            Page::Ascents => "Ascents",
            Page::Stats => "Stats",
        }
    }

    /// Number key that jumps to this page.
    pub fn shortcut(&self) -> char {
        match self {
            Page::Mountains => '1',
            Page::Climbers => '2',
            Page::Groups => '3',
            Page::Ascents => '4',
            Page::Stats => '5',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.shortcut() == c)
    }

    /// Get the next page (wrapping around)
    pub fn next(&self) -> Self {
        match self {
            Page::Mountains => Page::Climbers,
            Page::Climbers => Page::Groups,
            Page::Groups => Page::Ascents,
            Page::Ascents => Page::Stats,
            Page::Stats => Page::Mountains,
        }
    }

    /// Get the previous page (wrapping around)
    pub fn prev(&self) -> Self {
        match self {
            Page::Mountains => Page::Stats,
            Page::Climbers => Page::Mountains,
            Page::Groups => Page::Climbers,
            Page::Ascents => Page::Groups,
            Page::Stats => Page::Ascents,
        }
    }
}

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    ShowingHelp,
    ConfirmingQuit,
    Quitting,
}

// ============================================================================
// Main Application Struct
// ============================================================================

/// Main application state container
pub struct App {
    api: ApiClient,
    outcome_tx: mpsc::Sender<Outcome>,
    outcome_rx: mpsc::Receiver<Outcome>,

    // UI State
    pub state: AppState,
    pub page: Page,
    pub sidebar_expanded: bool,
    pub overlays: Vec<Overlay>,

    // Pages
    pub selector: MountainSelector,
    pub mountains: MountainsPage,
    pub climbers: ClimbersPage,
    pub groups: GroupsPage,
    pub ascents: AscentsPage,
    pub stats: StatsPage,

    // Requests
    pending: Vec<Request>,
    pub in_flight: usize,
}

impl App {
    /// Create the app. A standalone app has no header picker and the
    /// Mountains page refreshes itself.
    pub fn new(config: &Config, standalone: bool) -> Result<Self> {
        let api = ApiClient::new(config)?;
        let (outcome_tx, outcome_rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        Ok(Self {
            api,
            outcome_tx,
            outcome_rx,
            state: AppState::Normal,
            page: Page::Mountains,
            sidebar_expanded: true,
            overlays: Vec::new(),
            selector: MountainSelector::new(),
            mountains: MountainsPage::new(!standalone),
            climbers: ClimbersPage::new(),
            groups: GroupsPage::new(),
            ascents: AscentsPage::new(),
            stats: StatsPage::new(),
            pending: Vec::new(),
            in_flight: 0,
        })
    }

    pub fn start(&mut self) {
        info!(standalone = !self.mountains.is_hosted(), "Activating start page");
        self.switch_page(Page::Mountains);
    }

    pub fn has_selector(&self) -> bool {
        self.mountains.is_hosted()
    }

    /// Activate a page. Every visit refreshes it, even when it is already
    /// active.
    pub fn switch_page(&mut self, page: Page) {
        debug!(page = page.title(), "Switching page");
        self.page = page;
        self.refresh_current_page();
    }

    pub fn refresh_current_page(&mut self) {
        let effects = self.current_page_mut().refresh();
        self.apply(effects);
    }

    fn current_page_mut(&mut self) -> &mut dyn Refresh {
        match self.page {
            Page::Mountains => &mut self.mountains,
            Page::Climbers => &mut self.climbers,
            Page::Groups => &mut self.groups,
            Page::Ascents => &mut self.ascents,
            Page::Stats => &mut self.stats,
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_expanded = !self.sidebar_expanded;
    }

    pub fn sidebar_width(&self) -> u16 {
        if self.sidebar_expanded {
            SIDEBAR_EXPANDED_WIDTH
        } else {
            SIDEBAR_COLLAPSED_WIDTH
        }
    }

    /// Queue requests and push overlays. A notice lands above a newly
    /// opened overlay.
    pub fn apply(&mut self, effects: Effects) {
        self.pending.extend(effects.requests);
        if let Some(overlay) = effects.open {
            self.overlays.push(overlay);
        }
        if let Some(notice) = effects.notice {
            self.overlays.push(Overlay::Notice(notice));
        }
    }

    /// Requests queued since the last flush.
    pub fn pending(&self) -> &[Request] {
        &self.pending
    }

    /// Send every queued request on its own task.
    pub fn flush_requests(&mut self) {
        for request in self.pending.drain(..) {
            debug!(request = %request.describe(), "Dispatching request");
            self.in_flight += 1;

            let api = self.api.clone();
            let tx = self.outcome_tx.clone();
            tokio::spawn(async move {
                let result = request.send(&api).await;
                if tx.send(Outcome { request, result }).await.is_err() {
                    debug!("Outcome receiver dropped");
                }
            });
        }
    }

    /// Drain completed requests and route them to their pages.
    pub fn check_outcomes(&mut self) {
        let mut outcomes = Vec::new();
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            outcomes.push(outcome);
        }

        for outcome in outcomes {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.process_outcome(outcome);
        }
    }

    pub fn process_outcome(&mut self, outcome: Outcome) {
        let Outcome { request, result } = outcome;
        debug!(request = %request.describe(), ok = result.is_ok(), "Request completed");

        let effects = match request {
            Request::Mountains(MountainListUse::Selector) => self.selector.on_loaded(result),
            Request::Mountains(MountainListUse::MountainsRefresh) => {
                self.mountains.on_refresh_fetched(result)
            }
            Request::Mountains(MountainListUse::GroupForm) => {
                self.groups.on_form_mountains(result, Self::today())
            }
            Request::Mountain(_) => self.mountains.on_detail(result),
            Request::MountainGroups(_, GroupsUse::Display) => self.mountains.on_groups(result),
            Request::MountainGroups(id, GroupsUse::EditGuard) => {
                self.mountains.on_edit_guard(id, result)
            }
            Request::CreateMountain(_) => self.mountains.on_created(result),
            Request::UpdateMountain(..) => self.mountains.on_updated(result),
            Request::MountainStats => self.stats.on_fetched(result),
            Request::Climbers(_) => self.climbers.on_fetched(result),
            Request::Groups => self.groups.on_fetched(result),
            Request::CreateGroup(_) => self.groups.on_created(result),
            Request::GroupMembers(_) => members_overlay(result),
            Request::Ascents(_) => self.ascents.on_fetched(result),
        };
        self.apply(effects);
    }

    // ===== Page actions =====

    pub fn select_next(&mut self) {
        match self.page {
            Page::Mountains => self.mountains.select_next(),
            Page::Climbers => self.climbers.select_next(),
            Page::Groups => self.groups.select_next(),
            Page::Ascents => self.ascents.select_next(),
            Page::Stats => {}
        }
    }

    pub fn select_prev(&mut self) {
        match self.page {
            Page::Mountains => self.mountains.select_prev(),
            Page::Climbers => self.climbers.select_prev(),
            Page::Groups => self.groups.select_prev(),
            Page::Ascents => self.ascents.select_prev(),
            Page::Stats => {}
        }
    }

    pub fn selector_next(&mut self) {
        if self.has_selector() {
            let effects = self.selector.select_next();
            self.apply(effects);
        }
    }

    pub fn selector_prev(&mut self) {
        if self.has_selector() {
            let effects = self.selector.select_prev();
            self.apply(effects);
        }
    }

    /// Enter on a list row.
    pub fn open_selected(&mut self) {
        if self.page == Page::Mountains {
            let effects = self.mountains.open_selected_group();
            self.apply(effects);
        }
    }

    pub fn add(&mut self) {
        let effects = match self.page {
            Page::Mountains => self.mountains.begin_add(),
            Page::Groups => self.groups.begin_add(),
            _ => return,
        };
        self.apply(effects);
    }

    pub fn edit(&mut self) {
        if self.page == Page::Mountains {
            let effects = self.mountains.begin_edit();
            self.apply(effects);
        }
    }

    pub fn filter(&mut self) {
        let effects = match self.page {
            Page::Climbers => self.climbers.begin_filter(Self::today()),
            Page::Ascents => self.ascents.begin_filter(Self::today()),
            _ => return,
        };
        self.apply(effects);
    }

    pub fn upcoming(&mut self) {
        if self.page == Page::Ascents {
            let effects = self.ascents.upcoming();
            self.apply(effects);
        }
    }

    // ===== Overlays =====

    pub fn close_overlay(&mut self) {
        self.overlays.pop();
    }

    /// Submit the form on top of the overlay stack. The form closes whether
    /// or not its values pass validation.
    pub fn submit_form(&mut self) {
        let Some(Overlay::Form(form)) = self.overlays.last() else {
            return;
        };
        let effects = match form.kind {
            FormKind::AddMountain | FormKind::EditMountain(_) => MountainsPage::submit(form),
            FormKind::AddGroup => GroupsPage::submit(form),
            FormKind::ClimberRange => ClimbersPage::submit(form),
            FormKind::AscentRange => AscentsPage::submit(form),
        };
        self.overlays.pop();
        self.apply(effects);
    }

    /// "View members" on the group dialog on top of the stack.
    pub fn view_group_members(&mut self) {
        let Some(Overlay::GroupDetail(group)) = self.overlays.last() else {
            return;
        };
        let effects = view_members(group);
        self.apply(effects);
    }

    fn today() -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}
