//! Mountain picker in the header bar.

use tracing::{debug, warn};

use alpinedesk_core::models::Mountain;
use alpinedesk_core::utils::title_from_label;
use alpinedesk_core::{ApiError, Payload};

use super::mountains::load_mountain;
use super::{step_selection, Effects, MountainListUse, Notice, Request};

/// Id carried by the leading "Select…" entry of every mountain picker.
pub const NONE_SELECTED: i64 = -1;

const PROMPT: &str = "Select mountain";

#[derive(Debug, Clone, PartialEq)]
pub struct SelectorEntry {
    pub label: String,
    pub id: i64,
}

#[derive(Debug, Clone)]
pub struct MountainSelector {
    pub entries: Vec<SelectorEntry>,
    pub index: usize,
    /// Header title; the name of the selected mountain.
    pub title: String,
}

impl Default for MountainSelector {
    fn default() -> Self {
        Self {
            entries: vec![SelectorEntry { label: PROMPT.to_string(), id: NONE_SELECTED }],
            index: 0,
            title: String::new(),
        }
    }
}

impl MountainSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reload(&self) -> Effects {
        Effects::request(Request::Mountains(MountainListUse::Selector))
    }

    /// Rebuild the entries. The selected mountain stays selected while it is
    /// still listed; otherwise the first mountain is selected.
    pub fn on_loaded(&mut self, result: Result<Payload, ApiError>) -> Effects {
        let payload = match result {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "Failed to load mountain picker");
                return Effects::notice(Notice::warning(format!("Failed to load mountains: {}", e)));
            }
        };

        let mountains: Vec<Mountain> = payload.list().unwrap_or_default();
        debug!(count = mountains.len(), "Mountain picker loaded");

        let previous = self.selected_id();
        self.entries = std::iter::once(SelectorEntry { label: PROMPT.to_string(), id: NONE_SELECTED })
            .chain(mountains.iter().map(|m| SelectorEntry {
                label: m.picker_label(),
                id: m.id.unwrap_or(0),
            }))
            .collect();
        self.index = 0;

        let kept = previous.and_then(|id| self.entries.iter().position(|e| e.id == id));
        if let Some(index) = kept {
            debug!(index, "Keeping selected mountain");
            return self.select(index);
        }

        match mountains.first() {
            Some(first) => {
                self.index = 1;
                self.title = first.name_display().to_string();
                load_mountain(first.id.unwrap_or(0))
            }
            None => Effects::none(),
        }
    }

    /// Id of the selected mountain; `None` for the prompt or an id-less entry.
    pub fn selected_id(&self) -> Option<i64> {
        self.entries
            .get(self.index)
            .map(|e| e.id)
            .filter(|id| *id > 0)
    }

    /// Pick an entry. The prompt entry and entries without an id change
    /// nothing else.
    pub fn select(&mut self, index: usize) -> Effects {
        let Some(entry) = self.entries.get(index) else {
            return Effects::none();
        };
        self.index = index;
        if entry.id <= 0 {
            return Effects::none();
        }
        self.title = title_from_label(&entry.label).to_string();
        load_mountain(entry.id)
    }

    pub fn select_next(&mut self) -> Effects {
        let index = step_selection(self.index, self.entries.len(), true);
        if index == self.index {
            return Effects::none();
        }
        self.select(index)
    }

    pub fn select_prev(&mut self) -> Effects {
        let index = step_selection(self.index, self.entries.len(), false);
        if index == self.index {
            return Effects::none();
        }
        self.select(index)
    }

    pub fn selected_label(&self) -> &str {
        self.entries
            .get(self.index)
            .map(|e| e.label.as_str())
            .unwrap_or(PROMPT)
    }
}
