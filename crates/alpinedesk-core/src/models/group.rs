use serde::{Deserialize, Serialize};

use super::lenient;
use crate::utils::format::{or_placeholder, truncate_chars, PLACEHOLDER};

/// Description length shown on a group card.
const CARD_DESCRIPTION_CHARS: usize = 180;

/// An expedition attempt on a mountain.
///
/// The API is inconsistent about naming: listing endpoints use `group_id` and
/// `group_name`, others use `id` and `name`. Both are kept and the accessors
/// prefer the `group_` variants.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Group {
    #[serde(default, deserialize_with = "lenient::integer")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub group_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub group_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub leader_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub leader_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub ascent_start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub ascent_status: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub members_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub total_members_count: Option<i64>,
}

impl Group {
    pub fn key(&self) -> Option<i64> {
        self.group_id.or(self.id).filter(|id| *id != 0)
    }

    pub fn title(&self) -> &str {
        non_empty(&self.group_name)
            .or_else(|| non_empty(&self.name))
            .unwrap_or("Group")
    }

    pub fn leader_display(&self) -> &str {
        or_placeholder(&self.leader_name)
    }

    pub fn start_display(&self) -> &str {
        or_placeholder(&self.ascent_start_date)
    }

    pub fn status_display(&self) -> &str {
        or_placeholder(&self.ascent_status)
    }

    pub fn members_display(&self) -> String {
        self.members_count
            .filter(|n| *n != 0)
            .or(self.total_members_count)
            .filter(|n| *n != 0)
            .map(|n| n.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    /// Sort key for chronological ordering; missing dates sort first.
    pub fn start_key(&self) -> &str {
        self.ascent_start_date.as_deref().unwrap_or("")
    }

    /// `Leader: … • Start: …` line on group cards and the detail dialog.
    pub fn meta_line(&self) -> String {
        format!(
            "Leader: {}  •  Start: {}",
            self.leader_display(),
            self.start_display()
        )
    }

    pub fn card_description(&self) -> String {
        truncate_chars(self.description.as_deref().unwrap_or(""), CARD_DESCRIPTION_CHARS)
    }

    /// Row text on the Groups page.
    pub fn list_line(&self) -> String {
        format!(
            "{} — leader:{}",
            or_placeholder(&self.name),
            or_placeholder(&self.leader_id)
        )
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Sort groups ascending by start date in place (stable).
pub fn sort_chronologically(groups: &mut [Group]) {
    groups.sort_by(|a, b| a.start_key().cmp(b.start_key()));
}

/// Body of `POST /groups/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewGroup {
    pub name: String,
    pub description: String,
    pub leader_id: i64,
    pub mountain_id: i64,
    /// `YYYY-MM-DD`
    pub start_date: String,
}
