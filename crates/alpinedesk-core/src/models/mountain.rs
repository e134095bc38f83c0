use serde::{Deserialize, Serialize};

use super::lenient;
use crate::utils::format::{or_placeholder, PLACEHOLDER};

/// Highest value the height and leader id inputs accept.
pub const MAX_FORM_NUMBER: i64 = 100_000;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Mountain {
    #[serde(default, deserialize_with = "lenient::integer")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub height: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: Option<String>,
}

impl Mountain {
    pub fn name_display(&self) -> &str {
        or_placeholder(&self.name)
    }

    pub fn height_display(&self) -> String {
        self.height
            .map(|h| h.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    pub fn country_display(&self) -> &str {
        or_placeholder(&self.country)
    }

    pub fn region_display(&self) -> &str {
        or_placeholder(&self.region)
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Label used by every mountain picker, e.g. `Everest (Nepal)`.
    pub fn picker_label(&self) -> String {
        format!("{} ({})", self.name_display(), self.country_display())
    }
}

/// Body of `POST /mountains/` and `PUT /mountains/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MountainForm {
    pub name: String,
    pub height: i64,
    pub country: String,
    pub region: String,
    pub description: String,
}

impl MountainForm {
    /// Prefill from an existing record, the way the edit form opens.
    pub fn from_mountain(mountain: &Mountain) -> Self {
        Self {
            name: mountain.name.clone().unwrap_or_default(),
            height: mountain.height.unwrap_or(0).clamp(0, MAX_FORM_NUMBER),
            country: mountain.country.clone().unwrap_or_default(),
            region: mountain.region.clone().unwrap_or_default(),
            description: mountain.description.clone().unwrap_or_default(),
        }
    }
}
