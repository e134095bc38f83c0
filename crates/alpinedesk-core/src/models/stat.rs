use serde::Deserialize;

use super::lenient;
use crate::utils::format::or_placeholder;

/// Aggregate row from `GET /mountains/stats`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MountainStat {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub height: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub ascents_count: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub unique_groups_count: Option<String>,
}

impl MountainStat {
    pub fn line(&self) -> String {
        format!(
            "{} ({}) — ascents: {} — unique groups/visitors: {}",
            or_placeholder(&self.name),
            or_placeholder(&self.height),
            or_placeholder(&self.ascents_count),
            or_placeholder(&self.unique_groups_count)
        )
    }
}
