use tracing::warn;

use alpinedesk_core::models::MountainStat;
use alpinedesk_core::{ApiError, Payload};

use super::{Effects, Notice, Refresh, Request};

const NO_STATS: &str = "No stats";

#[derive(Debug, Clone, Default)]
pub struct StatsPage {
    /// `None` until a list arrives; rendered as "No stats".
    pub stats: Option<Vec<MountainStat>>,
}

impl StatsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_fetched(&mut self, result: Result<Payload, ApiError>) -> Effects {
        match result {
            Ok(payload) => {
                self.stats = payload.list();
                Effects::none()
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch stats");
                Effects::notice(Notice::warning(e.to_string()))
            }
        }
    }

    pub fn text(&self) -> String {
        match self.stats {
            Some(ref stats) => stats
                .iter()
                .map(MountainStat::line)
                .collect::<Vec<_>>()
                .join("\n"),
            None => NO_STATS.to_string(),
        }
    }
}

impl Refresh for StatsPage {
    fn refresh(&mut self) -> Effects {
        Effects::request(Request::MountainStats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text() {
        let mut page = StatsPage::new();
        assert_eq!(page.text(), "No stats");

        page.on_fetched(Ok(Payload::from_bytes(
            br#"[{"name": "Everest", "height": 8849, "ascents_count": 3, "unique_groups_count": 2},
                 {"name": "K2"}]"#,
        )));
        assert_eq!(
            page.text(),
            "Everest (8849) — ascents: 3 — unique groups/visitors: 2\nK2 (—) — ascents: — — unique groups/visitors: —"
        );

        page.on_fetched(Ok(Payload::from_bytes(br#"{"detail": "x"}"#)));
        assert_eq!(page.text(), "No stats");
    }

    #[test]
    fn test_refresh_and_error() {
        let mut page = StatsPage::new();
        assert_eq!(page.refresh().requests, vec![Request::MountainStats]);

        page.on_fetched(Ok(Payload::from_bytes(b"[]")));
        let effects = page.on_fetched(Err(ApiError::NotFound(String::new())));
        assert!(effects.notice.is_some());
        assert_eq!(page.stats, Some(vec![]));
    }
}
