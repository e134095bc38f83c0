use serde::Deserialize;

use super::lenient;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Climber {
    #[serde(default, deserialize_with = "lenient::integer")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub middle_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: Option<String>,
}

impl Climber {
    /// Space-joined non-empty name parts, else the email, else "Unknown".
    pub fn display_name(&self) -> String {
        let full = [&self.first_name, &self.middle_name, &self.last_name]
            .iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let full = full.trim();
        if !full.is_empty() {
            return full.to_string();
        }
        match self.email.as_deref() {
            Some(email) if !email.is_empty() => email.to_string(),
            _ => "Unknown".to_string(),
        }
    }

    /// Row text on the Climbers page.
    pub fn list_line(&self) -> String {
        format!(
            "{} — {}",
            self.display_name(),
            self.email.as_deref().unwrap_or("")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn climber(first: &str, middle: &str, last: &str, email: &str) -> Climber {
        let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Climber {
            id: None,
            first_name: opt(first),
            middle_name: opt(middle),
            last_name: opt(last),
            email: opt(email),
        }
    }

    #[test]
    fn test_display_name_joins_present_parts() {
        assert_eq!(climber("Reinhold", "Andreas", "Messner", "").display_name(), "Reinhold Andreas Messner");
        assert_eq!(climber("Junko", "", "Tabei", "jt@example.com").display_name(), "Junko Tabei");
        assert_eq!(climber("", "", "Hillary", "").display_name(), "Hillary");
    }

    #[test]
    fn test_display_name_falls_back_to_email_then_unknown() {
        assert_eq!(climber("", "", "", "solo@example.com").display_name(), "solo@example.com");
        assert_eq!(climber("", "", "", "").display_name(), "Unknown");
    }

    #[test]
    fn test_display_name_from_json_with_nulls() {
        let c: Climber = serde_json::from_str(
            r#"{"first_name": null, "middle_name": "", "last_name": "Kukuczka", "email": null}"#,
        )
        .unwrap();
        assert_eq!(c.display_name(), "Kukuczka");
        assert_eq!(c.list_line(), "Kukuczka — ");
    }
}
