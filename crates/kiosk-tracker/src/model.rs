use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Rendering used for exercise dates, e.g. `Mon Jan 01 1990`.
pub const DATE_FORMAT: &str = "%a %b %d %Y";

pub fn render_date(date: Date) -> String {
    date.strftime(DATE_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}

/// An exercise as submitted, before validation.
#[derive(Debug, Clone, Default)]
pub struct ExerciseInput {
    pub description: String,
    /// Minutes, as a positive integer.
    pub duration: String,
    /// `YYYY-MM-DD`; absent or empty means today.
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub description: String,
    pub duration: u32,
    pub date: Date,
}

/// A newly logged exercise together with its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseEntry {
    #[serde(rename = "_id")]
    pub user_id: String,
    pub username: String,
    pub date: String,
    pub duration: u32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: u32,
    pub date: String,
}

impl From<&Exercise> for LogEntry {
    fn from(exercise: &Exercise) -> Self {
        Self {
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: render_date(exercise.date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseLog {
    #[serde(rename = "_id")]
    pub user_id: String,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

/// Optional filters for an exercise log. Values arrive as raw query strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogQuery {
    /// Inclusive lower bound, `YYYY-MM-DD`.
    pub from: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`.
    pub to: Option<String>,
    /// Maximum number of entries; `0` means no limit.
    pub limit: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_dates_like_date_to_date_string() {
        assert_eq!(render_date(Date::constant(1990, 1, 1)), "Mon Jan 01 1990");
        assert_eq!(render_date(Date::constant(2015, 12, 25)), "Fri Dec 25 2015");
    }

    #[test]
    fn serializes_with_underscore_id() {
        let user = User {
            id: "5f1d7ecb2e5a3c0017f0a9b1".to_string(),
            username: "fcc_test".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            serde_json::json!({"_id": "5f1d7ecb2e5a3c0017f0a9b1", "username": "fcc_test"})
        );
    }
}
