use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Habit {
    pub id: i64,            // ⇔ habits.id (INTEGER PRIMARY KEY)
    pub name: String,       // ⇔ habits.name (TEXT, trimmed, non-empty)
    pub created_at: String, // ⇔ habits.created_at (TEXT, ISO8601)
}

impl Habit {
    pub fn new(id: i64, name: &str, created_at: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            created_at: created_at.to_string(),
        }
    }

    /// Creation timestamp parsed back from RFC 3339. `None` for rows written
    /// by hand with a different format.
    pub fn created(&self) -> Option<DateTime<Local>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Local))
    }

    /// Creation day, falling back to the raw column text.
    pub fn created_day(&self) -> String {
        self.created()
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| self.created_at.clone())
    }
}
