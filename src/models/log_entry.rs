use chrono::NaiveDate;
use serde::Serialize;

/// One completion record. At most one exists per (habit_id, date).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub habit_id: i64,   // ⇔ habit_logs.habit_id
    pub date: NaiveDate, // ⇔ habit_logs.date (TEXT "YYYY-MM-DD")
    pub status: bool,    // ⇔ habit_logs.status (INTEGER 0/1)
}

impl LogEntry {
    pub fn new(habit_id: i64, date: NaiveDate, status: bool) -> Self {
        Self {
            habit_id,
            date,
            status,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
