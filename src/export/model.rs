// src/export/model.rs

use crate::models::log_entry::LogEntry;
use serde::Serialize;

/// Flat row for exported log entries.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EntryExport {
    pub habit_id: i64,
    pub habit: String,
    pub date: String,
    pub completed: bool,
}

impl EntryExport {
    pub fn from_entry(habit: &str, entry: &LogEntry) -> Self {
        Self {
            habit_id: entry.habit_id,
            habit: habit.to_string(),
            date: entry.date_str(),
            completed: entry.status,
        }
    }
}
