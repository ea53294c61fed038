//! Persistence boundary consumed by the domain logic.
//!
//! A store maps (habit id, date) to a completion flag with at most one
//! entry per key, plus the habit rows that own those entries. Absence of
//! an entry means "not completed"; callers never see an "unknown" state.

use crate::errors::AppResult;
use crate::models::habit::Habit;
use crate::models::log_entry::LogEntry;
use chrono::NaiveDate;

pub trait HabitStore {
    /// Insert a new habit and return it with its assigned id.
    fn insert_habit(&mut self, name: &str, created_at: &str) -> AppResult<Habit>;

    fn get_habit(&self, id: i64) -> AppResult<Option<Habit>>;

    /// All habits, ordered by id.
    fn list_habits(&self) -> AppResult<Vec<Habit>>;

    /// Remove a habit and every entry it owns as one atomic unit.
    /// Returns `false` when the habit did not exist.
    fn delete_habit(&mut self, id: i64) -> AppResult<bool>;

    fn get_entry(&self, habit_id: i64, date: NaiveDate) -> AppResult<Option<bool>>;

    /// Insert or overwrite the entry for (habit_id, date).
    fn upsert_entry(&mut self, habit_id: i64, date: NaiveDate, status: bool) -> AppResult<()>;

    /// Flip the entry for (habit_id, date), creating it as `true` when
    /// absent. The read-modify-write is atomic per key. Returns the new status.
    fn toggle_entry(&mut self, habit_id: i64, date: NaiveDate) -> AppResult<bool>;

    /// Entries with `start <= date <= end`, ascending by date.
    fn get_entries_in_range(
        &self,
        habit_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<LogEntry>>;

    /// Dates with status = true, most recent first.
    fn completed_dates_desc(&self, habit_id: i64) -> AppResult<Vec<NaiveDate>>;

    /// Returns the number of removed entries.
    fn delete_all_entries(&mut self, habit_id: i64) -> AppResult<usize>;
}
