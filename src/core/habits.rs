use crate::core::calendar::CompletionCalendar;
use crate::db::store::HabitStore;
use crate::errors::{AppError, AppResult};
use crate::models::habit::Habit;
use chrono::{Local, NaiveDate};

/// Upper bound for a history listing, twenty years of days.
pub const MAX_HISTORY_DAYS: u32 = 7305;

/// Result of a history edit: the status before and after the upsert.
/// `before` is `false` when no entry existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogChange {
    pub date: NaiveDate,
    pub before: bool,
    pub after: bool,
}

pub struct HabitLogic;

impl HabitLogic {
    /// Create a habit with a trimmed, non-empty name.
    pub fn create<S: HabitStore + ?Sized>(store: &mut S, name: &str) -> AppResult<Habit> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("habit name cannot be empty".into()));
        }

        let created_at = Local::now().to_rfc3339();
        store.insert_habit(name, &created_at)
    }

    /// Look up a habit, turning absence into `NotFound`.
    pub fn get<S: HabitStore + ?Sized>(store: &S, habit_id: i64) -> AppResult<Habit> {
        store
            .get_habit(habit_id)?
            .ok_or(AppError::NotFound(habit_id))
    }

    /// Flip today's completion. A missing entry becomes `true`.
    /// Returns the new status.
    pub fn toggle_today<S: HabitStore + ?Sized>(
        store: &mut S,
        habit_id: i64,
        today: NaiveDate,
    ) -> AppResult<bool> {
        Self::get(store, habit_id)?;
        store.toggle_entry(habit_id, today)
    }

    /// Set the completion of a past (or current) day.
    pub fn set_log<S: HabitStore + ?Sized>(
        store: &mut S,
        habit_id: i64,
        date: NaiveDate,
        status: bool,
        today: NaiveDate,
    ) -> AppResult<LogChange> {
        Self::get(store, habit_id)?;

        if date > today {
            return Err(AppError::Validation(format!(
                "cannot record {date}: date is in the future"
            )));
        }

        let before = store.get_entry(habit_id, date)?.unwrap_or(false);
        store.upsert_entry(habit_id, date, status)?;

        Ok(LogChange {
            date,
            before,
            after: status,
        })
    }

    /// Delete a habit together with all its log entries.
    pub fn delete<S: HabitStore + ?Sized>(store: &mut S, habit_id: i64) -> AppResult<Habit> {
        let habit = Self::get(store, habit_id)?;

        if !store.delete_habit(habit_id)? {
            return Err(AppError::NotFound(habit_id));
        }
        Ok(habit)
    }

    /// The last `days` days ending at `today`, oldest first, with absent
    /// entries reported as not completed.
    pub fn history<S: HabitStore + ?Sized>(
        store: &S,
        habit_id: i64,
        days: u32,
        today: NaiveDate,
    ) -> AppResult<Vec<(NaiveDate, bool)>> {
        Self::get(store, habit_id)?;

        if days == 0 {
            return Err(AppError::Validation("days must be at least 1".into()));
        }
        if days > MAX_HISTORY_DAYS {
            return Err(AppError::Validation(format!(
                "days must be at most {MAX_HISTORY_DAYS} (got {days})"
            )));
        }

        let (start, end) = CompletionCalendar::window(today, days)
            .ok_or_else(|| AppError::Validation(format!("{days} days reach before the first supported date")))?;
        let entries = store.get_entries_in_range(habit_id, start, end)?;
        Ok(CompletionCalendar::from_entries(&entries).days(start, end))
    }
}
