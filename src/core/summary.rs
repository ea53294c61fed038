use crate::core::calendar::CompletionCalendar;
use crate::core::streak::streak_from_dates;
use crate::db::store::HabitStore;
use crate::errors::{AppError, AppResult};
use crate::models::habit::Habit;
use chrono::NaiveDate;
use serde::Serialize;

/// Display-ready values for one habit on the overview listing.
#[derive(Debug, Clone, Serialize)]
pub struct HabitSummary {
    pub habit: Habit,
    pub done_today: bool,
    pub streak: u32,
    /// Completed days among the last 7, today included.
    pub last_7_days: usize,
}

impl HabitSummary {
    pub fn build<S: HabitStore + ?Sized>(
        store: &S,
        habit: Habit,
        today: NaiveDate,
    ) -> AppResult<Self> {
        let (start, end) = CompletionCalendar::window(today, 7)
            .ok_or_else(|| AppError::InvalidDate(today.to_string()))?;
        let entries = store.get_entries_in_range(habit.id, start, end)?;
        let recent = CompletionCalendar::from_entries(&entries);
        let streak = streak_from_dates(&store.completed_dates_desc(habit.id)?, today);

        Ok(Self {
            done_today: recent.is_completed(today),
            last_7_days: recent.count_completed(start, end),
            streak,
            habit,
        })
    }

    /// Summaries of every habit, ordered by id.
    pub fn build_all<S: HabitStore + ?Sized>(store: &S, today: NaiveDate) -> AppResult<Vec<Self>> {
        store
            .list_habits()?
            .into_iter()
            .map(|h| Self::build(store, h, today))
            .collect()
    }
}
