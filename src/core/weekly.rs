//! Weekly rollups over rolling 7-day windows.
//!
//! Buckets are anchored on the reference day, not on calendar weeks: with
//! `weeks = n`, bucket `i` (oldest = 0) starts `(n - i) * 7` days before the
//! reference day and spans 7 days.

use crate::core::calendar::CompletionCalendar;
use crate::db::store::HabitStore;
use crate::errors::{AppError, AppResult};
use chrono::{Days, NaiveDate};
use serde::Serialize;

pub const DAYS_PER_BUCKET: u64 = 7;
pub const DEFAULT_LABEL_FORMAT: &str = "%d.%m";
/// Upper bound for `weeks`, twenty years of buckets.
pub const MAX_WEEKS: u32 = 1040;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyBucket {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Completed days in the bucket, 0..=7.
    pub completed: u8,
}

/// Bucket boundaries, oldest first.
pub fn bucket_bounds(weeks: u32, reference: NaiveDate) -> AppResult<Vec<(NaiveDate, NaiveDate)>> {
    if weeks == 0 {
        return Err(AppError::Validation("weeks must be at least 1".into()));
    }

    if weeks > MAX_WEEKS {
        return Err(AppError::Validation(format!(
            "weeks must be at most {MAX_WEEKS} (got {weeks})"
        )));
    }

    // the oldest start bounds every other one
    let oldest = reference
        .checked_sub_days(Days::new(u64::from(weeks) * DAYS_PER_BUCKET))
        .ok_or_else(|| AppError::Validation(format!("{weeks} weeks reach before the first supported date")))?;

    (0..u64::from(weeks))
        .map(|i| -> AppResult<(NaiveDate, NaiveDate)> {
            let start = oldest
                .checked_add_days(Days::new(i * DAYS_PER_BUCKET))
                .ok_or_else(|| AppError::Validation("bucket start out of range".into()))?;
            let end = start
                .checked_add_days(Days::new(DAYS_PER_BUCKET - 1))
                .ok_or_else(|| AppError::Validation("bucket end out of range".into()))?;
            Ok((start, end))
        })
        .collect()
}

/// Count completions per bucket from an already loaded calendar.
pub fn aggregate(
    calendar: &CompletionCalendar,
    bounds: &[(NaiveDate, NaiveDate)],
    label_format: &str,
) -> Vec<WeeklyBucket> {
    bounds
        .iter()
        .map(|&(start, end)| {
            let count = calendar.count_completed(start, end).min(DAYS_PER_BUCKET as usize);
            WeeklyBucket {
                label: start.format(label_format).to_string(),
                start,
                end,
                completed: count as u8,
            }
        })
        .collect()
}

/// Weekly completion counts for a habit, oldest bucket first.
///
/// The whole window is read with a single range query.
pub fn weekly_stats<S: HabitStore + ?Sized>(
    store: &S,
    habit_id: i64,
    weeks: u32,
    reference: NaiveDate,
    label_format: &str,
) -> AppResult<Vec<WeeklyBucket>> {
    let bounds = bucket_bounds(weeks, reference)?;

    let (first, _) = bounds[0];
    let (_, last) = bounds[bounds.len() - 1];

    let entries = store.get_entries_in_range(habit_id, first, last)?;
    let calendar = CompletionCalendar::from_entries(&entries);

    Ok(aggregate(&calendar, &bounds, label_format))
}
