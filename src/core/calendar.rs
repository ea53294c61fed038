//! Completion calendar: the sparse log seen as a total `date -> bool`.

use crate::models::log_entry::LogEntry;
use chrono::{Days, NaiveDate};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct CompletionCalendar {
    days: BTreeMap<NaiveDate, bool>,
}

impl CompletionCalendar {
    pub fn from_entries(entries: &[LogEntry]) -> Self {
        Self {
            days: entries.iter().map(|e| (e.date, e.status)).collect(),
        }
    }

    /// A day without an entry is not completed.
    pub fn is_completed(&self, date: NaiveDate) -> bool {
        self.days.get(&date).copied().unwrap_or(false)
    }

    /// Every day of `[start, end]` in ascending order, gaps filled with `false`.
    pub fn days(&self, start: NaiveDate, end: NaiveDate) -> Vec<(NaiveDate, bool)> {
        start
            .iter_days()
            .take_while(|d| *d <= end)
            .map(|d| (d, self.is_completed(d)))
            .collect()
    }

    /// Completed days within `[start, end]`.
    pub fn count_completed(&self, start: NaiveDate, end: NaiveDate) -> usize {
        if start > end {
            return 0;
        }
        self.days
            .range(start..=end)
            .filter(|(_, done)| **done)
            .count()
    }

    /// Inclusive range of `len` days ending at `end`, or `None` when it
    /// would start before the first representable date.
    pub fn window(end: NaiveDate, len: u32) -> Option<(NaiveDate, NaiveDate)> {
        let start = end.checked_sub_days(Days::new(u64::from(len.saturating_sub(1))))?;
        Some((start, end))
    }
}
