//! In-memory store with the same semantics as the SQLite one.
//! Handy for tests and for embedding the tracker without a database file.

use crate::db::store::HabitStore;
use crate::errors::{AppError, AppResult};
use crate::models::habit::Habit;
use crate::models::log_entry::LogEntry;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    habits: BTreeMap<i64, Habit>,
    entries: BTreeMap<(i64, NaiveDate), bool>,
    last_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn require_habit(&self, habit_id: i64) -> AppResult<()> {
        if self.habits.contains_key(&habit_id) {
            Ok(())
        } else {
            Err(AppError::NotFound(habit_id))
        }
    }
}

impl HabitStore for MemoryStore {
    fn insert_habit(&mut self, name: &str, created_at: &str) -> AppResult<Habit> {
        self.last_id += 1;
        let habit = Habit::new(self.last_id, name, created_at);
        self.habits.insert(habit.id, habit.clone());
        Ok(habit)
    }

    fn get_habit(&self, id: i64) -> AppResult<Option<Habit>> {
        Ok(self.habits.get(&id).cloned())
    }

    fn list_habits(&self) -> AppResult<Vec<Habit>> {
        Ok(self.habits.values().cloned().collect())
    }

    fn delete_habit(&mut self, id: i64) -> AppResult<bool> {
        if self.habits.remove(&id).is_none() {
            return Ok(false);
        }
        self.entries.retain(|(habit_id, _), _| *habit_id != id);
        Ok(true)
    }

    fn get_entry(&self, habit_id: i64, date: NaiveDate) -> AppResult<Option<bool>> {
        Ok(self.entries.get(&(habit_id, date)).copied())
    }

    fn upsert_entry(&mut self, habit_id: i64, date: NaiveDate, status: bool) -> AppResult<()> {
        self.require_habit(habit_id)?;
        self.entries.insert((habit_id, date), status);
        Ok(())
    }

    fn toggle_entry(&mut self, habit_id: i64, date: NaiveDate) -> AppResult<bool> {
        self.require_habit(habit_id)?;
        let status = self
            .entries
            .entry((habit_id, date))
            .and_modify(|s| *s = !*s)
            .or_insert(true);
        Ok(*status)
    }

    fn get_entries_in_range(
        &self,
        habit_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<LogEntry>> {
        if start > end {
            return Ok(Vec::new());
        }

        Ok(self
            .entries
            .range((habit_id, start)..=(habit_id, end))
            .map(|(&(id, date), &status)| LogEntry::new(id, date, status))
            .collect())
    }

    fn completed_dates_desc(&self, habit_id: i64) -> AppResult<Vec<NaiveDate>> {
        Ok(self
            .entries
            .range((habit_id, NaiveDate::MIN)..=(habit_id, NaiveDate::MAX))
            .rev()
            .filter(|(_, status)| **status)
            .map(|(&(_, date), _)| date)
            .collect())
    }

    fn delete_all_entries(&mut self, habit_id: i64) -> AppResult<usize> {
        let before = self.entries.len();
        self.entries.retain(|(id, _), _| *id != habit_id);
        Ok(before - self.entries.len())
    }
}
