//! SQLite-backed habit store (lightweight connection wrapper for CLI usage).

use crate::db::migrate::run_pending_migrations;
use crate::db::queries;
use crate::db::store::HabitStore;
use crate::errors::AppResult;
use crate::models::habit::Habit;
use crate::models::log_entry::LogEntry;
use chrono::NaiveDate;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file and bring its schema up to date.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        Self::from_connection(conn)
    }

    /// Private in-memory database, gone when the pool is dropped.
    pub fn in_memory() -> AppResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> AppResult<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> AppResult<T>,
    {
        func(&mut self.conn)
    }
}

impl HabitStore for DbPool {
    fn insert_habit(&mut self, name: &str, created_at: &str) -> AppResult<Habit> {
        Ok(queries::insert_habit(&self.conn, name, created_at)?)
    }

    fn get_habit(&self, id: i64) -> AppResult<Option<Habit>> {
        Ok(queries::load_habit(&self.conn, id)?)
    }

    fn list_habits(&self) -> AppResult<Vec<Habit>> {
        Ok(queries::load_habits(&self.conn)?)
    }

    fn delete_habit(&mut self, id: i64) -> AppResult<bool> {
        self.with_conn(|conn| {
            let tx = conn.transaction()?;
            queries::delete_entries(&tx, id)?;
            let removed = queries::delete_habit_row(&tx, id)?;
            tx.commit()?;
            Ok(removed > 0)
        })
    }

    fn get_entry(&self, habit_id: i64, date: NaiveDate) -> AppResult<Option<bool>> {
        Ok(queries::load_entry(&self.conn, habit_id, date)?)
    }

    fn upsert_entry(&mut self, habit_id: i64, date: NaiveDate, status: bool) -> AppResult<()> {
        Ok(queries::upsert_entry(&self.conn, habit_id, date, status)?)
    }

    fn toggle_entry(&mut self, habit_id: i64, date: NaiveDate) -> AppResult<bool> {
        self.with_conn(|conn| {
            // IMMEDIATE takes the write lock before the read
            let tx = conn.transaction_with_behavior(rusqlite::TransactionBehavior::Immediate)?;
            let next = match queries::load_entry(&tx, habit_id, date)? {
                Some(current) => !current,
                None => true,
            };
            queries::upsert_entry(&tx, habit_id, date, next)?;
            tx.commit()?;
            Ok(next)
        })
    }

    fn get_entries_in_range(
        &self,
        habit_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<LogEntry>> {
        Ok(queries::load_entries_in_range(&self.conn, habit_id, start, end)?)
    }

    fn completed_dates_desc(&self, habit_id: i64) -> AppResult<Vec<NaiveDate>> {
        Ok(queries::load_completed_dates_desc(&self.conn, habit_id)?)
    }

    fn delete_all_entries(&mut self, habit_id: i64) -> AppResult<usize> {
        Ok(queries::delete_entries(&self.conn, habit_id)?)
    }
}
