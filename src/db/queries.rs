use crate::errors::AppError;
use crate::models::habit::Habit;
use crate::models::log_entry::LogEntry;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const DATE_FMT: &str = "%Y-%m-%d";

fn date_to_sql(date: NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

fn parse_sql_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, DATE_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.to_string())),
        )
    })
}

pub fn map_habit(row: &Row) -> Result<Habit> {
    Ok(Habit {
        id: row.get("id")?,
        name: row.get("name")?,
        created_at: row.get("created_at")?,
    })
}

pub fn map_entry(row: &Row) -> Result<LogEntry> {
    let date_str: String = row.get("date")?;
    Ok(LogEntry {
        habit_id: row.get("habit_id")?,
        date: parse_sql_date(&date_str)?,
        status: row.get::<_, i64>("status")? != 0,
    })
}

pub fn insert_habit(conn: &Connection, name: &str, created_at: &str) -> Result<Habit> {
    conn.execute(
        "INSERT INTO habits (name, created_at) VALUES (?1, ?2)",
        params![name, created_at],
    )?;
    Ok(Habit::new(conn.last_insert_rowid(), name, created_at))
}

pub fn load_habit(conn: &Connection, id: i64) -> Result<Option<Habit>> {
    let mut stmt = conn.prepare_cached("SELECT id, name, created_at FROM habits WHERE id = ?1")?;
    stmt.query_row([id], map_habit).optional()
}

pub fn load_habits(conn: &Connection) -> Result<Vec<Habit>> {
    let mut stmt = conn.prepare_cached("SELECT id, name, created_at FROM habits ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_habit)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_entry(conn: &Connection, habit_id: i64, date: NaiveDate) -> Result<Option<bool>> {
    let mut stmt =
        conn.prepare_cached("SELECT status FROM habit_logs WHERE habit_id = ?1 AND date = ?2")?;
    let status: Option<i64> = stmt
        .query_row(params![habit_id, date_to_sql(date)], |row| row.get(0))
        .optional()?;
    Ok(status.map(|s| s != 0))
}

/// Insert or overwrite the entry on the unique (habit_id, date) key.
pub fn upsert_entry(conn: &Connection, habit_id: i64, date: NaiveDate, status: bool) -> Result<()> {
    conn.execute(
        "INSERT INTO habit_logs (habit_id, date, status) VALUES (?1, ?2, ?3)
         ON CONFLICT(habit_id, date) DO UPDATE SET status = excluded.status",
        params![habit_id, date_to_sql(date), status as i64],
    )?;
    Ok(())
}

pub fn load_entries_in_range(
    conn: &Connection,
    habit_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<LogEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT habit_id, date, status FROM habit_logs
         WHERE habit_id = ?1 AND date BETWEEN ?2 AND ?3
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map(
        params![habit_id, date_to_sql(start), date_to_sql(end)],
        map_entry,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_completed_dates_desc(conn: &Connection, habit_id: i64) -> Result<Vec<NaiveDate>> {
    let mut stmt = conn.prepare_cached(
        "SELECT date FROM habit_logs
         WHERE habit_id = ?1 AND status = 1
         ORDER BY date DESC",
    )?;

    let rows = stmt.query_map([habit_id], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(parse_sql_date(&r?)?);
    }
    Ok(out)
}

/// All entries of every habit, joined with the habit name, for exports.
pub fn load_all_entries(
    conn: &Connection,
    range: Option<(NaiveDate, NaiveDate)>,
) -> Result<Vec<(String, LogEntry)>> {
    // TEXT dates compare lexicographically, so plain 4-digit bounds cover all rows
    let (start, end) = match range {
        Some((s, e)) => (date_to_sql(s), date_to_sql(e)),
        None => ("0000-01-01".to_string(), "9999-12-31".to_string()),
    };

    let mut stmt = conn.prepare_cached(
        "SELECT h.name AS name, l.habit_id AS habit_id, l.date AS date, l.status AS status
         FROM habit_logs l
         JOIN habits h ON h.id = l.habit_id
         WHERE l.date BETWEEN ?1 AND ?2
         ORDER BY l.habit_id ASC, l.date ASC",
    )?;

    let rows = stmt.query_map(params![start, end], |row| {
        Ok((row.get::<_, String>("name")?, map_entry(row)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_entries(conn: &Connection, habit_id: i64) -> Result<usize> {
    conn.execute("DELETE FROM habit_logs WHERE habit_id = ?1", [habit_id])
}

pub fn delete_habit_row(conn: &Connection, habit_id: i64) -> Result<usize> {
    conn.execute("DELETE FROM habits WHERE id = ?1", [habit_id])
}
