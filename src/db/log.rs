use crate::errors::AppResult;
use crate::models::activity::ActivityEntry;
use chrono::{Local, TimeDelta};
use rusqlite::Connection;
use rusqlite::params;

/// Write an activity line into the `log` table.
pub fn record(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Activity rows, newest first.
pub fn load(conn: &Connection) -> AppResult<Vec<ActivityEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, target, message FROM log ORDER BY id DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(ActivityEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Remove activity rows older than `days` days. Migration markers are kept,
/// the schema depends on them. Returns the number of removed rows.
///
/// A window reaching past the representable range removes nothing.
pub fn purge_older_than(conn: &Connection, days: u32) -> AppResult<usize> {
    let Some(cutoff) = TimeDelta::try_days(i64::from(days))
        .and_then(|delta| Local::now().checked_sub_signed(delta))
    else {
        return Ok(0);
    };

    // rows carry mixed formats (RFC 3339 and sqlite datetime), compare parsed
    let mut stmt = conn.prepare_cached(
        "SELECT id, date FROM log WHERE operation <> 'migration_applied'",
    )?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))?;

    let mut stale = Vec::new();
    for r in rows {
        let (id, raw) = r?;
        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&raw)
            && dt < cutoff
        {
            stale.push(id);
        }
    }

    let tx = conn.unchecked_transaction()?;
    {
        let mut del = tx.prepare_cached("DELETE FROM log WHERE id = ?1")?;
        for id in &stale {
            del.execute([id])?;
        }
    }
    tx.commit()?;

    Ok(stale.len())
}
