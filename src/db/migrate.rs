use crate::errors::{AppError, AppResult};
use crate::ui::messages::{notice, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ordered schema migrations: (version, description, SQL).
/// Applied versions are recorded in the `log` table as `migration_applied`.
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20250903_0001_create_habits",
        "Created habits and habit_logs tables",
        r#"
        CREATE TABLE IF NOT EXISTS habits (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL CHECK(length(trim(name)) > 0),
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS habit_logs (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            habit_id    INTEGER NOT NULL REFERENCES habits(id) ON DELETE CASCADE,
            date        TEXT NOT NULL,
            status      INTEGER NOT NULL DEFAULT 0 CHECK(status IN (0, 1)),
            UNIQUE(habit_id, date)
        );
        "#,
    ),
    (
        "20251011_0002_habit_logs_status_index",
        "Added (habit_id, status, date) index for streak lookups",
        r#"
        CREATE INDEX IF NOT EXISTS idx_habit_logs_habit_status_date
            ON habit_logs(habit_id, status, date);
        "#,
    ),
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check whether the given migration version has already been applied.
fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, version: &str, description: &str, sql: &str) -> AppResult<()> {
    let batch = format!(
        "BEGIN;
         {sql}
         INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', '{version}', '{description}');
         COMMIT;"
    );

    conn.execute_batch(&batch).map_err(|e| {
        // leave the connection usable for the caller
        let _ = conn.execute_batch("ROLLBACK;");
        AppError::Migration(format!("{version}: {e}"))
    })
}

/// Names of the migrations not yet applied to this database.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for (version, _, _) in MIGRATIONS {
        if !is_applied(conn, version)? {
            out.push(*version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for (version, description, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        if let Err(e) = apply(conn, version, description, sql) {
            warning(format!("Migration {} failed, database left unchanged.", version));
            return Err(e);
        }

        notice(format!("Migration applied: {} → {}", version, description));
    }

    Ok(())
}
