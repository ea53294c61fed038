use chrono::{Duration, Local};
use rhabit::core::log::LogLogic;
use rhabit::db::DbPool;
use rhabit::db::log::{load, purge_older_than, record};

#[test]
fn test_record_and_load_newest_first() {
    let pool = DbPool::in_memory().unwrap();

    record(&pool.conn, "create_habit", "1", "Created habit: Run").unwrap();
    record(&pool.conn, "toggle_habit", "1", "Toggled Run. Status: true").unwrap();

    let rows: Vec<_> = load(&pool.conn)
        .unwrap()
        .into_iter()
        .filter(|e| e.operation != "migration_applied")
        .collect();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].operation, "toggle_habit");
    assert_eq!(rows[1].operation, "create_habit");
    assert_eq!(rows[1].target, "1");
}

#[test]
fn test_purge_removes_only_old_rows() {
    let pool = DbPool::in_memory().unwrap();

    let old = (Local::now() - Duration::days(31)).to_rfc3339();
    for i in 0..3 {
        pool.conn
            .execute(
                "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, '', ?3)",
                rusqlite::params![old, format!("old_action_{i}"), format!("Old log {i}")],
            )
            .unwrap();
    }
    record(&pool.conn, "new_action", "", "New log").unwrap();

    assert_eq!(purge_older_than(&pool.conn, 30).unwrap(), 3);

    let ops: Vec<String> = load(&pool.conn).unwrap().into_iter().map(|e| e.operation).collect();
    assert!(ops.contains(&"new_action".to_string()));
    assert!(!ops.iter().any(|o| o.starts_with("old_action")));
    // schema markers are never purged
    assert!(ops.contains(&"migration_applied".to_string()));
}

#[test]
fn test_purge_with_huge_window_removes_nothing() {
    let pool = DbPool::in_memory().unwrap();

    let old = (Local::now() - Duration::days(3650)).to_rfc3339();
    pool.conn
        .execute(
            "INSERT INTO log (date, operation, target, message) VALUES (?1, 'old_action', '', 'Old')",
            [&old],
        )
        .unwrap();

    for days in [200_000_000, u32::MAX] {
        assert_eq!(purge_older_than(&pool.conn, days).unwrap(), 0);
    }

    let mut pool = pool;
    assert_eq!(LogLogic::clear(&mut pool, u32::MAX).unwrap(), 0);

    let ops: Vec<String> = load(&pool.conn).unwrap().into_iter().map(|e| e.operation).collect();
    assert!(ops.contains(&"old_action".to_string()));
}

#[test]
fn test_clear_records_itself() {
    let mut pool = DbPool::in_memory().unwrap();

    let removed = LogLogic::clear(&mut pool, 30).unwrap();
    assert_eq!(removed, 0);

    let clears = load(&pool.conn)
        .unwrap()
        .into_iter()
        .filter(|e| e.operation == "clear_logs")
        .count();
    assert_eq!(clears, 1);
}
