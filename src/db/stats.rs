use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::NaiveDate;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTALS
    //
    let habits: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM habits", [], |row| row.get(0))?;
    let entries: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM habit_logs", [], |row| row.get(0))?;
    let done: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM habit_logs WHERE status = 1",
        [],
        |row| row.get(0),
    )?;

    println!("{}• Habits:{} {}{}{}", CYAN, RESET, GREEN, habits, RESET);
    println!(
        "{}• Log entries:{} {}{}{} ({} completed)",
        CYAN, RESET, GREEN, entries, RESET, done
    );

    //
    // 3) DATE RANGE
    //
    let bounds: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row("SELECT MIN(date), MAX(date) FROM habit_logs", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?;
    let (first_date, last_date) = bounds.unwrap_or((None, None));

    let fmt_first = first_date
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE COMPLETIONS/DAY
    //
    if let (Some(f), Some(l)) = (first_date, last_date)
        && let (Ok(d1), Ok(d2)) = (
            NaiveDate::parse_from_str(&f, "%Y-%m-%d"),
            NaiveDate::parse_from_str(&l, "%Y-%m-%d"),
        )
    {
        let days = (d2 - d1).num_days() + 1;
        let avg = done as f64 / days as f64;
        println!("{}• Average completions/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
