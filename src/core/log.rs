use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;

fn strip_ansi(re: &Regex, s: &str) -> String {
    re.replace_all(s, "").into_owned()
}

/// ANSI colour for an activity operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "create_habit" => Colour::Green,
        "delete_habit" => Colour::Red,
        "toggle_habit" => Colour::Cyan,
        "update_history" => Colour::Yellow,
        "clear_logs" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = log::load(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Activity log is empty.");
            return Ok(());
        }

        let re = Regex::new(r"\x1B\[[0-9;]*[mK]")
            .map_err(|e| crate::errors::AppError::Other(e.to_string()))?;

        let rows: Vec<(i64, String, String, String)> = entries
            .into_iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%F %T").to_string())
                    .unwrap_or(e.date);

                let painted = color_for_operation(&e.operation).paint(e.operation.as_str());
                let op_target = if e.target.is_empty() {
                    painted.to_string()
                } else {
                    format!("{} ({})", painted, e.target)
                };

                (e.id, date, op_target, e.message)
            })
            .collect();

        // widths on visible text, capped at 40 for the operation column
        let id_w = rows
            .iter()
            .map(|(id, _, _, _)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rows.iter().map(|(_, d, _, _)| d.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|(_, _, op, _)| strip_ansi(&re, op).chars().count())
            .max()
            .unwrap_or(10)
            .min(40);

        println!("📜 Activity log (newest first):\n");

        for (id, date, op_target, message) in rows {
            let visible = strip_ansi(&re, &op_target).chars().count();
            let padding = " ".repeat(op_w.saturating_sub(visible));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                op_target,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }

    /// Purge rows older than `days` and record the purge itself.
    pub fn clear(pool: &mut DbPool, days: u32) -> AppResult<usize> {
        let removed = log::purge_older_than(&pool.conn, days)?;

        log::record(
            &pool.conn,
            "clear_logs",
            "",
            &format!("Removed {removed} entries older than {days} days"),
        )?;

        Ok(removed)
    }
}
