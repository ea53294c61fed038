use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::habits::HabitLogic;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::date;

/// Edit the completion of a single day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set { id, date: raw, off } = cmd {
        let today = date::today();
        let day = date::parse_date(raw, today)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let habit = HabitLogic::get(&pool, *id)?;
        let change = HabitLogic::set_log(&mut pool, *id, day, !*off, today)?;

        let label = if change.after { "done" } else { "not done" };
        success(format!("\"{}\" marked {} on {}.", habit.name, label, day));

        if let Err(e) = log::record(
            &pool.conn,
            "update_history",
            &habit.id.to_string(),
            &format!(
                "Updated {} on {}: {} -> {}",
                habit.name,
                day.format("%Y-%m-%d"),
                change.before,
                change.after
            ),
        ) {
            warning(format!("Failed to write activity log: {}", e));
        }
    }

    Ok(())
}
