use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::habits::HabitLogic;
use crate::core::streak::current_streak;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::{date, plural_days};

/// Flip today's completion of a habit.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Toggle { id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let today = date::today();

        let habit = HabitLogic::get(&pool, *id)?;
        let status = HabitLogic::toggle_today(&mut pool, *id, today)?;
        let streak = current_streak(&pool, *id, today)?;

        if status {
            success(format!("\"{}\" done for {}.", habit.name, today));
        } else {
            success(format!("\"{}\" unchecked for {}.", habit.name, today));
        }
        println!("🔥 Current streak: {}", plural_days(streak));

        if let Err(e) = log::record(
            &pool.conn,
            "toggle_habit",
            &habit.id.to_string(),
            &format!("Toggled {} for {}. Status: {}", habit.name, today, status),
        ) {
            warning(format!("Failed to write activity log: {}", e));
        }
    }

    Ok(())
}
