use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::habits::HabitLogic;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Create a new habit.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let habit = HabitLogic::create(&mut pool, name)?;

        success(format!("Habit #{} \"{}\" created.", habit.id, habit.name));

        if let Err(e) = log::record(
            &pool.conn,
            "create_habit",
            &habit.id.to_string(),
            &format!("Created habit: {}", habit.name),
        ) {
            warning(format!("Failed to write activity log: {}", e));
        }
    }

    Ok(())
}
