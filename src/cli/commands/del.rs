use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::habits::HabitLogic;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        // fail on unknown ids before prompting
        let habit = HabitLogic::get(&pool, *id)?;

        let prompt = format!(
            "Delete habit #{} \"{}\" and its whole history? This action is irreversible.",
            habit.id, habit.name
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let deleted = HabitLogic::delete(&mut pool, *id)?;
        success(format!("Habit #{} \"{}\" has been deleted.", deleted.id, deleted.name));

        if let Err(e) = log::record(
            &pool.conn,
            "delete_habit",
            &deleted.id.to_string(),
            &format!("Deleted habit: {}", deleted.name),
        ) {
            warning(format!("Failed to write activity log: {}", e));
        }
    }

    Ok(())
}
