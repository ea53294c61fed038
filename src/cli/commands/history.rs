use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::habits::HabitLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date;
use crate::utils::formatting::{colored_mark, percent};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { id, days } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let today = date::today();
        let days = days.unwrap_or(cfg.history_days);

        let habit = HabitLogic::get(&pool, *id)?;
        let history = HabitLogic::history(&pool, *id, days, today)?;

        println!("🗓️  History of #{} \"{}\" (last {} days):\n", habit.id, habit.name, days);

        // newest first, like a journal
        for (day, done) in history.iter().rev() {
            println!("  {}  {}  {}", day.format("%Y-%m-%d"), day.format("%a"), colored_mark(*done));
        }

        let completed = history.iter().filter(|(_, done)| *done).count();
        println!(
            "\nCompleted {} of {} days ({}%).",
            completed,
            history.len(),
            percent(completed, history.len())
        );
    }

    Ok(())
}
