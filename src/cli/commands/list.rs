use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::HabitSummary;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_streak};
use crate::utils::date;
use crate::utils::formatting::{plural_days, status_mark};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let today = date::today();

        let summaries = HabitSummary::build_all(&pool, today)?;

        if summaries.is_empty() {
            info("No habits yet. Create one with `rhabit add <NAME>`.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID", 4),
            Column::new("Habit", 20),
            Column::new("Today", 5),
            Column::new("Streak", 8),
            Column::new("Last 7", 6),
            Column::new("Since", 10),
        ]);

        for s in &summaries {
            table.add_row(vec![
                s.habit.id.to_string(),
                s.habit.name.clone(),
                status_mark(s.done_today).to_string(),
                plural_days(s.streak),
                format!("{}/7", s.last_7_days),
                s.habit.created_day(),
            ]);
        }

        println!("📋 Habits on {}:\n", today);
        print!("{}", table.render());

        let best = summaries.iter().max_by_key(|s| s.streak);
        if let Some(b) = best
            && b.streak > 0
        {
            println!(
                "\n🔥 Best running streak: {}{}{} ({})",
                color_for_streak(b.streak),
                plural_days(b.streak),
                RESET,
                b.habit.name
            );
        }
    }

    Ok(())
}
