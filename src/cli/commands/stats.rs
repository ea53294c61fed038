use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::habits::HabitLogic;
use crate::core::streak::current_streak;
use crate::core::weekly::weekly_stats;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_streak};
use crate::utils::date;
use crate::utils::formatting::{plural_days, week_bar};
use serde_json::json;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { id, weeks, json } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let today = date::today();
        let weeks = weeks.unwrap_or(cfg.default_weeks);

        let habit = HabitLogic::get(&pool, *id)?;
        let streak = current_streak(&pool, *id, today)?;
        let buckets = weekly_stats(&pool, *id, weeks, today, &cfg.label_format)?;

        if *json {
            let out = json!({
                "habit_id": habit.id,
                "name": habit.name,
                "reference_date": today.format("%Y-%m-%d").to_string(),
                "streak": streak,
                "weeks": buckets,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
            return Ok(());
        }

        println!("📊 Stats for #{} \"{}\"\n", habit.id, habit.name);
        println!(
            "🔥 Current streak: {}{}{}\n",
            color_for_streak(streak),
            plural_days(streak),
            RESET
        );

        for b in &buckets {
            println!(
                "  {:<8} {}  {}/7   ({} → {})",
                b.label,
                week_bar(b.completed),
                b.completed,
                b.start.format("%Y-%m-%d"),
                b.end.format("%Y-%m-%d")
            );
        }
    }

    Ok(())
}
