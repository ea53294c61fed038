use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print, clear, days } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        if *clear {
            let days = days.unwrap_or(cfg.log_retention_days);
            let removed = LogLogic::clear(&mut pool, days)?;
            success(format!(
                "Removed {} activity entries older than {} days.",
                removed, days
            ));
        }

        if *print {
            LogLogic::print_log(&mut pool)?;
        }
    }

    Ok(())
}
