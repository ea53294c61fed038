use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{pending_migrations, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        // DbPool::new already applies pending migrations
        let mut pool = DbPool::new(&cfg.database)?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            run_pending_migrations(&pool.conn)?;
            let left = pending_migrations(&pool.conn)?;
            if left.is_empty() {
                println!("{}✔ Schema is up to date.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Pending migrations: {}{}\n", RED, left.join(", "), RESET);
            }
        }

        //
        // 2) INFO
        //
        if *info {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            let orphans: i64 = pool.conn.query_row(
                "SELECT COUNT(*) FROM habit_logs l
                 LEFT JOIN habits h ON h.id = l.habit_id
                 WHERE h.id IS NULL",
                [],
                |row| row.get(0),
            )?;

            if integrity == "ok" && orphans == 0 {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!(
                    "{}✘ Integrity check failed:{} {} ({} orphan log entries)\n",
                    RED, RESET, integrity, orphans
                );
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
