use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing rhabit…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &cfg.database);

    // opening the pool creates the file and runs the migrations
    let pool = DbPool::new(&cfg.database)?;

    println!("✅ Database initialized at {}", &cfg.database);

    if let Err(e) = log::record(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        warning(format!("Failed to write activity log: {}", e));
    }

    println!("🎉 rhabit initialization completed!");
    Ok(())
}
