use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rhabit
/// CLI application to track daily habits with SQLite
#[derive(Parser)]
#[command(
    name = "rhabit",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple habit tracker CLI: daily check-ins, streaks and weekly stats using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print or clear the activity log
    Log {
        #[arg(long = "print", help = "Print rows from the activity log")]
        print: bool,

        #[arg(long = "clear", help = "Remove activity rows older than the retention window")]
        clear: bool,

        #[arg(
            long = "days",
            requires = "clear",
            help = "Retention window in days (default: log_retention_days from config)"
        )]
        days: Option<u32>,
    },

    /// Create a new habit
    Add {
        /// Habit name
        name: String,
    },

    /// List habits with today's status and current streak
    List,

    /// Toggle today's completion of a habit
    Toggle {
        /// Habit id
        id: i64,
    },

    /// Set the completion of a habit on a given day
    Set {
        /// Habit id
        id: i64,

        /// Day to edit (YYYY-MM-DD, `today` or `yesterday`)
        date: String,

        #[arg(long = "off", help = "Mark the day as not completed")]
        off: bool,
    },

    /// Show the day-by-day history of a habit
    History {
        /// Habit id
        id: i64,

        #[arg(long = "days", help = "Number of days to show (default from config)")]
        days: Option<u32>,
    },

    /// Show current streak and weekly completion counts
    Stats {
        /// Habit id
        id: i64,

        #[arg(long = "weeks", help = "Number of 7-day buckets (default from config)")]
        weeks: Option<u32>,

        #[arg(long = "json", help = "Print machine-readable JSON")]
        json: bool,
    },

    /// Delete a habit and its whole history
    Del {
        /// Habit id
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export log entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
