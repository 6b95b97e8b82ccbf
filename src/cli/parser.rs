use clap::{Parser, Subcommand};

/// Command-line interface definition for rHabitLog
/// Private habit tracker with encrypted notes, backed by SQLite
#[derive(Parser)]
#[command(
    name = "rhabitlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A private habit tracker: log records, view statistics, keep notes encrypted, all in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// PIN used to unlock data commands when the lock is enabled
    #[arg(global = true, long = "pin", value_name = "PIN")]
    pub pin: Option<String>,

    /// Run in test mode (no config file update, keys kept next to the DB)
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
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Log a record for right now
    Add {
        #[arg(long = "note", short = 'n', help = "Optional note (stored encrypted)")]
        note: Option<String>,
    },

    /// List records
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range (start:end)")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's records")]
        today: bool,
    },

    /// Weekly, monthly and lifetime statistics
    Stats {
        #[arg(long = "date", value_name = "YYYY-MM-DD", help = "Reference day (default: today)")]
        date: Option<String>,
    },

    /// Today's records, this week's count and a health tip
    Status,

    /// Export all records to a JSON file (notes in plaintext)
    Export {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the file if it exists")]
        force: bool,
    },

    /// Import records from a JSON backup
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Delete every record (settings and PIN are kept)
    Clear {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show or change user settings
    Settings {
        #[arg(long = "print", help = "Print the current settings")]
        print: bool,

        #[arg(long = "age", value_name = "N", help = "Set your age (18-100)")]
        age: Option<u32>,
    },

    /// Manage the PIN lock
    Pin {
        #[command(subcommand)]
        action: PinAction,
    },
}

#[derive(Subcommand)]
pub enum PinAction {
    /// Set or change the PIN (enables the lock)
    Set {
        #[arg(value_name = "NEW_PIN")]
        new_pin: String,
    },

    /// Check a PIN without doing anything else
    Verify {
        #[arg(value_name = "PIN")]
        pin: String,
    },

    /// Turn the lock on (a PIN must already be set)
    Enable,

    /// Turn the lock off (asks for the current PIN)
    Disable,
}
