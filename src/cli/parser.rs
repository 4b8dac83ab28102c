use crate::core::query::Verb;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rDbAccess
/// Thin SQLite data-access CLI: every command answers with a JSON envelope
#[derive(Parser)]
#[command(
    name = "rdbaccess",
    version = env!("CARGO_PKG_VERSION"),
    about = "Run SELECT/INSERT/UPDATE/DELETE statements against a SQLite database and get JSON back",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(global = true, long = "debug")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the database
    Init,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Run a query and return all rows
    Select {
        /// SQL statement
        sql: String,

        #[arg(long = "params", help = "Parameters as a JSON array or object")]
        params: Option<String>,
    },

    /// Run a query and return the first row (or null)
    SelectOne {
        /// SQL statement
        sql: String,

        #[arg(long = "params", help = "Parameters as a JSON array or object")]
        params: Option<String>,
    },

    /// Execute an INSERT and return the last insert id
    Insert {
        /// SQL statement
        sql: String,

        #[arg(long = "params", help = "Parameters as a JSON array or object")]
        params: Option<String>,
    },

    /// Execute an UPDATE and return the affected row count
    Update {
        /// SQL statement
        sql: String,

        #[arg(long = "params", help = "Parameters as a JSON array or object")]
        params: Option<String>,
    },

    /// Execute a DELETE and return the affected row count
    Delete {
        /// SQL statement
        sql: String,

        #[arg(long = "params", help = "Parameters as a JSON array or object")]
        params: Option<String>,
    },

    /// Run the statements of a JSON batch file inside one transaction
    Batch {
        /// Path of the batch file: [{"op": "insert", "sql": "...", "params": [...]}, ...]
        file: String,
    },
}

impl Commands {
    /// Verb, SQL and raw params for the single-statement commands.
    pub fn query(&self) -> Option<(Verb, &str, Option<&str>)> {
        let (verb, sql, params) = match self {
            Commands::Select { sql, params } => (Verb::Select, sql, params),
            Commands::SelectOne { sql, params } => (Verb::SelectOne, sql, params),
            Commands::Insert { sql, params } => (Verb::Insert, sql, params),
            Commands::Update { sql, params } => (Verb::Update, sql, params),
            Commands::Delete { sql, params } => (Verb::Delete, sql, params),
            _ => return None,
        };
        Some((verb, sql.as_str(), params.as_deref()))
    }
}
