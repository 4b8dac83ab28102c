use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::Database;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database file
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    // Open before printing anything: on failure stdout carries only the
    // error envelope.
    Database::connect(&cfg)?;

    info("Initializing rDbAccess…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {}", cfg.database));

    success(format!("Database ready at {}", cfg.database));
    Ok(())
}
