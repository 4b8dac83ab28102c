use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::QueryLogic;
use crate::db::{Database, QueryParams};
use crate::errors::AppResult;
use crate::ui::output::print_json;

/// Handle `select`, `select-one`, `insert`, `update` and `delete`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Some((verb, sql, raw_params)) = cmd.query() {
        let params = QueryParams::parse(raw_params)?;
        let db = Database::connect(cfg)?;

        let outcome = QueryLogic::run(&db, verb, sql, &params)?;
        print_json(&outcome.envelope(), cfg.pretty_json)?;
    }

    Ok(())
}
