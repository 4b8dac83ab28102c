use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::batch::BatchLogic;
use crate::db::Database;
use crate::errors::AppResult;
use crate::ui::output::print_json;
use serde_json::json;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Batch { file } = cmd {
        let steps = BatchLogic::load(Path::new(file))?;
        let mut db = Database::connect(cfg)?;

        let results = BatchLogic::apply(&mut db, &steps)?;
        print_json(&json!({ "success": true, "data": results }), cfg.pretty_json)?;
    }

    Ok(())
}
