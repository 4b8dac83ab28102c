use crate::core::query::{QueryLogic, Verb};
use crate::db::{Database, QueryParams};
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

/// One statement of a batch file.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchStep {
    pub op: Verb,
    pub sql: String,
    #[serde(default)]
    pub params: Value,
}

pub struct BatchLogic;

impl BatchLogic {
    /// Read a JSON array of steps from `path`.
    pub fn load(path: &Path) -> AppResult<Vec<BatchStep>> {
        let content = fs::read_to_string(path)?;
        let steps: Vec<BatchStep> = serde_json::from_str(&content)?;
        if steps.is_empty() {
            return Err(AppError::InvalidParams(format!(
                "batch file {} contains no steps",
                path.display()
            )));
        }
        Ok(steps)
    }

    /// Run every step inside one transaction. All steps commit together;
    /// the first failure rolls the whole batch back and is returned.
    pub fn apply(db: &mut Database, steps: &[BatchStep]) -> AppResult<Vec<Value>> {
        // Parse everything up front so bad params never open a transaction.
        let prepared = steps
            .iter()
            .map(|s| QueryParams::from_json(s.params.clone()).map(|p| (s, p)))
            .collect::<AppResult<Vec<_>>>()?;

        let results = db.transaction(|db| {
            let mut out = Vec::with_capacity(prepared.len());
            for (step, params) in &prepared {
                let outcome = QueryLogic::run(db, step.op, &step.sql, params)?;
                let mut body = outcome.payload();
                body.insert("op".into(), Value::String(step.op.as_str().to_string()));
                out.push(Value::Object(body));
            }
            Ok(out)
        })?;

        info!(steps = results.len(), "batch committed");
        Ok(results)
    }
}
