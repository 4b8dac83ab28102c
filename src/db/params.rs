//! Query parameters supplied as JSON.
//!
//! A JSON array binds positionally (`?`, `?1`), a JSON object binds by name
//! (`:name`). Scalars map onto SQLite storage classes; nested arrays and
//! objects are bound as their JSON text.

use crate::errors::{AppError, AppResult};
use rusqlite::ToSql;
use rusqlite::types::Value as SqlValue;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum QueryParams {
    Positional(Vec<SqlValue>),
    Named(Vec<(String, SqlValue)>),
}

impl Default for QueryParams {
    fn default() -> Self {
        QueryParams::Positional(Vec::new())
    }
}

impl QueryParams {
    /// Parse the raw `--params` argument. `None` or blank means no parameters.
    pub fn parse(raw: Option<&str>) -> AppResult<Self> {
        match raw.map(str::trim) {
            None | Some("") => Ok(QueryParams::default()),
            Some(text) => {
                let value: Value = serde_json::from_str(text)
                    .map_err(|e| AppError::InvalidParams(e.to_string()))?;
                Self::from_json(value)
            }
        }
    }

    pub fn from_json(value: Value) -> AppResult<Self> {
        match value {
            Value::Null => Ok(QueryParams::default()),
            Value::Array(items) => Ok(QueryParams::Positional(
                items
                    .into_iter()
                    .map(to_sql_value)
                    .collect::<AppResult<_>>()?,
            )),
            Value::Object(map) => Ok(QueryParams::Named(
                map.into_iter()
                    .map(|(k, v)| to_sql_value(v).map(|sv| (named_key(k), sv)))
                    .collect::<AppResult<_>>()?,
            )),
            other => Err(AppError::InvalidParams(format!(
                "expected a JSON array or object, got {}",
                other
            ))),
        }
    }

    /// Borrowed `(name, value)` pairs in the shape rusqlite binds by name.
    pub fn named_refs(pairs: &[(String, SqlValue)]) -> Vec<(&str, &dyn ToSql)> {
        pairs
            .iter()
            .map(|(k, v)| (k.as_str(), v as &dyn ToSql))
            .collect()
    }
}

fn named_key(key: String) -> String {
    if key.starts_with([':', '@', '$']) {
        key
    } else {
        format!(":{}", key)
    }
}

/// Integers outside the i64 range have no exact SQLite representation and
/// are rejected rather than rounded to a REAL.
fn to_sql_value(value: Value) -> AppResult<SqlValue> {
    Ok(match value {
        Value::Null => SqlValue::Null,
        Value::Bool(b) => SqlValue::Integer(i64::from(b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                SqlValue::Integer(i)
            } else if n.is_f64() {
                SqlValue::Real(n.as_f64().unwrap_or(f64::NAN))
            } else {
                return Err(AppError::InvalidParams(format!(
                    "integer {} does not fit in 64 bits",
                    n
                )));
            }
        }
        Value::String(s) => SqlValue::Text(s),
        nested @ (Value::Array(_) | Value::Object(_)) => SqlValue::Text(nested.to_string()),
    })
}
