use crate::db::{Database, QueryParams, Row};
use crate::errors::AppResult;
use rusqlite::Params;
use rusqlite::params_from_iter;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// The data-access verbs exposed on the command line and in batch files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verb {
    Select,
    SelectOne,
    Insert,
    Update,
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Select => "select",
            Verb::SelectOne => "select-one",
            Verb::Insert => "insert",
            Verb::Update => "update",
            Verb::Delete => "delete",
        }
    }
}

/// Result of one verb, in the shape that verb returns.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Rows(Vec<Row>),
    Row(Option<Row>),
    Id(i64),
    Affected(usize),
}

impl Outcome {
    /// Payload fields without the `success` flag:
    /// `data` for selects, `id` for inserts, `affected` for updates/deletes.
    pub fn payload(self) -> Map<String, Value> {
        let mut body = Map::new();
        match self {
            Outcome::Rows(rows) => {
                body.insert(
                    "data".into(),
                    Value::Array(rows.into_iter().map(Value::Object).collect()),
                );
            }
            Outcome::Row(row) => {
                body.insert("data".into(), row.map(Value::Object).unwrap_or(Value::Null));
            }
            Outcome::Id(id) => {
                body.insert("id".into(), json!(id));
            }
            Outcome::Affected(n) => {
                body.insert("affected".into(), json!(n));
            }
        }
        body
    }

    /// `{"success": true, ...payload}`
    pub fn envelope(self) -> Value {
        let mut body = Map::new();
        body.insert("success".into(), Value::Bool(true));
        body.extend(self.payload());
        Value::Object(body)
    }
}

pub struct QueryLogic;

impl QueryLogic {
    pub fn run(db: &Database, verb: Verb, sql: &str, params: &QueryParams) -> AppResult<Outcome> {
        match params {
            QueryParams::Positional(values) => {
                Self::run_with(db, verb, sql, params_from_iter(values.iter()))
            }
            QueryParams::Named(pairs) => {
                let named = QueryParams::named_refs(pairs);
                Self::run_with(db, verb, sql, named.as_slice())
            }
        }
    }

    fn run_with<P: Params>(db: &Database, verb: Verb, sql: &str, params: P) -> AppResult<Outcome> {
        Ok(match verb {
            Verb::Select => Outcome::Rows(db.select(sql, params)?),
            Verb::SelectOne => Outcome::Row(db.select_one(sql, params)?),
            Verb::Insert => Outcome::Id(db.insert(sql, params)?),
            Verb::Update => Outcome::Affected(db.update(sql, params)?),
            Verb::Delete => Outcome::Affected(db.delete(sql, params)?),
        })
    }
}
