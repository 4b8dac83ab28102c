//! Associative row mapping: every fetched row becomes a JSON object keyed by
//! column name, in column order.

use rusqlite::Statement;
use rusqlite::types::ValueRef;
use serde_json::{Map, Number, Value};

/// One fetched row, column name → value.
pub type Row = Map<String, Value>;

pub fn column_names(stmt: &Statement) -> Vec<String> {
    stmt.column_names()
        .into_iter()
        .map(|c| c.to_string())
        .collect()
}

pub fn map_row(row: &rusqlite::Row, columns: &[String]) -> rusqlite::Result<Row> {
    let mut out = Map::with_capacity(columns.len());
    for (idx, name) in columns.iter().enumerate() {
        out.insert(name.clone(), to_json(row.get_ref(idx)?));
    }
    Ok(out)
}

/// BLOBs come back as (lossy) strings, like TEXT. Non-finite REALs have no
/// JSON representation and map to null.
pub fn to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Value::String(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}
