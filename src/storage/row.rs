//! Conversion between entities and SQLite rows via `serde_json::Value`

use anyhow::{anyhow, Result};
use rusqlite::types::{Value as SqlValue, ValueRef};
use rusqlite::Row;
use serde_json::{Map, Number, Value};

use super::entity::Entity;

/// Bind values for `E::COLUMNS`, in declaration order. `id` is never bound.
pub fn to_sql_values<E: Entity>(entity: &E) -> Result<Vec<SqlValue>> {
    let json = serde_json::to_value(entity)?;
    let fields = json
        .as_object()
        .ok_or_else(|| anyhow!("{} does not serialize to an object", E::TABLE))?;

    E::COLUMNS
        .iter()
        .map(|col| {
            let value = fields.get(col.name).ok_or_else(|| {
                anyhow!("{} has no field for column `{}`", E::TABLE, col.name)
            })?;
            json_to_sql(value)
                .ok_or_else(|| anyhow!("column `{}` holds a non-scalar value", col.name))
        })
        .collect()
}

fn json_to_sql(value: &Value) -> Option<SqlValue> {
    match value {
        Value::Null => Some(SqlValue::Null),
        Value::Bool(b) => Some(SqlValue::Integer(i64::from(*b))),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(SqlValue::Integer(i)),
            None => n.as_f64().map(SqlValue::Real),
        },
        Value::String(s) => Some(SqlValue::Text(s.clone())),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Every column of `row` keyed by its result-set name.
///
/// Only the columns actually selected appear; callers deserialize into an
/// entity whose `#[serde(default)]` fills the rest.
pub fn row_to_json(row: &Row<'_>) -> rusqlite::Result<Value> {
    let stmt = row.as_ref();
    let mut map = Map::with_capacity(stmt.column_count());
    for (idx, name) in stmt.column_names().into_iter().enumerate() {
        let value = match row.get_ref(idx)? {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::from(i),
            ValueRef::Real(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
            ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
            ValueRef::Blob(_) => Value::Null,
        };
        map.insert(name.to_string(), value);
    }
    Ok(Value::Object(map))
}

/// Deserialize one row into `T`.
pub fn from_row<T: serde::de::DeserializeOwned>(row: &Row<'_>) -> Result<T> {
    let json = row_to_json(row)?;
    Ok(serde_json::from_value(json)?)
}
