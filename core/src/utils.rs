//! utils.rs
//! Diagnostics helpers for error contexts.

use serde_json::Value;

/// Name of the JSON kind held by `v`, for diagnostics.
pub fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

/// Key path used in diagnostics, e.g. `Entry.name`.
pub fn field_path(owner: &str, field: &str) -> String {
    format!("{}.{}", owner, field)
}

/// Index path used in diagnostics, e.g. `Point[1]`.
pub fn index_path(owner: &str, index: usize) -> String {
    format!("{}[{}]", owner, index)
}
