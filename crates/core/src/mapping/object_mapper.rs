//! Field-by-name copying through `serde_json::Value`.
//!
//! Fields are matched by their serialized names. Source fields the target
//! does not declare are ignored; target fields missing from the source need
//! `#[serde(default)]` (or an `Option` type) on the target.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::errors::{Error, Result};

/// Field names and values of a struct or map, in declaration order.
pub fn property_dictionary<T: Serialize + ?Sized>(value: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::InvalidInput(format!(
            "Expected a struct or map with named fields, got {}",
            value_kind(&other)
        ))),
    }
}

/// Builds a `T` from the same-named fields of `source`.
pub fn map_to<S, T>(source: &S) -> Result<T>
where
    S: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let value = serde_json::to_value(source)?;
    Ok(serde_json::from_value(value)?)
}

/// [`map_to`] over a slice, failing on the first item that does not map.
pub fn map_all<S, T>(sources: &[S]) -> Result<Vec<T>>
where
    S: Serialize,
    T: DeserializeOwned,
{
    sources.iter().map(|source| map_to(source)).collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
