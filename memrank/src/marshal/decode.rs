//! Coercion of dynamically-typed host values into records and queries

use crate::models::{Query, Record};
use crate::{MemrankError, Result};
use serde_json::{Map, Value};

/// Why a single record entry could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct MalformedRecord {
    /// Field at fault, if the entry itself was an object
    pub field: Option<&'static str>,

    /// Human-readable description
    pub reason: String,
}

impl MalformedRecord {
    fn not_an_object(value: &Value) -> Self {
        Self {
            field: None,
            reason: format!("expected an object, got {}", type_name(value)),
        }
    }

    fn missing(field: &'static str) -> Self {
        Self {
            field: Some(field),
            reason: format!("missing field `{}`", field),
        }
    }

    fn wrong_shape(field: &'static str, expected: &str, value: &Value) -> Self {
        Self {
            field: Some(field),
            reason: format!("field `{}` must be {}, got {}", field, expected, type_name(value)),
        }
    }
}

/// Decode one record entry.
///
/// All five fields are required. `id`, `ts` and `importance` accept JSON
/// integers or integral floats; `importance` must also fit in `i32`.
pub fn record_from_value(value: &Value) -> std::result::Result<Record, MalformedRecord> {
    let object = value
        .as_object()
        .ok_or_else(|| MalformedRecord::not_an_object(value))?;

    let id = integer_field(object, "id")?;
    let timestamp = integer_field(object, "ts")?;
    let importance = integer_field(object, "importance")?;
    let importance = i32::try_from(importance).map_err(|_| MalformedRecord {
        field: Some("importance"),
        reason: format!("field `importance` out of 32-bit range: {}", importance),
    })?;
    let topic = string_field(object, "topic")?;
    let content = string_field(object, "content")?;

    Ok(Record {
        id,
        timestamp,
        importance,
        topic,
        content,
    })
}

/// Decode the query object.
///
/// Every field is optional; absent or `null` fields take their defaults. A
/// field that is present with the wrong type rejects the whole query.
pub fn query_from_value(value: &Value) -> Result<Query> {
    let object = value.as_object().ok_or_else(|| {
        MemrankError::InvalidArgument(format!(
            "query must be an object, got {}",
            type_name(value)
        ))
    })?;

    let mut query = Query::default();

    match optional(object, "topic").or_else(|| optional(object, "topic_filter")) {
        None => {}
        Some(Value::String(topic)) => {
            if !topic.is_empty() {
                query.topic_filter = Some(topic.clone());
            }
        }
        Some(other) => {
            return Err(MemrankError::InvalidArgument(format!(
                "query `topic` must be a string, got {}",
                type_name(other)
            )));
        }
    }

    if let Some(value) = optional(object, "importance_min") {
        let importance_min = as_integer(value)
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| {
                MemrankError::InvalidArgument(format!(
                    "query `importance_min` must be a 32-bit integer, got {}",
                    value
                ))
            })?;
        query.importance_min = importance_min;
    }

    if let Some(value) = optional(object, "limit") {
        query.limit = as_integer(value).ok_or_else(|| {
            MemrankError::InvalidArgument(format!(
                "query `limit` must be an integer, got {}",
                value
            ))
        })?;
    }

    Ok(query)
}

fn optional<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|v| !v.is_null())
}

fn integer_field(
    object: &Map<String, Value>,
    field: &'static str,
) -> std::result::Result<i64, MalformedRecord> {
    let value = object.get(field).ok_or_else(|| MalformedRecord::missing(field))?;
    as_integer(value).ok_or_else(|| MalformedRecord::wrong_shape(field, "an integer", value))
}

fn string_field(
    object: &Map<String, Value>,
    field: &'static str,
) -> std::result::Result<String, MalformedRecord> {
    match object.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(MalformedRecord::wrong_shape(field, "a string", other)),
        None => Err(MalformedRecord::missing(field)),
    }
}

/// Read a JSON number as `i64`, accepting floats only when they are integral
/// and inside the `i64` range.
pub(crate) fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
