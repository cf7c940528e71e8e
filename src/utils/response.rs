//! Response tuple normalization
//!
//! Handlers may return a bare value, `(data, code)` or
//! `(data, code, headers)`. [`unpack`] turns any of these into a full
//! `(data, code, headers)` triple.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Status code used when a handler does not provide one
pub const DEFAULT_STATUS_CODE: u16 = 200;

/// Response headers (name -> value)
pub type Headers = BTreeMap<String, String>;

/// A normalized `(data, code, headers)` triple
pub type Unpacked = (Value, u16, Headers);

/// Errors from [`unpack`]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnpackError {
    /// Tuple length outside {2, 3}
    #[error("too many values to unpack: expected (data, code) or (data, code, headers), got {len} values")]
    InvalidArity { len: usize },

    #[error("invalid status code: {0}")]
    InvalidStatusCode(String),

    #[error("invalid headers: {0}")]
    InvalidHeaders(String),
}

/// What a handler returned.
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnValue {
    /// A value with no code or headers attached
    Bare(Value),
    /// An ordered `(data, code?, headers?)` sequence; `null` entries take defaults
    Tuple(Vec<Value>),
}

impl ReturnValue {
    /// Interpret a JSON document: arrays are tuples, everything else is bare.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Array(items) => ReturnValue::Tuple(items),
            other => ReturnValue::Bare(other),
        }
    }
}

impl From<Value> for ReturnValue {
    fn from(value: Value) -> Self {
        ReturnValue::Bare(value)
    }
}

impl From<&str> for ReturnValue {
    fn from(value: &str) -> Self {
        ReturnValue::Bare(Value::from(value))
    }
}

impl From<String> for ReturnValue {
    fn from(value: String) -> Self {
        ReturnValue::Bare(Value::String(value))
    }
}

impl<T: Into<Value>> From<(T, Option<u16>)> for ReturnValue {
    fn from((data, code): (T, Option<u16>)) -> Self {
        ReturnValue::Tuple(vec![data.into(), code.map_or(Value::Null, Value::from)])
    }
}

impl<T: Into<Value>> From<(T, Option<u16>, Option<Headers>)> for ReturnValue {
    fn from((data, code, headers): (T, Option<u16>, Option<Headers>)) -> Self {
        let headers = headers.map_or(Value::Null, |h| {
            Value::Object(h.into_iter().map(|(k, v)| (k, Value::String(v))).collect())
        });
        ReturnValue::Tuple(vec![data.into(), code.map_or(Value::Null, Value::from), headers])
    }
}

/// Normalize a handler return with the default status code (200).
pub fn unpack(value: impl Into<ReturnValue>) -> Result<Unpacked, UnpackError> {
    unpack_with_code(value, DEFAULT_STATUS_CODE)
}

/// Normalize a handler return, filling a missing or null code with `default_code`.
pub fn unpack_with_code(
    value: impl Into<ReturnValue>,
    default_code: u16,
) -> Result<Unpacked, UnpackError> {
    let items = match value.into() {
        ReturnValue::Bare(data) => return Ok((data, default_code, Headers::new())),
        ReturnValue::Tuple(items) => items,
    };

    let len = items.len();
    if !(2..=3).contains(&len) {
        tracing::debug!(len, "rejecting response tuple");
        return Err(UnpackError::InvalidArity { len });
    }

    let mut items = items.into_iter();
    let data = items.next().unwrap_or(Value::Null);
    let code = status_code(items.next().unwrap_or(Value::Null), default_code)?;
    let headers = headers(items.next().unwrap_or(Value::Null))?;

    Ok((data, code, headers))
}

// Any integer that fits a u16 is taken as-is, as is a string holding one.
fn status_code(value: Value, default_code: u16) -> Result<u16, UnpackError> {
    let code = match &value {
        Value::Null => return Ok(default_code),
        Value::Number(n) => n.as_u64().and_then(|c| u16::try_from(c).ok()),
        Value::String(s) => s.trim().parse::<u16>().ok(),
        _ => None,
    };
    code.ok_or_else(|| UnpackError::InvalidStatusCode(value.to_string()))
}

fn headers(value: Value) -> Result<Headers, UnpackError> {
    match value {
        Value::Null => Ok(Headers::new()),
        Value::Object(map) => Ok(headers_from_map(map)),
        other => Err(UnpackError::InvalidHeaders(format!(
            "expected an object, got {}",
            other
        ))),
    }
}

/// Non-string header values are rendered as their JSON text.
fn headers_from_map(map: Map<String, Value>) -> Headers {
    map.into_iter()
        .map(|(name, value)| match value {
            Value::String(v) => (name, v),
            other => (name, other.to_string()),
        })
        .collect()
}
