//! Decoding of loosely-typed JSON request bodies into request shapes.
//!
//! Each request shape declares a static field table instead of relying on runtime
//! introspection. A field whose key appears in the payload (compared case-insensitively)
//! becomes `Required::Present`; every other field stays `Required::Absent`. Keys that
//! match no declared field are ignored.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::error::{Result, RosterError};
use crate::model::Required;

/// Assigns a coerced JSON value to one field of a request shape.
pub type AssignFn<R> = fn(&mut R, &Value) -> std::result::Result<(), String>;

/// Reports whether one field of a request shape was supplied.
pub type PresenceFn<R> = fn(&R) -> bool;

/// One entry of a request shape's field table.
pub struct FieldSpec<R: 'static> {
    pub name: &'static str,
    pub assign: AssignFn<R>,
    pub present: PresenceFn<R>,
}

/// A request model with a compile-time field table.
pub trait RequestShape: Default + Sized + 'static {
    const FIELDS: &'static [FieldSpec<Self>];

    fn field(name: &str) -> Option<&'static FieldSpec<Self>> {
        Self::FIELDS
            .iter()
            .find(|spec| spec.name.eq_ignore_ascii_case(name))
    }

    /// Whether the named field was supplied. Undeclared names are never present.
    fn is_present(&self, name: &str) -> bool {
        Self::field(name)
            .map(|spec| (spec.present)(self))
            .unwrap_or(false)
    }
}

/// Decode a raw request body into the request shape `R`.
pub fn decode<R: RequestShape>(raw: &[u8]) -> Result<R> {
    let value: Value = serde_json::from_slice(raw).map_err(|e| RosterError::MalformedRequest {
        field: None,
        message: e.to_string(),
    })?;

    let Value::Object(entries) = value else {
        return Err(RosterError::MalformedRequest {
            field: None,
            message: "The request body must be a JSON object.".to_string(),
        });
    };

    let mut request = R::default();
    for (key, value) in &entries {
        let Some(spec) = R::field(key) else {
            log::debug!("Ignoring unknown request field '{}'", key);
            continue;
        };
        (spec.assign)(&mut request, value).map_err(|reason| RosterError::MalformedRequest {
            field: Some(spec.name.to_string()),
            message: format!("Invalid value for field '{}': {}", spec.name, reason),
        })?;
    }

    Ok(request)
}

/// Per-type coercions from JSON values. `null` always coerces to `None`.
pub mod coerce {
    use super::*;

    pub fn string(value: &Value) -> std::result::Result<Option<String>, String> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            other => Err(format!("expected a string, found {}", kind(other))),
        }
    }

    pub fn integer(value: &Value) -> std::result::Result<Option<i32>, String> {
        match value {
            Value::Null => Ok(None),
            Value::Number(number) => {
                let whole = if let Some(i) = number.as_i64() {
                    Some(i)
                } else {
                    number
                        .as_f64()
                        .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
                        .map(|f| f as i64)
                };
                whole
                    .and_then(|i| i32::try_from(i).ok())
                    .map(Some)
                    .ok_or_else(|| format!("{} is not a valid 32-bit integer", number))
            }
            other => Err(format!("expected a number, found {}", kind(other))),
        }
    }

    pub fn instant(value: &Value) -> std::result::Result<Option<DateTime<Utc>>, String> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => parse_instant(s)
                .map(Some)
                .ok_or_else(|| format!("'{}' is not an ISO-8601 date or date-time", s)),
            other => Err(format!("expected a date string, found {}", kind(other))),
        }
    }

    fn kind(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }
}

/// Parse an ISO-8601 instant. Date-times without an offset and bare dates are taken as UTC.
pub fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Unwrap a presence-validated field whose payload value must not be null.
pub fn non_null<T>(name: &'static str, field: Required<Option<T>>) -> Result<T> {
    field.into_value()?.ok_or_else(|| RosterError::MalformedRequest {
        field: Some(name.to_string()),
        message: format!("The value of {} must not be null.", name),
    })
}

/// Like [`non_null`], additionally rejecting strings that are blank after trimming.
pub fn non_blank(name: &'static str, field: Required<Option<String>>) -> Result<String> {
    let value = non_null(name, field)?;
    if value.trim().is_empty() {
        return Err(RosterError::MalformedRequest {
            field: Some(name.to_string()),
            message: format!("The value of {} must not be empty.", name),
        });
    }
    Ok(value)
}
