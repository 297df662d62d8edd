//! Field-level primitive validators.
//!
//! Each checker inspects one `serde_json::Value` against one rule, pushing
//! a [`Violation`] on failure and returning the narrowed value on success
//! so callers can compose further checks. Checkers never short-circuit
//! their siblings — the caller decides how much of the candidate to walk.

use serde_json::{Map, Value};
use url::Url;

use chainmeta_core::name::is_valid_slug;

use crate::validate::Violation;

/// Human-readable JSON type name for violation messages.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Join a parent path and a key into a dotted path.
pub(crate) fn child(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Join a parent path and an array index into an indexed path.
pub(crate) fn index(parent: &str, i: usize) -> String {
    format!("{parent}[{i}]")
}

/// Fetch a required key from an object, recording a violation if absent.
pub(crate) fn require<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    parent: &str,
    out: &mut Vec<Violation>,
) -> Option<&'a Value> {
    match obj.get(key) {
        Some(value) => Some(value),
        None => {
            out.push(Violation::new(child(parent, key), "missing required field"));
            None
        }
    }
}

pub(crate) fn check_object<'a>(
    value: &'a Value,
    path: &str,
    out: &mut Vec<Violation>,
) -> Option<&'a Map<String, Value>> {
    match value.as_object() {
        Some(obj) => Some(obj),
        None => {
            out.push(Violation::new(
                path,
                format!("expected an object, got {}", json_type(value)),
            ));
            None
        }
    }
}

pub(crate) fn check_array<'a>(
    value: &'a Value,
    path: &str,
    out: &mut Vec<Violation>,
) -> Option<&'a Vec<Value>> {
    match value.as_array() {
        Some(items) => Some(items),
        None => {
            out.push(Violation::new(
                path,
                format!("expected an array, got {}", json_type(value)),
            ));
            None
        }
    }
}

pub(crate) fn check_string<'a>(
    value: &'a Value,
    path: &str,
    out: &mut Vec<Violation>,
) -> Option<&'a str> {
    match value.as_str() {
        Some(s) => Some(s),
        None => {
            out.push(Violation::new(
                path,
                format!("expected a string, got {}", json_type(value)),
            ));
            None
        }
    }
}

pub(crate) fn check_bool(value: &Value, path: &str, out: &mut Vec<Violation>) -> Option<bool> {
    match value.as_bool() {
        Some(b) => Some(b),
        None => {
            out.push(Violation::new(
                path,
                format!("expected a boolean, got {}", json_type(value)),
            ));
            None
        }
    }
}

/// Non-negative integer. Rejects floats with fractional parts, negative
/// numbers, and numeric strings.
pub(crate) fn check_uint(value: &Value, path: &str, out: &mut Vec<Violation>) -> Option<u64> {
    match value.as_u64() {
        Some(n) => Some(n),
        None => {
            out.push(Violation::new(
                path,
                format!("expected a non-negative integer, got {}", json_type(value)),
            ));
            None
        }
    }
}

/// Strictly positive finite number (integer or float).
pub(crate) fn check_positive_number(
    value: &Value,
    path: &str,
    out: &mut Vec<Violation>,
) -> Option<f64> {
    match value.as_f64() {
        Some(n) if n > 0.0 && n.is_finite() => Some(n),
        Some(_) => {
            out.push(Violation::new(path, "expected a positive number"));
            None
        }
        None => {
            out.push(Violation::new(
                path,
                format!("expected a positive number, got {}", json_type(value)),
            ));
            None
        }
    }
}

/// Syntactically valid absolute URL, per `url::Url::parse`.
pub(crate) fn check_url(value: &Value, path: &str, out: &mut Vec<Violation>) -> Option<Url> {
    let s = check_string(value, path, out)?;
    match Url::parse(s) {
        Ok(url) => Some(url),
        Err(_) => {
            out.push(Violation::new(path, "not a valid absolute URL"));
            None
        }
    }
}

/// Lowercase alphanumeric slug starting with a letter.
pub(crate) fn check_slug<'a>(
    value: &'a Value,
    path: &str,
    out: &mut Vec<Violation>,
) -> Option<&'a str> {
    let s = check_string(value, path, out)?;
    if is_valid_slug(s) {
        Some(s)
    } else {
        out.push(Violation::new(
            path,
            "must be a lowercase alphanumeric slug starting with a letter",
        ));
        None
    }
}
