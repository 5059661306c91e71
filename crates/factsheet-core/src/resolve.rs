//! Field resolver — priority-ordered key lookup over a raw fact mapping.
//!
//! Collector schemas drift across versions: the same logical fact may appear
//! under `ansible_hostname` or `hostname`, at the top level or nested under a
//! `facts` sub-mapping. Rather than ad hoc conditional chains, every lookup
//! goes through [`resolve`] with a declarative candidate table: an ordered
//! list of candidates, each candidate an ordered list of alias keys.
//!
//! Presence is tested by key existence, never truthiness — a present empty
//! string or zero is a real value and is returned as-is. Absence is not an
//! error; it is signalled with `None` and the caller supplies the documented
//! per-field default.

use serde_json::{Map, Value};

/// Return the value of the first candidate any of whose aliases is present in
/// `doc`, trying aliases in order within each candidate. `None` when nothing
/// is present.
pub fn resolve<'a>(doc: &'a Map<String, Value>, candidates: &[&[&str]]) -> Option<&'a Value> {
    for aliases in candidates {
        for key in *aliases {
            if let Some(value) = doc.get(*key) {
                return Some(value);
            }
        }
    }
    None
}

/// Resolve a string-valued field, applying `default` on absence or type
/// mismatch. Numbers are rendered with their JSON representation so that
/// collectors reporting e.g. a numeric distribution version still resolve.
pub fn resolve_str(doc: &Map<String, Value>, candidates: &[&[&str]], default: &str) -> String {
    match resolve(doc, candidates) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_string(),
    }
}

/// Resolve an unsigned integer field, applying `default` on absence or
/// mismatch. Accepts numbers and numeric strings (some collectors quote
/// their counts).
pub fn resolve_u64(doc: &Map<String, Value>, candidates: &[&[&str]], default: u64) -> u64 {
    resolve(doc, candidates).and_then(value_as_u64).unwrap_or(default)
}

/// Best-effort conversion of a JSON value to `u64`.
pub fn value_as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().map(|f| f.max(0.0) as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Best-effort conversion of a JSON value to `f64`.
pub fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
