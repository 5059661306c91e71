//! Input handling — glob expansion and per-file document loading.

use crate::RunError;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Expand every pattern and collect the matched paths in pattern order.
///
/// Zero matches across all patterns combined is [`RunError::NoMatches`];
/// an individual unreadable match is logged and dropped.
pub fn expand(patterns: &[String]) -> Result<Vec<PathBuf>, RunError> {
    let mut files = Vec::new();
    for pattern in patterns {
        for entry in glob::glob(pattern)? {
            match entry {
                Ok(path) => files.push(path),
                Err(err) => warn!(%err, "skipping unreadable glob match"),
            }
        }
    }
    if files.is_empty() {
        return Err(RunError::NoMatches);
    }
    Ok(files)
}

/// Read and parse one fact document. The top level must be a JSON object
/// (either the flat fact mapping or the wrapper shape); anything else is an
/// error the caller logs and skips.
pub fn load_document(path: &Path) -> anyhow::Result<Map<String, Value>> {
    let raw = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)?;
    match value {
        Value::Object(map) => Ok(map),
        other => anyhow::bail!("expected a JSON object at the top level, got {}", kind(&other)),
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
