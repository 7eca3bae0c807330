//! Defensive reads over untyped JSON
//!
//! The agent memory file is produced externally and any branch of it may be
//! missing, null, or the wrong shape. Every accessor here takes a dotted path
//! and a fallback; absence is the normal case, never an error.

use serde_json::Value;

/// Walk a dotted key path through nested objects.
///
/// Returns `None` if any segment is absent or an intermediate value is not an
/// object. An empty path returns the root.
pub fn pluck<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.').filter(|s| !s.is_empty()) {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Numeric value at `path`, or `default` when absent or non-numeric.
pub fn num_at(root: &Value, path: &str, default: f64) -> f64 {
    pluck(root, path).and_then(Value::as_f64).unwrap_or(default)
}

/// Optional numeric value at `path`. `None` when absent or non-numeric.
pub fn opt_num_at(root: &Value, path: &str) -> Option<f64> {
    pluck(root, path).and_then(Value::as_f64)
}

/// Integer value at `path`, or `default`.
pub fn int_at(root: &Value, path: &str, default: i64) -> i64 {
    pluck(root, path).and_then(Value::as_i64).unwrap_or(default)
}

/// String value at `path`, or `default` when absent or not a string.
pub fn str_at(root: &Value, path: &str, default: &str) -> String {
    pluck(root, path)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

/// Boolean value at `path`, or `default`.
pub fn bool_at(root: &Value, path: &str, default: bool) -> bool {
    pluck(root, path).and_then(Value::as_bool).unwrap_or(default)
}

/// Array at `path`, or the empty slice.
pub fn seq_at<'a>(root: &'a Value, path: &str) -> &'a [Value] {
    pluck(root, path).and_then(Value::as_array).map(Vec::as_slice).unwrap_or(&[])
}

/// Object entries at `path`, or an empty iterator.
pub fn map_at<'a>(
    root: &'a Value,
    path: &str,
) -> impl Iterator<Item = (&'a String, &'a Value)> {
    pluck(root, path)
        .and_then(Value::as_object)
        .into_iter()
        .flat_map(|m| m.iter())
}
