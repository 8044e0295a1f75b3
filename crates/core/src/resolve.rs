//! Dotted-path resolution over a raw record value.
//!
//! The upstream ERP returns records of no guaranteed shape, so resolution is
//! deliberately forgiving: any segment that cannot be followed — missing key,
//! out-of-bounds index, scalar where a container was expected — is a miss,
//! never a panic or an error.

use serde_json::Value;

/// Resolve a dot-separated `path` (e.g. `"currency_id.1"`) against `root`.
///
/// An empty or whitespace-only path addresses the root itself. A stored JSON
/// null is a valid hit (`Some(&Value::Null)`), distinct from a miss (`None`).
pub fn resolve<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.trim().is_empty() {
        return Some(root);
    }

    let mut cursor = root;
    for segment in path.split('.') {
        cursor = step(cursor, segment)?;
    }
    Some(cursor)
}

/// Descend one segment. Single dispatch point: a mapping is addressed by key,
/// a sequence by index, anything else is a miss.
fn step<'a>(cursor: &'a Value, segment: &str) -> Option<&'a Value> {
    match cursor {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => parse_index(segment).and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Strict sequence index: ASCII digits, no sign, no leading zeros (except
/// `"0"` itself).
fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return None;
    }
    segment.parse().ok()
}
