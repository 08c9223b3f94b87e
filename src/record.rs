//! Field mappings
//!
//! A record is one unit of tabular data returned by a driver: column name to
//! value, in source column order.

use serde_json::Value;

/// Ordered column name to value mapping
pub type FieldMap = serde_json::Map<String, Value>;

/// Build a record from `(column, value)` pairs, keeping their order
pub fn record<K: Into<String>>(fields: impl IntoIterator<Item = (K, Value)>) -> FieldMap {
    fields
        .into_iter()
        .map(|(column, value)| (column.into(), value))
        .collect()
}

/// Text identity of a value, used to deduplicate keys
///
/// Two values get the same text exactly when they compare equal: object
/// keys are sorted, everything else keeps its JSON form.
pub(crate) fn canonical_key(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_canonical(item, out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        other => out.push_str(&other.to_string()),
    }
}
