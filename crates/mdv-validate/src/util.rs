//! Shared value-inspection helpers for the validators.

use std::collections::BTreeMap;

use serde_json::Value;

/// Label used when a record carries no usable `name`.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Record label for issue messages: the `name` field when present,
/// otherwise the positional index.
pub fn record_label(record: &Value, index: usize) -> String {
    match record.get("name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("index-{index}"),
    }
}

/// The record's `name` field, or `Unknown` for records without one.
pub fn name_or_unknown(record: &Value) -> &str {
    record
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_LABEL)
}

/// String field accessor; non-string values read as absent.
pub fn field_str<'a>(record: &'a Value, key: &str) -> Option<&'a str> {
    record.get(key).and_then(Value::as_str)
}

/// A value rendered for an issue message: bare string contents for JSON
/// strings, compact JSON for everything else.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Integer check used for fees and costs: JSON integers only, strictly
/// positive. Floats and numeric strings do not qualify.
pub fn as_positive_int(value: &Value) -> Option<i64> {
    value.as_i64().filter(|amount| *amount > 0)
}

/// Required fields absent from the record, in catalog order.
pub fn missing_fields<'a>(record: &Value, required: &[&'a str]) -> Vec<&'a str> {
    required
        .iter()
        .filter(|field| record.get(**field).is_none())
        .copied()
        .collect()
}

/// Values of `id` occurring more than once across the batch, sorted.
/// Each duplicate id appears once regardless of occurrence count.
pub fn duplicate_ids(batch: &[Value]) -> Vec<String> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in batch {
        if let Some(id) = record.get("id") {
            *counts.entry(display_value(id)).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, _)| id)
        .collect()
}

/// Render an amount with thousands separators, e.g. `1500000` → `1,500,000`.
pub fn group_digits(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    let leading = digits.len() % 3;
    if leading > 0 {
        grouped.push_str(&digits[..leading]);
    }
    for (i, chunk) in digits[leading..].as_bytes().chunks(3).enumerate() {
        if leading > 0 || i > 0 {
            grouped.push(',');
        }
        grouped.push_str(std::str::from_utf8(chunk).unwrap_or_default());
    }
    grouped
}
