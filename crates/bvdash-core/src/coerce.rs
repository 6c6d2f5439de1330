//! Lenient numeric coercion for API payloads.
//!
//! The dashboard API feeds come from CSV imports and ad-hoc enrichment jobs,
//! so numeric fields arrive as JSON numbers, numeric strings with thousands
//! separators or unit suffixes, `null`, or are missing entirely. This module
//! is the single place that turns all of those into a finite `f64`, defaulting
//! to `0.0`; record-level anomalies never abort a load.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Serde field deserializer: accepts a JSON number, numeric string, `null`,
/// or any other shape, and coerces to a finite `f64` (default `0.0`).
///
/// Use together with `#[serde(default)]` so that an absent field also
/// coerces to `0.0`.
///
/// # Errors
///
/// Only fails if the surrounding document is not valid JSON at all; a
/// value of the wrong shape coerces instead of erroring.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_value(&value))
}

/// Coerces an already-parsed JSON value to a finite `f64`, defaulting to `0.0`.
#[must_use]
pub fn coerce_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => finite_or_zero(n.as_f64().unwrap_or(0.0)),
        Value::String(s) => parse_loose_number(s),
        _ => 0.0,
    }
}

/// Parses a number out of a string that may carry thousands separators,
/// whitespace, or unit suffixes (`"1,500"`, `"12.3만"`, `"1 500 subscribers"`).
///
/// Strips every character that is not an ASCII digit, `.`, or `-` and parses
/// the remainder. Anything that still fails to parse (e.g. `"12-3"`, `"1.2.3"`)
/// yields `0.0` rather than an error.
#[must_use]
pub fn parse_loose_number(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    finite_or_zero(cleaned.parse::<f64>().unwrap_or(0.0))
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
