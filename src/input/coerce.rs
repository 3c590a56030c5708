//! Permissive conversion of loosely typed values
//!
//! Form fields and command line flags arrive as strings, booleans or
//! nothing at all. Anything that cannot be read as a number becomes 0.

use serde_json::Value;

/// Read `value` as an integer, defaulting to 0
pub fn coerce_int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(float_to_int))
            .unwrap_or(0),
        Value::Bool(b) => i64::from(*b),
        Value::String(s) => parse_int(s),
        _ => 0,
    }
}

/// Read `value` as a flag
///
/// Accepts booleans, non-zero numbers and `true`/`yes`/`on` in any case.
pub fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(_) => coerce_int(value) != 0,
        Value::String(s) => {
            let s = s.trim();
            matches!(s.to_ascii_lowercase().as_str(), "true" | "yes" | "on") || parse_int(s) != 0
        }
        _ => false,
    }
}

fn parse_int(s: &str) -> i64 {
    let s = s.trim();
    s.parse::<i64>()
        .ok()
        .or_else(|| s.parse::<f64>().ok().map(float_to_int))
        .unwrap_or(0)
}

// Truncates toward zero; `as` saturates at the i64 bounds.
fn float_to_int(f: f64) -> i64 {
    if f.is_finite() {
        f as i64
    } else {
        0
    }
}
