use serde_json::Value;

/// Parse a JSON value that may carry a number either natively or as a
/// decimal string ("12", "12.5000") into an integer, truncating toward zero.
///
/// Returns `None` for null, booleans, objects, arrays, non-finite values and
/// strings that do not parse as a float.
pub fn coerce_int(value: &Value) -> Option<i64> {
    let float = match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            n.as_f64()?
        }
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if float.is_finite() {
        Some(float.trunc() as i64)
    } else {
        None
    }
}

/// [`coerce_int`] with a fallback for missing or malformed values.
pub fn coerce_int_or(value: &Value, default: i64) -> i64 {
    coerce_int(value).unwrap_or(default)
}
