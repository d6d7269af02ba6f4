use sea_orm::{DbErr, SqlErr};
use serde_json::Value;

/// Converts a truth string into a boolean.
///
/// Accepts `y`, `yes`, `t`, `true`, `on`, `1` as true and `n`, `no`, `f`, `false`,
/// `off`, `0` as false, ignoring case.
///
/// # Returns
/// - `Some(bool)` - The string is a recognised truth value
/// - `None` - Anything else, including the empty string
pub fn str_to_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "y" | "yes" | "t" | "true" | "on" | "1" => Some(true),
        "n" | "no" | "f" | "false" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Coerces a request value into a boolean.
///
/// JSON booleans are taken as-is, the integers `1` and `0` map to true and false,
/// and strings go through [`str_to_bool`].
pub fn parse_truth_value(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        Value::String(s) => str_to_bool(s),
        _ => None,
    }
}

/// Coerces a request value into an integer.
///
/// Accepts JSON integers and strings holding an integer, surrounding whitespace allowed.
/// Floats, booleans and everything else are rejected.
pub fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Returns true when the database rejected a write because of a unique constraint.
pub fn is_unique_constraint_error(error: &DbErr) -> bool {
    matches!(error.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
