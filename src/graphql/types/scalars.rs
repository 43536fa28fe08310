//! Output coercion for numbers the directory sends loosely typed.
//!
//! Records keep these values as raw JSON; they are coerced only when the field
//! is serialised. Numbers and numeric strings are accepted, an absent value is
//! null, and anything else is an error on that field.

use async_graphql::{Error, Result};
use serde_json::Value;

/// Coerce a numeric string to a GraphQL `Float`.
pub fn coerce_float_str(raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(non_numeric_float(&format!("\"{}\"", raw))),
    }
}

/// Coerce a raw JSON value to a GraphQL `Float`.
pub fn coerce_float(value: Option<&Value>) -> Result<Option<f64>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => number
            .as_f64()
            .map(Some)
            .ok_or_else(|| non_numeric_float(&number.to_string())),
        Some(Value::String(text)) => coerce_float_str(text).map(Some),
        Some(Value::Bool(flag)) => Ok(Some(if *flag { 1.0 } else { 0.0 })),
        Some(other) => Err(non_numeric_float(&other.to_string())),
    }
}

/// Coerce a raw JSON value to a GraphQL `Int` (32-bit signed).
pub fn coerce_int(value: Option<&Value>) -> Result<Option<i32>> {
    let number = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) if !text.trim().is_empty() => text.trim().parse::<f64>().ok(),
        Some(Value::Bool(flag)) => Some(if *flag { 1.0 } else { 0.0 }),
        Some(_) => None,
    };
    let shown = value.map(Value::to_string).unwrap_or_default();

    match number {
        Some(n) if n.is_finite() && n.fract() == 0.0 => {
            if n >= f64::from(i32::MIN) && n <= f64::from(i32::MAX) {
                Ok(Some(n as i32))
            } else {
                Err(Error::new(format!(
                    "Int cannot represent non 32-bit signed integer value: {}",
                    shown
                )))
            }
        }
        _ => Err(Error::new(format!(
            "Int cannot represent non-integer value: {}",
            shown
        ))),
    }
}

fn non_numeric_float(shown: &str) -> Error {
    Error::new(format!("Float cannot represent non numeric value: {}", shown))
}
