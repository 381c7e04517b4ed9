//! Type casts.
//!
//! One coercion function per [`CastKind`]. The boolean cast is deliberately
//! literal: only the string `"true"` becomes `true`.

use crate::error::ValidationError;
use rr_core::CastKind;
use serde_json::{Number, Value};

/// Apply `cast` to `value` on behalf of `attribute`.
pub fn apply_cast(attribute: &str, value: Value, cast: CastKind) -> Result<Value, ValidationError> {
    match cast {
        CastKind::Bool => Ok(Value::Bool(to_bool(&value))),
        CastKind::Int => to_int(&value)
            .map(Value::from)
            .ok_or_else(|| ValidationError::cast_failed(attribute, &value, cast)),
        CastKind::Float => to_float(&value)
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| ValidationError::cast_failed(attribute, &value, cast)),
        CastKind::String => to_string(&value)
            .map(Value::String)
            .ok_or_else(|| ValidationError::cast_failed(attribute, &value, cast)),
    }
}

/// Only the string `"true"` is true; everything else, including `"TRUE"`,
/// `"1"` and a JSON `true`, is false.
fn to_bool(value: &Value) -> bool {
    matches!(value, Value::String(s) if s == "true")
}

/// Integers pass through, decimals truncate toward zero.
fn to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate))
        }
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

fn truncate(n: f64) -> Option<i64> {
    let t = n.trunc();
    (t.is_finite() && t >= i64::MIN as f64 && t < i64::MAX as f64).then_some(t as i64)
}

fn to_float(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
