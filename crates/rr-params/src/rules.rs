//! Bound-rule evaluation.
//!
//! Rules are checked against the raw supplied-or-default value, before any
//! cast is applied. Numeric strings compare by value, so `"501"` violates
//! `max:500`.

use crate::error::ValidationError;
use rr_core::BoundRule;
use serde_json::Value;

/// Read a raw value as a number, if it is one.
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Check `value` against `rule` on behalf of `attribute`.
pub fn check_rule(attribute: &str, value: &Value, rule: &BoundRule) -> Result<(), ValidationError> {
    let Some(number) = numeric_value(value) else {
        return Err(ValidationError::not_numeric(attribute, value, rule));
    };

    if !rule.admits(number) {
        return Err(ValidationError::bound_violated(attribute, value, rule));
    }

    Ok(())
}
