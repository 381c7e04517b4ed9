//! Validation error types for parameter resolution.

use rr_core::{BoundRule, CastKind};
use serde_json::Value;
use std::fmt;

/// Error type for resolution failures.
///
/// Any validation error aborts the whole resolution; no partial parameter set
/// is ever returned alongside one.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// The kind of validation error.
    pub kind: ValidationErrorKind,
    /// Name of the offending attribute.
    pub attribute: String,
    /// The violated bound (`max:500`) or expected type (`int`).
    pub constraint: String,
    /// Human-readable error message.
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(
        kind: ValidationErrorKind,
        attribute: impl Into<String>,
        constraint: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            attribute: attribute.into(),
            constraint: constraint.into(),
            message: message.into(),
        }
    }

    // =========================================================================
    // BOUND RULE ERRORS
    // =========================================================================

    /// Create an error for a value that violates its bound rule.
    pub fn bound_violated(attribute: &str, value: &Value, rule: &BoundRule) -> Self {
        match rule {
            BoundRule::Max(max) => Self::new(
                ValidationErrorKind::BoundExceeded,
                attribute,
                rule.to_string(),
                format!(
                    "{} must be less than or equal to {} (got {})",
                    attribute,
                    max,
                    display_value(value)
                ),
            ),
            BoundRule::Min(min) => Self::new(
                ValidationErrorKind::BelowBound,
                attribute,
                rule.to_string(),
                format!(
                    "{} must be greater than or equal to {} (got {})",
                    attribute,
                    min,
                    display_value(value)
                ),
            ),
        }
    }

    /// Create an error for a non-numeric value under a numeric rule.
    pub fn not_numeric(attribute: &str, value: &Value, rule: &BoundRule) -> Self {
        Self::new(
            ValidationErrorKind::NotNumeric,
            attribute,
            rule.to_string(),
            format!(
                "{} must be numeric to satisfy '{}' (got {})",
                attribute,
                rule,
                display_value(value)
            ),
        )
    }

    // =========================================================================
    // CAST ERRORS
    // =========================================================================

    /// Create an error for a value that cannot be coerced to its cast type.
    pub fn cast_failed(attribute: &str, value: &Value, cast: CastKind) -> Self {
        Self::new(
            ValidationErrorKind::CastFailed,
            attribute,
            cast.to_string(),
            format!(
                "{} cannot be converted to {} (got {})",
                attribute,
                cast,
                display_value(value)
            ),
        )
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{}'", s),
        other => other.to_string(),
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Value is above a `max:` bound.
    BoundExceeded,
    /// Value is below a `min:` bound.
    BelowBound,
    /// Value under a numeric rule is not a number.
    NotNumeric,
    /// Value cannot be coerced to the declared cast.
    CastFailed,
}
