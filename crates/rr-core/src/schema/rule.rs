//! Numeric bound rules (`max:<N>` / `min:<N>`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::SchemaError;

/// A numeric bound checked against the raw attribute value before casting.
///
/// Serialized in its textual form, e.g. `max:500`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BoundRule {
    /// Value must not exceed the bound.
    Max(f64),
    /// Value must not be below the bound.
    Min(f64),
}

impl BoundRule {
    /// The numeric bound.
    pub fn bound(&self) -> f64 {
        match self {
            BoundRule::Max(n) | BoundRule::Min(n) => *n,
        }
    }

    /// Whether `value` satisfies this bound. Both bounds are inclusive.
    pub fn admits(&self, value: f64) -> bool {
        match self {
            BoundRule::Max(max) => value <= *max,
            BoundRule::Min(min) => value >= *min,
        }
    }
}

impl fmt::Display for BoundRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundRule::Max(n) => write!(f, "max:{}", n),
            BoundRule::Min(n) => write!(f, "min:{}", n),
        }
    }
}

impl FromStr for BoundRule {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| SchemaError::InvalidRule {
            rule: s.to_string(),
            reason: reason.to_string(),
        };

        let (kind, bound) = s
            .split_once(':')
            .ok_or_else(|| invalid("expected 'max:<N>' or 'min:<N>'"))?;

        let bound: f64 = bound
            .trim()
            .parse()
            .map_err(|_| invalid("bound is not a number"))?;
        if !bound.is_finite() {
            return Err(invalid("bound must be finite"));
        }

        match kind.trim() {
            "max" => Ok(BoundRule::Max(bound)),
            "min" => Ok(BoundRule::Min(bound)),
            _ => Err(invalid("unknown rule kind")),
        }
    }
}

impl TryFrom<String> for BoundRule {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BoundRule> for String {
    fn from(rule: BoundRule) -> Self {
        rule.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_max_rule() {
        let rule: BoundRule = "max:500".parse().unwrap();
        assert_eq!(rule, BoundRule::Max(500.0));
        assert_eq!(rule.to_string(), "max:500");
    }

    #[test]
    fn test_parse_min_rule_with_fraction() {
        let rule: BoundRule = "min:0.5".parse().unwrap();
        assert_eq!(rule, BoundRule::Min(0.5));
        assert_eq!(rule.bound(), 0.5);
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        let err = "between:1".parse::<BoundRule>().unwrap_err();
        assert!(matches!(err, SchemaError::InvalidRule { .. }));
    }

    #[test]
    fn test_parse_rejects_missing_bound() {
        assert!("max".parse::<BoundRule>().is_err());
        assert!("max:".parse::<BoundRule>().is_err());
        assert!("max:lots".parse::<BoundRule>().is_err());
        assert!("max:inf".parse::<BoundRule>().is_err());
    }

    #[test]
    fn test_admits_is_inclusive() {
        let max = BoundRule::Max(500.0);
        assert!(max.admits(500.0));
        assert!(!max.admits(501.0));

        let min = BoundRule::Min(10.0);
        assert!(min.admits(10.0));
        assert!(!min.admits(9.0));
    }
}
