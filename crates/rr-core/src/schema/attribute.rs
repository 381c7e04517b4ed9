//! Attribute definitions.
//!
//! One [`AttributeDefinition`] describes a single template attribute: where
//! its value comes from (`name`), what to use when the caller is silent
//! (`default`), what it is called on the wire (`wire_name`), and how it is
//! checked (`rules`) and coerced (`cast`).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use super::BoundRule;

/// Type coercion applied to a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastKind {
    /// Boolean. Only the literal string `"true"` is truthy.
    #[serde(alias = "boolean")]
    Bool,
    /// Signed integer.
    #[serde(alias = "integer")]
    Int,
    /// Floating point number.
    #[serde(alias = "double")]
    Float,
    /// String.
    String,
}

impl fmt::Display for CastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastKind::Bool => write!(f, "bool"),
            CastKind::Int => write!(f, "int"),
            CastKind::Float => write!(f, "float"),
            CastKind::String => write!(f, "string"),
        }
    }
}

/// Declaration of a single attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    /// Name used to look up the caller-supplied value.
    pub name: String,

    /// Value used when the caller supplies none.
    ///
    /// When absent, an unset attribute is omitted entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Name used in the wire map. Defaults to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wire_name: Option<String>,

    /// Coercion applied after rule evaluation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast: Option<CastKind>,

    /// Numeric bounds checked before casting, in order.
    ///
    /// YAML accepts a single `rule: "max:500"` or a `rules:` list.
    #[serde(
        default,
        alias = "rule",
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub rules: Vec<BoundRule>,

    /// Resolved and validated, but never forwarded to the remote API.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub internal_only: bool,
}

impl AttributeDefinition {
    /// Create a bare attribute: no default, no cast, no rule.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            wire_name: None,
            cast: None,
            rules: Vec::new(),
            internal_only: false,
        }
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_wire_name(mut self, wire_name: impl Into<String>) -> Self {
        self.wire_name = Some(wire_name.into());
        self
    }

    pub fn with_cast(mut self, cast: CastKind) -> Self {
        self.cast = Some(cast);
        self
    }

    /// Add a bound rule. Rules accumulate.
    pub fn with_rule(mut self, rule: BoundRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Mark the attribute as internal-only.
    pub fn internal(mut self) -> Self {
        self.internal_only = true;
        self
    }

    /// The key this attribute is emitted under in the wire map.
    pub fn wire_key(&self) -> &str {
        self.wire_name.as_deref().unwrap_or(&self.name)
    }

    /// Whether this attribute is forwarded to the remote call.
    pub fn is_wire(&self) -> bool {
        !self.internal_only
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(BoundRule),
    Many(Vec<BoundRule>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<BoundRule>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(rule) => vec![rule],
        OneOrMany::Many(rules) => rules,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_key_falls_back_to_name() {
        let plain = AttributeDefinition::new("short_code");
        assert_eq!(plain.wire_key(), "short_code");

        let mapped = AttributeDefinition::new("select").with_wire_name("$select");
        assert_eq!(mapped.wire_key(), "$select");
    }

    #[test]
    fn test_builder_sets_all_fields() {
        let attr = AttributeDefinition::new("top")
            .with_default(500)
            .with_wire_name("$top")
            .with_cast(CastKind::Int)
            .with_rule(BoundRule::Max(500.0));

        assert_eq!(attr.default, Some(json!(500)));
        assert_eq!(attr.cast, Some(CastKind::Int));
        assert_eq!(attr.rules, vec![BoundRule::Max(500.0)]);
        assert!(attr.is_wire());
        assert!(!attr.clone().internal().is_wire());
    }

    #[test]
    fn test_cast_kind_aliases() {
        let kinds: Vec<CastKind> =
            serde_yaml::from_str("[bool, boolean, int, integer, float, double, string]").unwrap();
        assert_eq!(
            kinds,
            vec![
                CastKind::Bool,
                CastKind::Bool,
                CastKind::Int,
                CastKind::Int,
                CastKind::Float,
                CastKind::Float,
                CastKind::String,
            ]
        );
    }

    #[test]
    fn test_rules_accumulate() {
        let attr = AttributeDefinition::new("top")
            .with_rule(BoundRule::Min(1.0))
            .with_rule(BoundRule::Max(1.0));
        assert_eq!(attr.rules, vec![BoundRule::Min(1.0), BoundRule::Max(1.0)]);
    }

    #[test]
    fn test_deserialize_single_rule_or_list() {
        let single: AttributeDefinition =
            serde_yaml::from_str("name: top\nrule: \"max:500\"").unwrap();
        assert_eq!(single.rules, vec![BoundRule::Max(500.0)]);

        let list: AttributeDefinition =
            serde_yaml::from_str("name: top\nrules: [\"min:1\", \"max:1\"]").unwrap();
        assert_eq!(list.rules, vec![BoundRule::Min(1.0), BoundRule::Max(1.0)]);
    }

    #[test]
    fn test_deserialize_minimal_attribute() {
        let attr: AttributeDefinition = serde_yaml::from_str("name: skip").unwrap();
        assert_eq!(attr, AttributeDefinition::new("skip"));
    }
}
