//! Resolved parameter sets.

use serde::Serialize;
use serde_json::{Map, Value};

/// The outcome of one resolution pass, viewed two ways.
///
/// - the **full map**: every resolved attribute keyed by attribute name, for
///   local consumers such as the cache layer;
/// - the **wire map**: only attributes forwarded to the remote call, keyed by
///   wire name.
///
/// Both maps keep schema declaration order. The set is immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedParameters {
    full: Map<String, Value>,
    wire: Map<String, Value>,
}

impl ResolvedParameters {
    pub(crate) fn insert(&mut self, name: &str, wire_name: Option<&str>, value: Value) {
        if let Some(wire_name) = wire_name {
            self.wire.insert(wire_name.to_string(), value.clone());
        }
        self.full.insert(name.to_string(), value);
    }

    /// All resolved attributes, keyed by attribute name.
    pub fn full_map(&self) -> &Map<String, Value> {
        &self.full
    }

    /// Attributes for the remote call, keyed by wire name.
    pub fn wire_map(&self) -> &Map<String, Value> {
        &self.wire
    }

    /// Consume the set, returning `(full, wire)`.
    pub fn into_parts(self) -> (Map<String, Value>, Map<String, Value>) {
        (self.full, self.wire)
    }

    /// Resolved value of an attribute, by attribute name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.full.get(name)
    }

    /// Resolved value of a wire parameter, by wire name.
    pub fn wire(&self, wire_name: &str) -> Option<&Value> {
        self.wire.get(wire_name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.full.contains_key(name)
    }

    /// Whether an attribute resolved to `true` or the string `"true"`.
    pub fn flag(&self, name: &str) -> bool {
        match self.full.get(name) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s == "true",
            _ => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }

    /// The wire map as ordered `(name, value)` text pairs.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.wire
            .iter()
            .map(|(k, v)| (k.clone(), wire_text(v)))
            .collect()
    }

    /// The wire map as a form-url-encoded query string.
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs())
            .finish()
    }
}

/// Text form of a wire value. Strings are sent verbatim.
fn wire_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ResolvedParameters {
        let mut params = ResolvedParameters::default();
        params.insert("filter", Some("$filter"), json!("City eq 'Austin'"));
        params.insert("top", Some("$top"), json!(500));
        params.insert("cache", None, json!(true));
        params
    }

    #[test]
    fn test_views_are_split() {
        let params = sample();
        assert_eq!(params.full_map().len(), 3);
        assert_eq!(params.wire_map().len(), 2);
        assert_eq!(params.get("top"), Some(&json!(500)));
        assert_eq!(params.wire("$top"), Some(&json!(500)));
        assert_eq!(params.wire("cache"), None);
        assert!(params.flag("cache"));
        assert!(!params.flag("strip_tags"));
    }

    #[test]
    fn test_query_pairs_keep_order() {
        assert_eq!(
            sample().query_pairs(),
            vec![
                ("$filter".to_string(), "City eq 'Austin'".to_string()),
                ("$top".to_string(), "500".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_string_is_encoded() {
        assert_eq!(
            sample().to_query_string(),
            "%24filter=City+eq+%27Austin%27&%24top=500"
        );
    }

    #[test]
    fn test_empty_set() {
        let params = ResolvedParameters::default();
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(), "");
    }
}
