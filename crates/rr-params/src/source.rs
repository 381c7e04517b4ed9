//! Parameter sources.
//!
//! A [`ParameterSource`] answers one question: what value did the caller
//! supply for attribute `name`, if any? It decouples resolution from wherever
//! the values come from (a template tag, a query string, a form body).

use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Something that can be asked for caller-supplied attribute values.
///
/// Implementations must return the same answer for the same name for the
/// duration of one resolution pass.
pub trait ParameterSource {
    /// Fetch the raw value supplied for `name`.
    fn fetch(&self, name: &str) -> Option<String>;
}

impl ParameterSource for HashMap<String, String> {
    fn fetch(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl ParameterSource for BTreeMap<String, String> {
    fn fetch(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// JSON objects, e.g. a decoded request body. Scalars are rendered as text;
/// `null` counts as absent.
impl ParameterSource for serde_json::Map<String, Value> {
    fn fetch(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl<F> ParameterSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn fetch(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Parameters parsed from a URL query string (`filter=...&skip=10`).
///
/// Values are percent-decoded. When a name repeats, the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a raw query string. A leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        Self { pairs }
    }

    /// Build from already-decoded pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Consume into the decoded pairs, in query order.
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl ParameterSource for QueryParams {
    fn fetch(&self, name: &str) -> Option<String> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }
}
