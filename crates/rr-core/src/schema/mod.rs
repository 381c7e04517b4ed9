//! Attribute schemas.
//!
//! An [`AttributeSchema`] is an ordered list of [`AttributeDefinition`]s.
//! Schemas can be built in code or loaded from YAML:
//!
//! ```yaml
//! version: "1.0.0"
//! attributes:
//!   - name: top
//!     default: 500
//!     wire_name: $top
//!     rule: "max:500"
//!   - name: cache
//!     cast: bool
//!     internal_only: true
//! ```
//!
//! Construction rejects duplicate attribute names and colliding wire names, so
//! a schema that exists is always well-formed.

pub mod attribute;
pub mod presets;
pub mod rule;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub use attribute::{AttributeDefinition, CastKind};
pub use presets::{explore_schema, properties_schema};
pub use rule::BoundRule;

/// Errors in a schema declaration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SchemaError {
    #[error("attribute at position {index} has an empty name")]
    EmptyName { index: usize },

    #[error("duplicate attribute name '{name}'")]
    DuplicateAttribute { name: String },

    #[error("attributes '{first}' and '{second}' both map to wire name '{wire_name}'")]
    DuplicateWireName {
        wire_name: String,
        first: String,
        second: String,
    },

    #[error("invalid rule '{rule}': {reason}")]
    InvalidRule { rule: String, reason: String },
}

/// Errors loading a schema from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

/// Serialized form of a schema, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SchemaDocument {
    #[serde(default = "default_version")]
    version: String,

    #[serde(default)]
    attributes: Vec<AttributeDefinition>,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

/// An ordered, validated attribute table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "SchemaDocument")]
pub struct AttributeSchema {
    version: String,
    attributes: Vec<AttributeDefinition>,
}

impl AttributeSchema {
    /// Build a schema, checking name and wire-name uniqueness.
    pub fn new(attributes: Vec<AttributeDefinition>) -> Result<Self, SchemaError> {
        Self::with_version(default_version(), attributes)
    }

    /// Build a schema with an explicit version string.
    pub fn with_version(
        version: impl Into<String>,
        attributes: Vec<AttributeDefinition>,
    ) -> Result<Self, SchemaError> {
        let mut names = HashSet::new();
        // wire name -> attribute name, wire attributes only
        let mut wire_names: Vec<(&str, &str)> = Vec::new();

        for (index, attr) in attributes.iter().enumerate() {
            if attr.name.is_empty() {
                return Err(SchemaError::EmptyName { index });
            }
            if !names.insert(attr.name.as_str()) {
                return Err(SchemaError::DuplicateAttribute {
                    name: attr.name.clone(),
                });
            }
            if attr.is_wire() {
                let key = attr.wire_key();
                if let Some((_, first)) = wire_names.iter().find(|(w, _)| *w == key) {
                    return Err(SchemaError::DuplicateWireName {
                        wire_name: key.to_string(),
                        first: first.to_string(),
                        second: attr.name.clone(),
                    });
                }
                wire_names.push((key, attr.name.as_str()));
            }
        }

        Ok(Self {
            version: version.into(),
            attributes,
        })
    }

    /// Load a schema from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse a schema from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let doc: SchemaDocument = serde_yaml::from_str(content)?;
        Ok(Self::with_version(doc.version, doc.attributes)?)
    }

    /// Serialize the schema back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Attributes in declaration order.
    pub fn attributes(&self) -> &[AttributeDefinition] {
        &self.attributes
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeDefinition> {
        self.attributes.iter()
    }

    /// Look up an attribute by name.
    pub fn get(&self, name: &str) -> Option<&AttributeDefinition> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Names of attributes that never reach the wire.
    pub fn internal_names(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .iter()
            .filter(|a| a.internal_only)
            .map(|a| a.name.as_str())
    }

    /// Wire names of attributes forwarded to the remote call.
    pub fn wire_names(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .iter()
            .filter(|a| a.is_wire())
            .map(|a| a.wire_key())
    }
}

impl From<AttributeSchema> for SchemaDocument {
    fn from(schema: AttributeSchema) -> Self {
        Self {
            version: schema.version,
            attributes: schema.attributes,
        }
    }
}

impl<'a> IntoIterator for &'a AttributeSchema {
    type Item = &'a AttributeDefinition;
    type IntoIter = std::slice::Iter<'a, AttributeDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}
