//! CLI command implementations.

pub mod check;
pub mod resolve;

use anyhow::{Context, Result};
use clap::ValueEnum;
use rr_core::{AttributeSchema, explore_schema, properties_schema};
use std::path::Path;

/// Built-in schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// The `properties` listing search tag
    Properties,
    /// The control-panel listing explorer
    Explore,
}

impl Preset {
    pub fn schema(self) -> AttributeSchema {
        match self {
            Preset::Properties => properties_schema(),
            Preset::Explore => explore_schema(),
        }
    }
}

/// Output of `rr resolve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Wire map as JSON
    Wire,
    /// Full map as JSON
    Full,
    /// Wire map as an encoded query string
    Query,
    /// Cache settings as JSON
    Cache,
}

/// Load the schema file if one is given, otherwise the preset.
pub fn load_schema(path: Option<&Path>, preset: Preset) -> Result<AttributeSchema> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading schema file");
            AttributeSchema::from_file(path)
                .with_context(|| format!("failed to load schema {}", path.display()))
        }
        None => Ok(preset.schema()),
    }
}
