//! `rr check` command implementation.
//!
//! Loads a schema file, which runs the same checks as programmatic
//! construction (unique names, non-colliding wire names, parseable rules),
//! and summarizes it.

use anyhow::{Context, Result};
use rr_core::AttributeSchema;
use std::fmt::Write;
use std::path::Path;

/// Validate the schema at `path` and return a summary.
pub fn run(path: &Path) -> Result<String> {
    let schema = AttributeSchema::from_file(path)
        .with_context(|| format!("invalid schema {}", path.display()))?;

    let wire = schema.wire_names().count();
    let internal = schema.internal_names().count();

    let mut out = format!(
        "OK {} (version {}): {} attributes, {} wire, {} internal",
        path.display(),
        schema.version(),
        schema.len(),
        wire,
        internal
    );

    for attr in &schema {
        let mut line = format!("\n  {} -> {}", attr.name, attr.wire_key());
        if attr.internal_only {
            line.push_str(" [internal]");
        }
        if let Some(default) = &attr.default {
            let _ = write!(line, " default={}", default);
        }
        if let Some(cast) = attr.cast {
            let _ = write!(line, " cast={}", cast);
        }
        for rule in &attr.rules {
            let _ = write!(line, " rule={}", rule);
        }
        out.push_str(&line);
    }

    Ok(out)
}
