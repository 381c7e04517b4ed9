//! `rr resolve` command implementation.

use anyhow::{Context, Result, bail};
use rr_core::AttributeSchema;
use rr_params::{CacheSettings, ParameterResolver, QueryParams};
use serde_json::json;

use super::OutputFormat;

/// Parse a `key=value` argument.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", s))?;
    if key.is_empty() {
        return Err(format!("empty attribute name in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Names in `pairs` the schema does not declare, first occurrence only.
pub fn undeclared<'a>(schema: &AttributeSchema, pairs: &'a [(String, String)]) -> Vec<&'a str> {
    let mut names: Vec<&str> = Vec::new();
    for (name, _) in pairs {
        if schema.get(name).is_none() && !names.contains(&name.as_str()) {
            names.push(name);
        }
    }
    names
}

/// Resolve `params` and `query` against `schema` and render the result.
///
/// `--param` values take precedence over the same name in `--query`.
pub fn run(
    schema: &AttributeSchema,
    params: &[(String, String)],
    query: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let mut pairs = params.to_vec();
    if let Some(query) = query {
        pairs.extend(QueryParams::parse(query).into_pairs());
    }

    for name in undeclared(schema, &pairs) {
        tracing::warn!(attribute = %name, "Ignoring attribute not declared in schema");
    }

    let source = QueryParams::from_pairs(pairs);
    let resolved = ParameterResolver::new(schema)
        .resolve(&source)
        .context("failed to resolve parameters")?;

    let output = match format {
        OutputFormat::Wire => serde_json::to_string_pretty(resolved.wire_map())?,
        OutputFormat::Full => serde_json::to_string_pretty(resolved.full_map())?,
        OutputFormat::Query => resolved.to_query_string(),
        OutputFormat::Cache => {
            if schema.get("cache").is_none() && schema.get("cache_duration").is_none() {
                bail!("schema declares no cache attributes");
            }
            let settings = CacheSettings::from_parameters(&resolved)?;
            serde_json::to_string_pretty(&json!({
                "enabled": settings.enabled,
                "ttl_seconds": settings.ttl.as_secs(),
                "strip_tags": settings.strip_tags,
                "short_code": settings.short_code,
            }))?
        }
    };

    Ok(output)
}
