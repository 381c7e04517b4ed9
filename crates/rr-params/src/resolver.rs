//! Parameter resolution.
//!
//! [`ParameterResolver`] walks a schema in declaration order and, per
//! attribute:
//!
//! 1. fetches the supplied value, falling back to the default, or skips the
//!    attribute when neither is set;
//! 2. checks each bound rule against the raw value;
//! 3. applies the cast;
//! 4. records the result in the full map, and in the wire map unless the
//!    attribute is internal-only.
//!
//! The first validation error aborts the pass.

use crate::cast::apply_cast;
use crate::error::ValidationError;
use crate::resolved::ResolvedParameters;
use crate::rules::check_rule;
use crate::source::ParameterSource;
use rr_core::{AttributeDefinition, AttributeSchema};
use serde_json::Value;

/// Resolves an [`AttributeSchema`] against caller-supplied values.
///
/// Stateless: a resolver can be shared freely and every call to
/// [`resolve`](Self::resolve) is independent.
#[derive(Debug, Clone, Copy)]
pub struct ParameterResolver<'a> {
    schema: &'a AttributeSchema,
}

impl<'a> ParameterResolver<'a> {
    /// Create a resolver for `schema`.
    pub fn new(schema: &'a AttributeSchema) -> Self {
        Self { schema }
    }

    /// Get the schema.
    pub fn schema(&self) -> &AttributeSchema {
        self.schema
    }

    /// Resolve the schema against `source`.
    pub fn resolve<S>(&self, source: &S) -> Result<ResolvedParameters, ValidationError>
    where
        S: ParameterSource + ?Sized,
    {
        let mut params = ResolvedParameters::default();

        for attr in self.schema {
            let Some(value) = self.resolve_attribute(attr, source)? else {
                continue;
            };
            let wire_name = attr.is_wire().then(|| attr.wire_key());
            params.insert(&attr.name, wire_name, value);
        }

        tracing::debug!(
            resolved = params.full_map().len(),
            wire = params.wire_map().len(),
            "Resolved parameter set"
        );

        Ok(params)
    }

    /// Resolve a single attribute. `None` means the attribute is omitted.
    fn resolve_attribute<S>(
        &self,
        attr: &AttributeDefinition,
        source: &S,
    ) -> Result<Option<Value>, ValidationError>
    where
        S: ParameterSource + ?Sized,
    {
        let value = match source.fetch(&attr.name) {
            Some(raw) if !is_unset(&raw) => Value::String(raw),
            _ => match &attr.default {
                Some(default) => {
                    tracing::trace!(attribute = %attr.name, "Using default value");
                    default.clone()
                }
                None => return Ok(None),
            },
        };

        for rule in &attr.rules {
            check_rule(&attr.name, &value, rule).inspect_err(|e| {
                tracing::warn!(attribute = %attr.name, rule = %rule, "{}", e);
            })?;
        }

        let value = match attr.cast {
            Some(cast) => apply_cast(&attr.name, value, cast).inspect_err(|e| {
                tracing::warn!(attribute = %attr.name, cast = %cast, "{}", e);
            })?,
            None => value,
        };

        tracing::debug!(attribute = %attr.name, value = %value, "Resolved attribute");

        Ok(Some(value))
    }
}

/// A supplied value that counts as "not given": empty or `"0"`.
fn is_unset(raw: &str) -> bool {
    raw.is_empty() || raw == "0"
}

/// Resolve `schema` against `source` in one call.
pub fn resolve<S>(
    schema: &AttributeSchema,
    source: &S,
) -> Result<ResolvedParameters, ValidationError>
where
    S: ParameterSource + ?Sized,
{
    ParameterResolver::new(schema).resolve(source)
}
