//! Core types for RETS Rabbit listing queries.
//!
//! A listing query is described by an [`AttributeSchema`]: an ordered table of
//! template attributes, each with an optional default, wire name, cast and
//! numeric bound. The schema is static configuration; resolving it against
//! caller-supplied values happens in `rr-params`.

// Schema definition and loading
pub mod schema;

pub use schema::{
    AttributeDefinition, AttributeSchema, BoundRule, CastKind, ConfigError, SchemaError,
    explore_schema, properties_schema,
};
