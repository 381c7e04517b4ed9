//! Typed request-parameter resolution for RETS Rabbit listing queries.
//!
//! A template or request supplies loosely-typed attributes (`top="50"`,
//! `cache="true"`). This crate resolves them against an
//! [`AttributeSchema`](rr_core::AttributeSchema) into a validated, sparse
//! parameter set with two views:
//!
//! - the full map, keyed by attribute name, for local decisions such as
//!   caching ([`CacheSettings`]);
//! - the wire map, keyed by OData-style wire names (`$top`, `$filter`, ...),
//!   for the listings API call.
//!
//! ```
//! use rr_core::properties_schema;
//! use rr_params::{QueryParams, resolve};
//!
//! let params = resolve(&properties_schema(), &QueryParams::parse("skip=10")).unwrap();
//! assert_eq!(params.to_query_string(), "%24top=500&%24skip=10");
//! ```
//!
//! Resolution performs no I/O and holds no state between calls.

pub mod cache;
pub mod cast;
pub mod error;
pub mod resolved;
pub mod resolver;
pub mod rules;
pub mod source;

pub use cache::CacheSettings;
pub use error::{ValidationError, ValidationErrorKind};
pub use resolved::ResolvedParameters;
pub use resolver::{ParameterResolver, resolve};
pub use source::{ParameterSource, QueryParams};
