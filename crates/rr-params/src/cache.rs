//! Cache settings carried by internal-only attributes.
//!
//! The remote call never sees `cache`, `cache_duration`, `strip_tags` or
//! `short_code`; the local layer reads them from the full map.

use crate::error::ValidationError;
use crate::resolved::ResolvedParameters;
use rr_core::CastKind;
use rr_core::schema::presets::DEFAULT_CACHE_DURATION;
use serde_json::Value;
use std::time::Duration;

/// Local settings for a listing query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSettings {
    /// Whether results may be served from cache.
    pub enabled: bool,
    /// How long cached results stay fresh.
    pub ttl: Duration,
    /// Whether HTML tags are stripped from rendered results.
    pub strip_tags: bool,
    /// Short code of the server the query targets, if not the default one.
    pub short_code: Option<String>,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            ttl: Duration::from_secs(DEFAULT_CACHE_DURATION),
            strip_tags: false,
            short_code: None,
        }
    }
}

impl CacheSettings {
    /// Read the settings from a resolved parameter set.
    pub fn from_parameters(params: &ResolvedParameters) -> Result<Self, ValidationError> {
        let ttl = match params.get("cache_duration") {
            None => Duration::from_secs(DEFAULT_CACHE_DURATION),
            Some(value) => Duration::from_secs(seconds(value).ok_or_else(|| {
                ValidationError::cast_failed("cache_duration", value, CastKind::Int)
            })?),
        };

        let short_code = match params.get("short_code") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        };

        Ok(Self {
            enabled: params.flag("cache"),
            ttl,
            strip_tags: params.flag("strip_tags"),
            short_code,
        })
    }

    /// The TTL to cache with, or `None` when caching is off.
    pub fn cache_ttl(&self) -> Option<Duration> {
        self.enabled.then_some(self.ttl)
    }
}

fn seconds(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
