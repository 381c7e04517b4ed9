//! End-to-end resolution against the built-in listing schemas.
//!
//! Run with: cargo test --package rr-params --test properties_schema

use rr_core::{explore_schema, properties_schema};
use rr_params::{ParameterResolver, QueryParams, ValidationErrorKind, resolve};
use serde_json::{Map, Value, json};
use std::collections::HashMap;

fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}

/// With nothing supplied, only attributes with defaults appear.
#[test]
fn test_empty_source_yields_exactly_the_defaults() {
    let params = resolve(&properties_schema(), &source(&[])).unwrap();

    assert_eq!(
        params.full_map(),
        &object(json!({"top": 500, "cache_duration": 3600, "strip_tags": false}))
    );
    assert_eq!(params.wire_map(), &object(json!({"$top": 500})));
}

#[test]
fn test_top_above_limit_fails() {
    let err = resolve(&properties_schema(), &source(&[("top", "501")])).unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::BoundExceeded);
    assert_eq!(err.attribute, "top");
    assert_eq!(err.constraint, "max:500");
}

#[test]
fn test_top_at_limit_succeeds() {
    let params = resolve(&properties_schema(), &source(&[("top", "500")])).unwrap();
    assert_eq!(params.wire("$top"), Some(&json!("500")));
    assert_eq!(params.query_pairs()[0], ("$top".to_string(), "500".to_string()));
}

#[test]
fn test_top_defaults_to_limit() {
    let params = resolve(&properties_schema(), &source(&[])).unwrap();
    assert_eq!(params.wire("$top"), Some(&json!(500)));
}

#[test]
fn test_cache_true_only_for_literal() {
    let schema = properties_schema();

    let params = resolve(&schema, &source(&[("cache", "true")])).unwrap();
    assert_eq!(params.get("cache"), Some(&json!(true)));

    for raw in ["TRUE", "1", "yes"] {
        let params = resolve(&schema, &source(&[("cache", raw)])).unwrap();
        assert_eq!(params.get("cache"), Some(&json!(false)), "cache={}", raw);
    }
}

#[test]
fn test_internal_attributes_never_reach_the_wire() {
    let params = resolve(
        &properties_schema(),
        &source(&[
            ("cache", "true"),
            ("cache_duration", "60"),
            ("strip_tags", "true"),
            ("short_code", "austin"),
            ("select", "ListPrice,City"),
        ]),
    )
    .unwrap();

    for name in ["cache", "cache_duration", "strip_tags", "short_code"] {
        assert!(params.contains(name), "{} missing from full map", name);
        assert!(params.wire(name).is_none(), "{} leaked onto the wire", name);
    }
    assert_eq!(
        params.wire_map().keys().collect::<Vec<_>>(),
        vec!["$select", "$top"]
    );
}

#[test]
fn test_resolution_is_idempotent() {
    let schema = properties_schema();
    let resolver = ParameterResolver::new(&schema);
    let supplied = source(&[("filter", "Beds ge 3"), ("orderby", "ListPrice desc")]);

    let first = resolver.resolve(&supplied).unwrap();
    let second = resolver.resolve(&supplied).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_filter_and_skip_scenario() {
    let params = resolve(
        &properties_schema(),
        &source(&[("filter", "City eq 'Austin'"), ("skip", "10")]),
    )
    .unwrap();

    assert_eq!(
        params.wire_map(),
        &object(json!({"$filter": "City eq 'Austin'", "$top": 500, "$skip": "10"}))
    );
    assert_eq!(
        params.full_map(),
        &object(json!({
            "filter": "City eq 'Austin'",
            "top": 500,
            "skip": "10",
            "cache_duration": 3600,
            "strip_tags": false,
        }))
    );
    assert!(!params.contains("cache"));
}

#[test]
fn test_query_string_source() {
    let params = resolve(
        &properties_schema(),
        &QueryParams::parse("filter=City+eq+%27Austin%27&top=25&cache=true"),
    )
    .unwrap();

    assert_eq!(
        params.to_query_string(),
        "%24filter=City+eq+%27Austin%27&%24top=25"
    );
    assert!(params.flag("cache"));
}

#[test]
fn test_explore_pins_top_to_one() {
    let schema = explore_schema();

    let params = resolve(&schema, &source(&[("filter", "Beds ge 2"), ("skip", "4")])).unwrap();
    assert_eq!(
        params.wire_map(),
        &object(json!({"$filter": "Beds ge 2", "$skip": "4", "$top": 1}))
    );

    let err = resolve(&schema, &source(&[("top", "50")])).unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::BoundExceeded);
}

/// Anything the explorer sends as `$top` must be exactly 1.
#[test]
fn test_explore_rejects_top_below_one() {
    let schema = explore_schema();

    for raw in ["-3", "0.5"] {
        let err = resolve(&schema, &source(&[("top", raw)])).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::BelowBound, "top={}", raw);
        assert_eq!(err.attribute, "top");
        assert_eq!(err.constraint, "min:1");
    }

    let err = resolve(&schema, &source(&[("top", "many")])).unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::NotNumeric);
}

#[test]
fn test_explore_normalizes_top_spellings() {
    let schema = explore_schema();

    for raw in ["1", "1e0", "1.0"] {
        let params = resolve(&schema, &source(&[("top", raw)])).unwrap();
        assert_eq!(params.to_query_string(), "%24top=1", "top={}", raw);
    }
}
