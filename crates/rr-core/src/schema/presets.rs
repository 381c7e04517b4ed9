//! Built-in schemas for the RETS Rabbit listing API.

use super::{AttributeDefinition, AttributeSchema, BoundRule, CastKind};

/// Largest page the listings API serves.
pub const MAX_TOP: f64 = 500.0;

/// Default cache lifetime in seconds.
pub const DEFAULT_CACHE_DURATION: u64 = 3600;

/// Schema of the `properties` search tag.
///
/// | name           | default | wire name  | cast | rule    | internal |
/// |----------------|---------|------------|------|---------|----------|
/// | select         |         | `$select`  |      |         |          |
/// | filter         |         | `$filter`  |      |         |          |
/// | orderby        |         | `$orderby` |      |         |          |
/// | top            | 500     | `$top`     |      | max:500 |          |
/// | skip           |         | `$skip`    |      |         |          |
/// | short_code     |         |            |      |         | yes      |
/// | cache          |         |            | bool |         | yes      |
/// | cache_duration | 3600    |            |      |         | yes      |
/// | strip_tags     | false   |            |      |         | yes      |
pub fn properties_schema() -> AttributeSchema {
    AttributeSchema {
        version: super::default_version(),
        attributes: vec![
            AttributeDefinition::new("select").with_wire_name("$select"),
            AttributeDefinition::new("filter").with_wire_name("$filter"),
            AttributeDefinition::new("orderby").with_wire_name("$orderby"),
            AttributeDefinition::new("top")
                .with_default(500)
                .with_wire_name("$top")
                .with_rule(BoundRule::Max(MAX_TOP)),
            AttributeDefinition::new("skip").with_wire_name("$skip"),
            AttributeDefinition::new("short_code").internal(),
            AttributeDefinition::new("cache")
                .with_cast(CastKind::Bool)
                .internal(),
            AttributeDefinition::new("cache_duration")
                .with_default(DEFAULT_CACHE_DURATION)
                .internal(),
            AttributeDefinition::new("strip_tags")
                .with_default(false)
                .internal(),
        ],
    }
}

/// Schema of the control-panel listing explorer.
///
/// The explorer previews one listing at a time, so `$top` is always the
/// integer 1: `top` defaults to 1, and a supplied value must equal 1.
pub fn explore_schema() -> AttributeSchema {
    AttributeSchema {
        version: super::default_version(),
        attributes: vec![
            AttributeDefinition::new("filter").with_wire_name("$filter"),
            AttributeDefinition::new("skip").with_wire_name("$skip"),
            AttributeDefinition::new("top")
                .with_default(1)
                .with_wire_name("$top")
                .with_cast(CastKind::Int)
                .with_rule(BoundRule::Min(1.0))
                .with_rule(BoundRule::Max(1.0)),
        ],
    }
}
