use super::SubresourceLocation::{self, Schema, SchemaArray, SchemaMap};
use crate::vocabularies::VocabularySet;

/// Draft 2020-12 replaces `$recursiveRef`/`$recursiveAnchor` with `$dynamicRef`/
/// `$dynamicAnchor`, introduces `prefixItems`, and drops the tuple form of `items` (and
/// `additionalItems` with it) in favor of `prefixItems` + `items`.
#[must_use]
pub(super) fn keyword_set() -> VocabularySet {
    let mut set = super::draft201909::keyword_set();
    set.remove("$recursiveRef");
    set.remove("$recursiveAnchor");
    set.remove("additionalItems");
    set.extend(["$dynamicRef", "$dynamicAnchor", "prefixItems"]);
    set
}

pub(super) const SUBRESOURCE_LOCATIONS: &[SubresourceLocation] = &[
    SchemaMap("$defs"),
    SchemaMap("properties"),
    SchemaMap("patternProperties"),
    Schema("additionalProperties"),
    Schema("unevaluatedProperties"),
    Schema("unevaluatedItems"),
    Schema("items"),
    SchemaArray("prefixItems"),
    Schema("contains"),
    Schema("propertyNames"),
    SchemaMap("dependentSchemas"),
    SchemaArray("allOf"),
    SchemaArray("anyOf"),
    SchemaArray("oneOf"),
    Schema("not"),
    Schema("if"),
    Schema("then"),
    Schema("else"),
];
