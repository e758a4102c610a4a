use super::SubresourceLocation::{self, Schema, SchemaArray, SchemaMap};
use crate::vocabularies::VocabularySet;

/// Draft 2019-09 introduces `$anchor`, `$recursiveRef`/`$recursiveAnchor`, `$defs`,
/// `$vocabulary`, the split `dependentRequired`/`dependentSchemas`, `unevaluatedProperties`/
/// `unevaluatedItems`, and `minContains`/`maxContains`. `items` may still take the tuple
/// (array-of-schemas) form, paired with `additionalItems`.
#[must_use]
pub(super) fn keyword_set() -> VocabularySet {
    let mut set = super::draft07::keyword_set();
    set.remove("definitions");
    set.remove("dependencies");
    set.extend([
        "$anchor",
        "$recursiveRef",
        "$recursiveAnchor",
        "$defs",
        "$vocabulary",
        "dependentRequired",
        "dependentSchemas",
        "unevaluatedProperties",
        "unevaluatedItems",
        "minContains",
        "maxContains",
        "contentSchema",
    ]);
    set
}

pub(super) const SUBRESOURCE_LOCATIONS: &[SubresourceLocation] = &[
    SchemaMap("$defs"),
    SchemaMap("properties"),
    SchemaMap("patternProperties"),
    Schema("additionalProperties"),
    Schema("unevaluatedProperties"),
    Schema("unevaluatedItems"),
    super::SubresourceLocation::SchemaOrSchemaArray("items"),
    Schema("additionalItems"),
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
