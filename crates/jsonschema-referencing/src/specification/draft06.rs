use super::SubresourceLocation::{self, Schema, SchemaArray, SchemaMap, SchemaOrSchemaArray};
use crate::vocabularies::VocabularySet;

/// Draft 6 adds `const`, `contains`, `propertyNames`, standalone numeric
/// `exclusiveMinimum`/`exclusiveMaximum`, and renames `id` to `$id`.
#[must_use]
pub(super) fn keyword_set() -> VocabularySet {
    let mut set = super::draft04::keyword_set();
    set.remove("id");
    set.extend([
        "$id",
        "const",
        "contains",
        "propertyNames",
    ]);
    set
}

pub(super) const SUBRESOURCE_LOCATIONS: &[SubresourceLocation] = &[
    SchemaMap("definitions"),
    SchemaMap("properties"),
    SchemaMap("patternProperties"),
    Schema("additionalProperties"),
    SchemaOrSchemaArray("items"),
    Schema("additionalItems"),
    Schema("contains"),
    Schema("propertyNames"),
    SchemaMap("dependencies"),
    SchemaArray("allOf"),
    SchemaArray("anyOf"),
    SchemaArray("oneOf"),
    Schema("not"),
];
