use super::SubresourceLocation::{self, Schema, SchemaArray, SchemaMap, SchemaOrSchemaArray};
use crate::vocabularies::VocabularySet;

/// Keywords recognized under Draft 4. Notably absent relative to later drafts: `const`,
/// `contains`, `propertyNames`, `if`/`then`/`else` — `exclusiveMinimum`/`exclusiveMaximum`
/// are boolean modifiers of `minimum`/`maximum` rather than standalone numeric keywords.
#[must_use]
pub(super) fn keyword_set() -> VocabularySet {
    [
        "$schema", "id", "$ref", "title", "description", "default", "type", "enum", "format",
        "multipleOf", "maximum", "exclusiveMaximum", "minimum", "exclusiveMinimum", "maxLength",
        "minLength", "pattern", "items", "additionalItems", "maxItems", "minItems",
        "uniqueItems", "maxProperties", "minProperties", "required", "properties",
        "patternProperties", "additionalProperties", "dependencies", "definitions", "allOf",
        "anyOf", "oneOf", "not",
    ]
    .into_iter()
    .collect()
}

// `dependencies` entries are either a schema or an array of property names; discovery
// walks it as a schema-map and skips entries that turn out not to be objects.
pub(super) const SUBRESOURCE_LOCATIONS: &[SubresourceLocation] = &[
    SchemaMap("definitions"),
    SchemaMap("properties"),
    SchemaMap("patternProperties"),
    Schema("additionalProperties"),
    SchemaOrSchemaArray("items"),
    Schema("additionalItems"),
    SchemaMap("dependencies"),
    SchemaArray("allOf"),
    SchemaArray("anyOf"),
    SchemaArray("oneOf"),
    Schema("not"),
];
