use super::SubresourceLocation::{self, Schema, SchemaArray, SchemaMap, SchemaOrSchemaArray};
use crate::vocabularies::VocabularySet;

/// Draft 7 adds `if`/`then`/`else`, `$comment`, and the `contentEncoding`/`contentMediaType`
/// annotation keywords.
#[must_use]
pub(super) fn keyword_set() -> VocabularySet {
    let mut set = super::draft06::keyword_set();
    set.extend([
        "if",
        "then",
        "else",
        "$comment",
        "contentEncoding",
        "contentMediaType",
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
    Schema("if"),
    Schema("then"),
    Schema("else"),
];
