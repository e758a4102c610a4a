//! Vocabulary URIs, the keyword sets they gate, and `$vocabulary`-driven activation.
use ahash::AHashSet;
use serde_json::Value;

/// A named set of keywords a metaschema can require or allow, as declared by a 2019-09+
/// schema's `$vocabulary` object.
pub type VocabularySet = AHashSet<&'static str>;

/// Vocabulary URI constants understood by this crate, covering the core, applicator,
/// validation, meta-data, format (annotation and assertion), content and unevaluated
/// vocabularies for both 2019-09 and 2020-12.
pub mod uris {
    // 2020-12
    pub const CORE_2020: &str = "https://json-schema.org/draft/2020-12/vocab/core";
    pub const APPLICATOR_2020: &str = "https://json-schema.org/draft/2020-12/vocab/applicator";
    pub const VALIDATION_2020: &str = "https://json-schema.org/draft/2020-12/vocab/validation";
    pub const META_DATA_2020: &str = "https://json-schema.org/draft/2020-12/vocab/meta-data";
    pub const FORMAT_ANNOTATION_2020: &str =
        "https://json-schema.org/draft/2020-12/vocab/format-annotation";
    pub const FORMAT_ASSERTION_2020: &str =
        "https://json-schema.org/draft/2020-12/vocab/format-assertion";
    pub const CONTENT_2020: &str = "https://json-schema.org/draft/2020-12/vocab/content";
    pub const UNEVALUATED_2020: &str = "https://json-schema.org/draft/2020-12/vocab/unevaluated";

    // 2019-09
    pub const CORE_2019: &str = "https://json-schema.org/draft/2019-09/vocab/core";
    pub const APPLICATOR_2019: &str = "https://json-schema.org/draft/2019-09/vocab/applicator";
    pub const VALIDATION_2019: &str = "https://json-schema.org/draft/2019-09/vocab/validation";
    pub const META_DATA_2019: &str = "https://json-schema.org/draft/2019-09/vocab/meta-data";
    pub const FORMAT_2019: &str = "https://json-schema.org/draft/2019-09/vocab/format";
    pub const CONTENT_2019: &str = "https://json-schema.org/draft/2019-09/vocab/content";
}

/// Computes the set of vocabulary URIs declared active (`true`) in a metaschema's
/// `$vocabulary` object. Returns an empty set if the object is absent, which callers
/// interpret as "pre-2019-09 compatibility: all known keywords are allowed".
#[must_use]
pub fn active_vocabularies(metaschema: &Value) -> AHashSet<String> {
    let mut active = AHashSet::default();
    if let Some(map) = metaschema.get("$vocabulary").and_then(Value::as_object) {
        for (uri, required) in map {
            if required.as_bool().unwrap_or(false) {
                active.insert(uri.clone());
            }
        }
    }
    active
}

/// Returns `true` if `keyword` belongs to one of the vocabularies in `active`.
///
/// An empty `active` set means "vocabulary gating does not apply" (every draft before
/// 2019-09, or a 2019-09+ schema that never declared `$vocabulary`), in which case every
/// keyword known to the draft's allow-list is considered enabled.
#[must_use]
pub fn is_keyword_allowed(
    keyword: &str,
    active: &AHashSet<String>,
    table: &[(&str, &[&str])],
) -> bool {
    if active.is_empty() {
        return true;
    }
    table
        .iter()
        .any(|(vocab, keywords)| active.contains(*vocab) && keywords.contains(&keyword))
}

/// Static vocabulary-URI -> keyword-set table for 2020-12.
pub const TABLE_2020_12: &[(&str, &[&str])] = &[
    (
        uris::CORE_2020,
        &[
            "$schema",
            "$id",
            "$ref",
            "$anchor",
            "$dynamicRef",
            "$dynamicAnchor",
            "$vocabulary",
            "$comment",
            "$defs",
        ],
    ),
    (
        uris::APPLICATOR_2020,
        &[
            "prefixItems",
            "items",
            "contains",
            "additionalProperties",
            "properties",
            "patternProperties",
            "dependentSchemas",
            "propertyNames",
            "if",
            "then",
            "else",
            "allOf",
            "anyOf",
            "oneOf",
            "not",
        ],
    ),
    (
        uris::VALIDATION_2020,
        &[
            "type",
            "const",
            "enum",
            "multipleOf",
            "maximum",
            "exclusiveMaximum",
            "minimum",
            "exclusiveMinimum",
            "maxLength",
            "minLength",
            "pattern",
            "maxItems",
            "minItems",
            "uniqueItems",
            "maxContains",
            "minContains",
            "maxProperties",
            "minProperties",
            "required",
            "dependentRequired",
        ],
    ),
    (uris::META_DATA_2020, &["title", "description", "default", "deprecated", "readOnly", "writeOnly", "examples"]),
    (uris::FORMAT_ANNOTATION_2020, &["format"]),
    (uris::FORMAT_ASSERTION_2020, &["format"]),
    (uris::CONTENT_2020, &["contentEncoding", "contentMediaType", "contentSchema"]),
    (uris::UNEVALUATED_2020, &["unevaluatedItems", "unevaluatedProperties"]),
];

/// Static vocabulary-URI -> keyword-set table for 2019-09.
pub const TABLE_2019_09: &[(&str, &[&str])] = &[
    (
        uris::CORE_2019,
        &[
            "$schema",
            "$id",
            "$anchor",
            "$recursiveRef",
            "$recursiveAnchor",
            "$vocabulary",
            "$comment",
            "$defs",
        ],
    ),
    (
        uris::APPLICATOR_2019,
        &[
            "additionalItems",
            "items",
            "contains",
            "additionalProperties",
            "properties",
            "patternProperties",
            "dependentSchemas",
            "propertyNames",
            "if",
            "then",
            "else",
            "allOf",
            "anyOf",
            "oneOf",
            "not",
            "$ref",
        ],
    ),
    (
        uris::VALIDATION_2019,
        &[
            "type",
            "const",
            "enum",
            "multipleOf",
            "maximum",
            "exclusiveMaximum",
            "minimum",
            "exclusiveMinimum",
            "maxLength",
            "minLength",
            "pattern",
            "maxItems",
            "minItems",
            "uniqueItems",
            "maxContains",
            "minContains",
            "maxProperties",
            "minProperties",
            "required",
            "dependentRequired",
        ],
    ),
    (uris::META_DATA_2019, &["title", "description", "default", "deprecated", "readOnly", "writeOnly", "examples"]),
    (uris::FORMAT_2019, &["format"]),
    (uris::CONTENT_2019, &["contentEncoding", "contentMediaType", "contentSchema"]),
];
