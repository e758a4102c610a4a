mod draft04;
mod draft06;
mod draft07;
mod draft201909;
mod draft202012;

use serde_json::Value;

use crate::{vocabularies::VocabularySet, Error};

/// A published JSON Schema specification version.
///
/// Variants are ordered oldest-first so that `Draft04 < Draft202012` holds, which is
/// convenient when a caller wants to pick "the newest of the given drafts".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Draft {
    Draft4,
    Draft6,
    Draft7,
    Draft201909,
    #[default]
    Draft202012,
}

impl Draft {
    /// The canonical `$schema` URI for this draft.
    #[must_use]
    pub const fn schema_uri(self) -> &'static str {
        match self {
            Draft::Draft4 => "http://json-schema.org/draft-04/schema#",
            Draft::Draft6 => "http://json-schema.org/draft-06/schema#",
            Draft::Draft7 => "http://json-schema.org/draft-07/schema#",
            Draft::Draft201909 => "https://json-schema.org/draft/2019-09/schema",
            Draft::Draft202012 => "https://json-schema.org/draft/2020-12/schema",
        }
    }

    /// A short human-readable label, e.g. for CLI output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Draft::Draft4 => "draft4",
            Draft::Draft6 => "draft6",
            Draft::Draft7 => "draft7",
            Draft::Draft201909 => "draft2019-09",
            Draft::Draft202012 => "draft2020-12",
        }
    }

    /// Detects a draft from a `$schema` URI by substring match, per the detection rules
    /// every implementation of this library follows:
    /// `"draft-04"`, `"draft-06"`, `"draft-07"`, `"2019-09"`, `"2020-12"`.
    ///
    /// Returns `None` for an unrecognized URI, which callers may treat as
    /// [`crate::Error::UnknownSpecification`] or fall back to [`Draft::default`].
    #[must_use]
    pub fn from_uri(uri: &str) -> Option<Draft> {
        if uri.contains("draft-04") {
            Some(Draft::Draft4)
        } else if uri.contains("draft-06") {
            Some(Draft::Draft6)
        } else if uri.contains("draft-07") {
            Some(Draft::Draft7)
        } else if uri.contains("2019-09") {
            Some(Draft::Draft201909)
        } else if uri.contains("2020-12") {
            Some(Draft::Draft202012)
        } else {
            None
        }
    }

    /// Detects the draft of `contents` from its `$schema` keyword, falling back to `self`
    /// (typically [`Draft::default()`]) when the keyword is absent or unrecognized.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSpecification`] if `$schema` is present but does not match
    /// any known draft URI.
    pub fn detect(self, contents: &Value) -> Result<Draft, Error> {
        match contents.get("$schema").and_then(Value::as_str) {
            Some(uri) => {
                Draft::from_uri(uri).ok_or_else(|| Error::unknown_specification(uri.to_string()))
            }
            None => Ok(self),
        }
    }

    /// The keyword that carries a resource's identifier under this draft: `id` for drafts 4
    /// and 6's pre-`$id` era is handled by [`Draft::Draft4`]/[`Draft::Draft6`] themselves,
    /// `$id` from draft 6 onward once the keyword was renamed.
    #[must_use]
    pub(crate) const fn id_keyword(self) -> &'static str {
        match self {
            Draft::Draft4 => "id",
            _ => "$id",
        }
    }

    /// Resource identifier declared on `contents`, if any.
    #[must_use]
    pub fn id_of<'a>(self, contents: &'a Value) -> Option<&'a str> {
        contents.get(self.id_keyword()).and_then(Value::as_str)
    }

    /// Whether `$ref` discards sibling keywords at the same schema object (drafts up to and
    /// including 07), or is evaluated as one assertion alongside its siblings (2019-09+).
    #[must_use]
    pub const fn ref_replaces_siblings(self) -> bool {
        matches!(self, Draft::Draft4 | Draft::Draft6 | Draft::Draft7)
    }

    /// Whether this draft recognizes `$anchor`/`$dynamicAnchor` (2019-09+) as opposed to
    /// plain-fragment `id`-based anchors (04/06/07).
    #[must_use]
    pub const fn supports_modern_anchors(self) -> bool {
        matches!(self, Draft::Draft201909 | Draft::Draft202012)
    }

    /// The default active vocabulary set for this draft, used when a schema does not declare
    /// `$vocabulary` itself (true for every draft before 2019-09, and for any 2019-09+ schema
    /// that omits the declaration).
    #[must_use]
    pub(crate) fn default_vocabulary(self) -> VocabularySet {
        match self {
            Draft::Draft4 => draft04::keyword_set(),
            Draft::Draft6 => draft06::keyword_set(),
            Draft::Draft7 => draft07::keyword_set(),
            Draft::Draft201909 => draft201909::keyword_set(),
            Draft::Draft202012 => draft202012::keyword_set(),
        }
    }

    /// Locations, relative to a schema object, where this draft allows a nested schema
    /// resource to introduce its own `$id`/`id` and thus start a new resolution scope.
    /// Used by [`crate::Resource::subresources`] to discover nested resources eagerly.
    #[must_use]
    pub(crate) fn subresource_locations(self) -> &'static [SubresourceLocation] {
        match self {
            Draft::Draft4 => draft04::SUBRESOURCE_LOCATIONS,
            Draft::Draft6 => draft06::SUBRESOURCE_LOCATIONS,
            Draft::Draft7 => draft07::SUBRESOURCE_LOCATIONS,
            Draft::Draft201909 => draft201909::SUBRESOURCE_LOCATIONS,
            Draft::Draft202012 => draft202012::SUBRESOURCE_LOCATIONS,
        }
    }
}

/// Describes where, syntactically, a keyword's value should be treated as a schema (or map
/// / array of schemas) when walking a document looking for nested resources.
#[derive(Debug, Clone, Copy)]
pub(crate) enum SubresourceLocation {
    /// `keyword` itself is a schema.
    Schema(&'static str),
    /// `keyword` is an object whose values are schemas (e.g. `properties`, `$defs`).
    SchemaMap(&'static str),
    /// `keyword` is an array of schemas (e.g. `allOf`, `prefixItems`).
    SchemaArray(&'static str),
    /// `keyword` is either a schema or an array of schemas (legacy `items`).
    SchemaOrSchemaArray(&'static str),
}
