//! Output formatting shapes (component H): thin, serializable renderings of a validation
//! outcome. `Flag`/`Basic`/`Verbose` follow the hierarchy the JSON Schema output
//! specification names; `Detailed` is a simplified, non-schema-shape-mirroring tree
//! grouped by instance location (see `DESIGN.md`).
use std::collections::BTreeMap;

use serde::Serialize;

use crate::{error::ValidationError, paths::PathChunk};

/// The simplest possible output: whether the instance is valid, nothing else.
#[derive(Debug, Serialize)]
pub struct FlagOutput {
    pub valid: bool,
}

/// One failure within a [`BasicOutput`].
#[derive(Debug, Serialize)]
pub struct BasicOutputUnit {
    pub valid: bool,
    #[serde(rename = "keywordLocation")]
    pub keyword_location: String,
    #[serde(rename = "instanceLocation")]
    pub instance_location: String,
    pub error: String,
    pub keyword: Option<String>,
}

/// A flat list of failures, each locating the failing keyword and instance node.
#[derive(Debug, Serialize)]
pub struct BasicOutput {
    pub valid: bool,
    pub errors: Vec<BasicOutputUnit>,
}

/// Like [`BasicOutputUnit`], with the keyword's absolute (resource-qualified) location.
#[derive(Debug, Serialize)]
pub struct VerboseOutputUnit {
    pub valid: bool,
    #[serde(rename = "keywordLocation")]
    pub keyword_location: String,
    #[serde(rename = "absoluteKeywordLocation")]
    pub absolute_keyword_location: Option<String>,
    #[serde(rename = "instanceLocation")]
    pub instance_location: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct VerboseOutput {
    pub valid: bool,
    pub errors: Vec<VerboseOutputUnit>,
}

/// Failures grouped by the instance location they occurred at.
#[derive(Debug, Serialize)]
pub struct DetailedNode {
    pub valid: bool,
    pub instance_location: String,
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DetailedOutput {
    pub valid: bool,
    pub details: Vec<DetailedNode>,
}

#[must_use]
pub fn flag(errors: &[ValidationError]) -> FlagOutput {
    FlagOutput { valid: errors.is_empty() }
}

#[must_use]
pub fn basic(errors: &[ValidationError]) -> BasicOutput {
    let units = errors
        .iter()
        .map(|error| BasicOutputUnit {
            valid: false,
            keyword_location: format!("#{}", error.schema_path),
            instance_location: format!("#{}", error.instance_path),
            error: error.to_string(),
            keyword: keyword_of(error),
        })
        .collect();
    BasicOutput { valid: errors.is_empty(), errors: units }
}

#[must_use]
pub fn verbose(errors: &[ValidationError]) -> VerboseOutput {
    let units = errors
        .iter()
        .map(|error| VerboseOutputUnit {
            valid: false,
            keyword_location: format!("#{}", error.schema_path),
            absolute_keyword_location: None,
            instance_location: format!("#{}", error.instance_path),
            error: error.to_string(),
        })
        .collect();
    VerboseOutput { valid: errors.is_empty(), errors: units }
}

#[must_use]
pub fn detailed(errors: &[ValidationError]) -> DetailedOutput {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for error in errors {
        grouped
            .entry(format!("#{}", error.instance_path))
            .or_default()
            .push(error.to_string());
    }
    let details = grouped
        .into_iter()
        .map(|(instance_location, errors)| DetailedNode { valid: false, instance_location, errors })
        .collect();
    DetailedOutput { valid: errors.is_empty(), details }
}

fn keyword_of(error: &ValidationError) -> Option<String> {
    match error.schema_path.last()? {
        PathChunk::Keyword(name) => Some((*name).to_string()),
        PathChunk::Property(name) => Some(name.to_string()),
        PathChunk::Index(index) => Some(index.to_string()),
    }
}
