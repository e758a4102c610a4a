//! # referencing
//!
//! An implementation-agnostic JSON reference resolution library for Rust: JSON Pointer
//! (RFC 6901) traversal, `$id`/`$anchor` indexing, and `$ref`/`$dynamicRef`/`$recursiveRef`
//! resolution against a scope stack, usable by any JSON Schema validator (or other
//! JSON-Reference-based format).
mod anchors;
mod error;
pub mod meta;
pub mod pointer;
mod registry;
mod resolver;
mod resource;
mod retriever;
mod specification;
pub mod uri;
pub mod vocabularies;

pub use anchors::Anchor;
pub use error::Error;
pub use registry::{Registry, RegistryOptions};
pub use resolver::{Resolved, Resolver};
pub use resource::{Resource, ResourceRef};
pub use retriever::{DefaultRetriever, Retrieve};
pub use specification::Draft;
pub use vocabularies::{uris, VocabularySet};

pub type Uri = url::Url;
