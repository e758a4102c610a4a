use std::sync::Arc;

use ahash::AHashMap;
use referencing::{Draft, Resource, Retrieve};
use serde_json::Value;

use crate::{retriever::DefaultRetriever, validator::Validator, SchemaError};

/// Configuration for building a [`Validator`].
///
/// Constructed via [`crate::options`] and consumed by [`ValidationOptions::build`].
#[derive(Clone)]
pub struct ValidationOptions {
    pub(crate) draft: Option<Draft>,
    pub(crate) retriever: Arc<dyn Retrieve>,
    pub(crate) resources: AHashMap<String, Resource>,
    pub(crate) formats: AHashMap<String, Arc<dyn Fn(&str) -> bool + Send + Sync>>,
    pub(crate) validate_formats: Option<bool>,
    pub(crate) format_assertion: bool,
    pub(crate) max_depth: usize,
    pub(crate) ignore_unknown_formats: bool,
    pub(crate) fail_fast: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        ValidationOptions {
            draft: None,
            retriever: Arc::new(DefaultRetriever::default()),
            resources: AHashMap::default(),
            formats: AHashMap::default(),
            validate_formats: None,
            format_assertion: false,
            max_depth: 1000,
            ignore_unknown_formats: true,
            fail_fast: false,
        }
    }
}

impl ValidationOptions {
    pub(crate) fn draft(&self) -> Draft {
        self.draft.unwrap_or_default()
    }

    /// Draft to use, preferring an explicit override over `$schema` autodetection, which in
    /// turn takes precedence over [`Draft::default`] (2020-12).
    pub(crate) fn draft_for(&self, contents: &Value) -> Draft {
        match self.draft {
            Some(draft) => draft,
            None => Draft::default().detect(contents).unwrap_or_default(),
        }
    }

    /// Build a [`Validator`] from `schema` using the current options.
    ///
    /// This is a *schema* error path (see [`SchemaError`]), disjoint from the *instance*
    /// errors a built [`Validator`] later returns from `validate`/`is_valid`.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] if `schema` is structurally invalid (not a boolean or
    /// object), names an unsupported `$schema` draft, or a referenced resource cannot be
    /// resolved while indexing the schema.
    pub fn build(&self, schema: &Value) -> Result<Validator, SchemaError> {
        Validator::from_options(self.clone(), schema)
    }

    /// Overrides draft detection.
    #[inline]
    pub fn with_draft(&mut self, draft: Draft) -> &mut Self {
        self.draft = Some(draft);
        self
    }

    /// Sets a retriever used to fetch schemas referenced by an out-of-document `$ref`.
    pub fn with_retriever(&mut self, retriever: impl Retrieve + 'static) -> &mut Self {
        self.retriever = Arc::new(retriever);
        self
    }

    /// Registers an in-memory schema addressable by `uri` during validation, without
    /// requiring a retriever round-trip.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use serde_json::json;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use jsonschema::Resource;
    ///
    /// let extra = Resource::from_contents(json!({"minimum": 5}))?;
    /// let validator = jsonschema::options()
    ///     .with_resource("urn:minimum-schema", extra)
    ///     .build(&json!({"$ref": "urn:minimum-schema"}))?;
    /// assert!(validator.is_valid(&json!(5)));
    /// assert!(!validator.is_valid(&json!(4)));
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_resource(&mut self, uri: impl Into<String>, resource: Resource) -> &mut Self {
        self.resources.insert(uri.into(), resource);
        self
    }

    /// Registers several in-memory schemas at once. See [`ValidationOptions::with_resource`].
    pub fn with_resources(
        &mut self,
        pairs: impl IntoIterator<Item = (impl Into<String>, Resource)>,
    ) -> &mut Self {
        for (uri, resource) in pairs {
            self.resources.insert(uri.into(), resource);
        }
        self
    }

    /// Registers a custom `format` predicate. Overrides a built-in format of the same name.
    pub fn with_format<N, F>(&mut self, name: N, format: F) -> &mut Self
    where
        N: Into<String>,
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.formats.insert(name.into(), Arc::new(format));
        self
    }

    /// Overrides whether `format` is asserted (rather than only an annotation), regardless
    /// of draft default.
    #[inline]
    pub fn should_validate_formats(&mut self, yes: bool) -> &mut Self {
        self.validate_formats = Some(yes);
        self
    }

    /// Enables format assertion for drafts 04/06/07 (where it is opt-in), or forces the
    /// `format-assertion` vocabulary semantics for 2019-09/2020-12.
    #[inline]
    pub fn with_format_assertions(&mut self, yes: bool) -> &mut Self {
        self.format_assertion = yes;
        self
    }

    /// Overrides the maximum schema-traversal recursion depth (default 1000).
    #[inline]
    pub fn with_max_depth(&mut self, max_depth: usize) -> &mut Self {
        self.max_depth = max_depth;
        self
    }

    /// Whether an unrecognized `format` name is silently ignored (the default) or rejected.
    pub fn should_ignore_unknown_formats(&mut self, yes: bool) -> &mut Self {
        self.ignore_unknown_formats = yes;
        self
    }

    /// Stop at the first validation error instead of collecting all of them.
    #[inline]
    pub fn with_fail_fast(&mut self, yes: bool) -> &mut Self {
        self.fail_fast = yes;
        self
    }
}
