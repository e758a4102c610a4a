//! The compiled [`Validator`] (component B/G): draft detection, registry construction, and
//! the public `validate`/`is_valid`/`iter_errors` entry points.
use ahash::AHashSet;
use referencing::{Draft, Registry, Resource};
use serde_json::Value;

use crate::{
    error::{into_errors, ErrorIterator, ValidationError},
    keywords::{evaluate, Context, EvaluationAbort},
    options::ValidationOptions,
    paths::JSONPointer,
    SchemaError,
};

/// A schema compiled against a fixed draft and resource registry, ready to validate
/// instances.
///
/// Built via [`crate::validator_for`] or [`ValidationOptions::build`].
pub struct Validator {
    options: ValidationOptions,
    registry: Registry,
    base_uri: url::Url,
    draft: Draft,
    active_vocabulary: AHashSet<String>,
    root: Value,
}

impl Validator {
    /// # Errors
    ///
    /// Returns a [`SchemaError`] if `schema` is not a boolean or object, names an
    /// unsupported draft, or a resource registered via
    /// [`ValidationOptions::with_resource`] fails to index.
    pub(crate) fn from_options(
        options: ValidationOptions,
        schema: &Value,
    ) -> Result<Validator, SchemaError> {
        if !schema.is_boolean() && !schema.is_object() {
            return Err(SchemaError::InvalidSchema);
        }
        let draft = options.draft_for(schema);
        let resource = Resource::from_contents_and_draft(schema.clone(), draft)?;
        let registry = Registry::options()
            .retriever(std::sync::Arc::clone(&options.retriever))
            .draft(draft)
            .try_new("", resource)?;
        for (uri, resource) in &options.resources {
            registry.try_with_resource(uri, resource.clone())?;
        }
        let active_vocabulary = if draft.supports_modern_anchors() {
            referencing::vocabularies::active_vocabularies(schema)
        } else {
            AHashSet::default()
        };
        let base_uri = referencing::uri::from_str("").expect("empty URI always resolves");

        Ok(Validator { options, registry, base_uri, draft, active_vocabulary, root: schema.clone() })
    }

    /// The draft this validator evaluates against (autodetected or overridden).
    #[must_use]
    pub fn draft(&self) -> Draft {
        self.draft
    }

    /// Returns `Ok(())` if `instance` satisfies the schema, or every accumulated failure
    /// otherwise (a single one if [`ValidationOptions::with_fail_fast`] was set).
    ///
    /// A `$ref`/`$dynamicRef`/`$recursiveRef` that fails to resolve, or a cyclic reference
    /// beyond [`ValidationOptions::with_max_depth`], is a schema error (§7), not an instance
    /// one: it aborts evaluation and is surfaced alone, in place of whatever instance errors
    /// had accumulated so far, rather than appended to them.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorIterator`] over the instance's validation failures.
    pub fn validate<'i>(&self, instance: &'i Value) -> Result<(), ErrorIterator<'i>> {
        let errors = self.evaluate_all(instance);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(into_errors(errors))
        }
    }

    /// Whether `instance` satisfies the schema.
    #[must_use]
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.evaluate_all(instance).is_empty()
    }

    /// Every validation failure for `instance`, without the `Result` wrapper `validate`
    /// uses.
    #[must_use]
    pub fn iter_errors<'i>(&self, instance: &'i Value) -> ErrorIterator<'i> {
        into_errors(self.evaluate_all(instance))
    }

    fn evaluate_all<'i>(&self, instance: &'i Value) -> Vec<ValidationError<'i>> {
        let resolver = self.registry.resolver(self.base_uri.clone());
        let ctx = Context { draft: self.draft, options: &self.options, active_vocabulary: self.active_vocabulary.clone() };
        let mut errors = Vec::new();
        let outcome = evaluate(
            &ctx,
            &resolver,
            &self.root,
            instance,
            JSONPointer::default(),
            JSONPointer::default(),
            0,
            &mut errors,
        );
        if let Err(abort) = outcome {
            // A schema error (§7): it aborts the call rather than accumulating alongside
            // whatever instance errors were collected before the abort, so those are
            // discarded and replaced with the single error describing the abort.
            errors.clear();
            errors.push(match abort {
                EvaluationAbort::DepthExceeded => ValidationError::custom(
                    JSONPointer::default(),
                    JSONPointer::default(),
                    instance,
                    format!("exceeded the maximum resolution depth of {}", self.options.max_depth),
                ),
                EvaluationAbort::UnresolvedReference(err) => ValidationError::from(err),
            });
        }
        if self.options.fail_fast {
            errors.truncate(1);
        }
        errors
    }
}
