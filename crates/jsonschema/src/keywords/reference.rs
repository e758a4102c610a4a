//! `$ref`/`$dynamicRef`/`$recursiveRef` resolution (component E) wired into the evaluator:
//! looks the reference up through the active [`Resolver`], then recurses [`super::evaluate`]
//! into the resolved schema against the same instance node.
use referencing::Resolver;
use serde_json::Value;

use crate::{
    error::ValidationError,
    keywords::{evaluate, Annotations, Context, EvaluationAbort},
    paths::JSONPointer,
};

/// A failed lookup is a schema error (§7: `UnresolvedReference`/`InvalidJsonPointer`), not
/// an instance error — it is never pushed onto `errors`, only propagated as an abort.
#[allow(clippy::too_many_arguments)]
pub(crate) fn evaluate_ref<'i>(
    ctx: &Context,
    resolver: &Resolver,
    value: &Value,
    keyword: &str,
    instance: &'i Value,
    schema_path: JSONPointer,
    instance_path: JSONPointer,
    depth: usize,
    errors: &mut Vec<ValidationError<'i>>,
) -> Result<Annotations, EvaluationAbort> {
    let Some(reference) = value.as_str() else {
        return Ok(Annotations::default());
    };

    let resolved = match keyword {
        "$dynamicRef" => resolver.lookup_dynamic(reference),
        "$recursiveRef" => resolver.lookup_recursive(reference),
        _ => resolver.lookup(reference),
    };
    let resolved = match resolved {
        Ok(resolved) => resolved,
        Err(err) => return Err(EvaluationAbort::UnresolvedReference(err)),
    };

    let target_draft = resolved.draft();
    // A referenced resource that declares its own `$vocabulary` re-derives keyword gating
    // from it; one that doesn't inherits the referencing context's vocabulary, since
    // `$vocabulary` is ordinarily only ever declared once, at the document root.
    let active_vocabulary = match resolved.contents().get("$vocabulary") {
        Some(_) => referencing::vocabularies::active_vocabularies(resolved.contents()),
        None => ctx.active_vocabulary.clone(),
    };
    let child_ctx = ctx.with_draft(target_draft, active_vocabulary);
    let new_resolver = resolved.resolver().clone();

    evaluate(
        &child_ctx,
        &new_resolver,
        resolved.contents(),
        instance,
        schema_path,
        instance_path,
        depth + 1,
        errors,
    )
}
