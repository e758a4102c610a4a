//! The validation engine (component G): a draft-dispatched recursive evaluator over a
//! schema node against an instance value.
mod array;
mod composition;
mod content;
mod enum_const;
mod numeric;
mod object;
pub(crate) mod pattern;
mod reference;
mod string;
mod type_;

use ahash::AHashSet;
use num_cmp::NumCmp;
use referencing::{Draft, Resolver};
use serde_json::{Map, Value};

use crate::{
    error::{ErrorIterator, ValidationError},
    paths::{JSONPointer, PathChunk},
    ValidationOptions,
};

/// Evaluation state threaded through a single `validate()` call: the active draft, the
/// configured options, and the vocabulary declared by the schema currently being
/// evaluated (recomputed whenever a `$ref` crosses into a different resource).
pub(crate) struct Context<'o> {
    pub(crate) draft: Draft,
    pub(crate) options: &'o ValidationOptions,
    pub(crate) active_vocabulary: AHashSet<String>,
}

impl<'o> Context<'o> {
    pub(crate) fn with_draft(&self, draft: Draft, active_vocabulary: AHashSet<String>) -> Context<'o> {
        Context { draft, options: self.options, active_vocabulary }
    }
}

/// Properties and array indices "evaluated" (claimed by a successful subschema) at one
/// instance location, accumulated across siblings so `unevaluatedProperties`/
/// `unevaluatedItems` can see the union.
#[derive(Default, Clone)]
pub(crate) struct Annotations {
    pub(crate) properties: AHashSet<String>,
    pub(crate) items: AHashSet<usize>,
    /// `true` once some sibling applicator claimed "all items up to this index", e.g. a
    /// tuple-form `items`/`prefixItems` covering the whole array.
    pub(crate) items_all: bool,
}

impl Annotations {
    pub(crate) fn merge(&mut self, other: Annotations) {
        self.properties.extend(other.properties);
        self.items.extend(other.items);
        self.items_all |= other.items_all;
    }
}

/// A schema-level failure raised mid-evaluation, aborting the recursive descent in
/// progress. Mirrors the two schema-error variants of [`crate::SchemaError`] that can only
/// be detected once an instance is actually walked against the schema: the depth cap
/// ([`crate::SchemaError::DepthExceeded`]) and an unresolvable `$ref`/`$dynamicRef`/
/// `$recursiveRef` ([`crate::SchemaError::Referencing`]). Neither is an instance error
/// (§7): the caller surfaces them separately from any `ValidationError`s already
/// accumulated in this call, rather than appending them to that list.
pub(crate) enum EvaluationAbort {
    DepthExceeded,
    UnresolvedReference(referencing::Error),
}

/// Recursively evaluates `schema` against `instance`, appending any failures to `errors`
/// and returning the annotations this node (and everything beneath it) produced.
///
/// `depth` counts recursive descents into a child schema (an object/array member
/// subschema, a composition branch, or a `$ref` target) and is checked against
/// [`ValidationOptions::max_depth`] to guarantee termination on cyclic references.
#[allow(clippy::too_many_arguments)]
pub(crate) fn evaluate<'i>(
    ctx: &Context,
    resolver: &Resolver,
    schema: &Value,
    instance: &'i Value,
    schema_path: JSONPointer,
    instance_path: JSONPointer,
    depth: usize,
    errors: &mut Vec<ValidationError<'i>>,
) -> Result<Annotations, EvaluationAbort> {
    if depth > ctx.options.max_depth {
        return Err(EvaluationAbort::DepthExceeded);
    }
    match schema {
        Value::Bool(true) => Ok(Annotations::default()),
        Value::Bool(false) => {
            errors.push(ValidationError::false_schema(schema_path, instance_path, instance));
            Ok(Annotations::default())
        }
        Value::Object(map) => {
            if map.is_empty() {
                return Ok(Annotations::default());
            }
            let mut annotations = Annotations::default();

            // A nested `$id`/`id` starts a new resolution scope (§3 "Scope Stack"): every
            // relative `$ref` beneath this node, direct or via further nesting, resolves
            // against it rather than the document root. Identification runs before
            // references/assertions per §4.G's tie-break ordering.
            let rebased;
            let resolver: &Resolver = match ctx.draft.id_of(schema) {
                Some(id) => match resolver.in_subresource(id) {
                    Ok(new_resolver) => {
                        rebased = new_resolver;
                        &rebased
                    }
                    Err(_) => resolver,
                },
                None => resolver,
            };

            let has_ref = map.contains_key("$ref");
            if has_ref && ctx.draft.ref_replaces_siblings() {
                reference::evaluate_ref(
                    ctx,
                    resolver,
                    map.get("$ref").expect("checked above"),
                    "$ref",
                    instance,
                    schema_path,
                    instance_path,
                    depth,
                    errors,
                )?;
                return Ok(annotations);
            }

            for (keyword, target) in [("$ref", "$ref"), ("$dynamicRef", "$dynamicRef"), ("$recursiveRef", "$recursiveRef")] {
                if let Some(value) = map.get(keyword) {
                    if is_allowed(ctx, keyword) {
                        let sub = reference::evaluate_ref(
                            ctx,
                            resolver,
                            value,
                            target,
                            instance,
                            schema_path.clone_with(keyword),
                            instance_path.clone(),
                            depth,
                            errors,
                        )?;
                        annotations.merge(sub);
                    }
                }
            }

            if let Some(value) = map.get("type") {
                if is_allowed(ctx, "type") {
                    type_::evaluate(ctx, value, instance, &schema_path, &instance_path, errors);
                }
            }
            if let Some(value) = map.get("enum") {
                if is_allowed(ctx, "enum") {
                    enum_const::evaluate_enum(value, instance, &schema_path, &instance_path, errors);
                }
            }
            if let Some(value) = map.get("const") {
                if is_allowed(ctx, "const") {
                    enum_const::evaluate_const(value, instance, &schema_path, &instance_path, errors);
                }
            }

            numeric::evaluate(ctx, map, instance, &schema_path, &instance_path, errors);
            string::evaluate(ctx, map, instance, &schema_path, &instance_path, errors);
            content::evaluate(ctx, map, instance, &schema_path, &instance_path, errors);

            if let Value::Array(_) = instance {
                let sub = array::evaluate(
                    ctx, resolver, map, instance, &schema_path, &instance_path, depth, errors,
                )?;
                annotations.merge(sub);
            }
            if let Value::Object(_) = instance {
                let sub = object::evaluate(
                    ctx, resolver, map, instance, &schema_path, &instance_path, depth, errors,
                )?;
                annotations.merge(sub);
            }

            let sub = composition::evaluate(
                ctx, resolver, map, instance, &schema_path, &instance_path, depth, errors,
            )?;
            annotations.merge(sub);

            // `unevaluatedProperties`/`unevaluatedItems` run last, seeing the union of
            // every sibling's annotations computed above.
            if let Value::Object(_) = instance {
                object::evaluate_unevaluated(
                    ctx, resolver, map, instance, &schema_path, &instance_path, depth, &annotations, errors,
                )?;
            }
            if let Value::Array(_) = instance {
                let claimed = array::evaluate_unevaluated(
                    ctx, resolver, map, instance, &schema_path, &instance_path, depth, &annotations, errors,
                )?;
                annotations.merge(claimed);
            }

            Ok(annotations)
        }
        // A schema that is neither a bool nor an object is structurally invalid; the
        // public `build()` entry point rejects this before evaluation ever starts, and
        // resolvers never hand back anything else, so this is unreachable in practice.
        _ => Ok(Annotations::default()),
    }
}

/// Whether `keyword` is active for `ctx`: first the draft's static allow-list, then (for
/// 2019-09/2020-12 schemas that declared `$vocabulary`) vocabulary gating.
pub(crate) fn is_allowed(ctx: &Context, keyword: &str) -> bool {
    if keyword_disallowed(ctx.draft, keyword) {
        return false;
    }
    if ctx.active_vocabulary.is_empty() {
        return true;
    }
    match ctx.draft {
        Draft::Draft202012 => referencing::vocabularies::is_keyword_allowed(
            keyword,
            &ctx.active_vocabulary,
            referencing::vocabularies::TABLE_2020_12,
        ),
        Draft::Draft201909 => referencing::vocabularies::is_keyword_allowed(
            keyword,
            &ctx.active_vocabulary,
            referencing::vocabularies::TABLE_2019_09,
        ),
        _ => true,
    }
}

/// Static per-draft deny-list: keywords introduced by a later draft than `draft`. This is
/// a deny-list rather than the allow-list `referencing::Draft` keeps internally (that one
/// is `pub(crate)` to its own crate) — grounded directly on §3's draft delta description.
fn keyword_disallowed(draft: Draft, keyword: &str) -> bool {
    const POST_DRAFT07: &[&str] = &[
        "dependentRequired",
        "dependentSchemas",
        "prefixItems",
        "$dynamicRef",
        "$dynamicAnchor",
        "unevaluatedProperties",
        "unevaluatedItems",
        "$recursiveRef",
        "$recursiveAnchor",
        "$anchor",
        "$vocabulary",
        "$defs",
    ];
    const DRAFT04_ONLY_MISSING: &[&str] =
        &["const", "contains", "propertyNames", "if", "then", "else"];
    match draft {
        Draft::Draft4 => {
            POST_DRAFT07.contains(&keyword) || DRAFT04_ONLY_MISSING.contains(&keyword)
        }
        Draft::Draft6 | Draft::Draft7 => POST_DRAFT07.contains(&keyword),
        Draft::Draft201909 => {
            matches!(keyword, "prefixItems" | "$dynamicRef" | "$dynamicAnchor" | "dependencies")
        }
        Draft::Draft202012 => matches!(keyword, "$recursiveRef" | "$recursiveAnchor" | "dependencies"),
    }
}

macro_rules! num_cmp {
    ($left:expr, $right:expr) => {
        if let Some(b) = $right.as_u64() {
            NumCmp::num_eq($left, b)
        } else if let Some(b) = $right.as_i64() {
            NumCmp::num_eq($left, b)
        } else {
            NumCmp::num_eq($left, $right.as_f64().expect("always valid"))
        }
    };
}

/// Deep structural equality (§4.G): object member order is irrelevant, array order is
/// significant, and numbers compare by mathematical value across representations, so
/// `1` IS equal to `1.0` — `serde_json::Number`'s own `PartialEq` compares by internal
/// variant and would say otherwise, so numbers are compared via `num_cmp` instead.
pub(crate) fn equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Null, Value::Null) => true,
        (Value::Number(a), Value::Number(b)) => {
            if let Some(a) = a.as_u64() {
                num_cmp!(a, b)
            } else if let Some(a) = a.as_i64() {
                num_cmp!(a, b)
            } else {
                let a = a.as_f64().expect("always valid");
                num_cmp!(a, b)
            }
        }
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| equals(a, b))
        }
        (Value::Object(a), Value::Object(b)) => equal_objects(a, b),
        (_, _) => false,
    }
}

fn equal_objects(a: &Map<String, Value>, b: &Map<String, Value>) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|((ka, va), (kb, vb))| ka == kb && equals(va, vb))
}

pub(crate) fn push_index(path: &JSONPointer, index: usize) -> JSONPointer {
    path.clone_with(index)
}

pub(crate) fn push_property(path: &JSONPointer, name: &str) -> JSONPointer {
    path.clone_with(name.to_string())
}

pub(crate) fn into_errors<'i>(errors: Vec<ValidationError<'i>>) -> ErrorIterator<'i> {
    Box::new(errors.into_iter())
}
