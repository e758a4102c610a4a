//! Schema composition: `allOf`/`anyOf`/`oneOf`/`not` and the `if`/`then`/`else` conditional.
use referencing::Resolver;
use serde_json::{Map, Value};

use crate::{
    error::ValidationError,
    keywords::{evaluate, is_allowed, Annotations, Context, EvaluationAbort},
    paths::JSONPointer,
};

#[allow(clippy::too_many_arguments)]
pub(crate) fn evaluate<'i>(
    ctx: &Context,
    resolver: &Resolver,
    map: &Map<String, Value>,
    instance: &'i Value,
    schema_path: &JSONPointer,
    instance_path: &JSONPointer,
    depth: usize,
    errors: &mut Vec<ValidationError<'i>>,
) -> Result<Annotations, EvaluationAbort> {
    let mut annotations = Annotations::default();

    if is_allowed(ctx, "allOf") {
        if let Some(Value::Array(branches)) = map.get("allOf") {
            for (index, sub_schema) in branches.iter().enumerate() {
                let before = errors.len();
                let sub = evaluate(
                    ctx,
                    resolver,
                    sub_schema,
                    instance,
                    schema_path.clone_with("allOf").clone_with(index),
                    instance_path.clone(),
                    depth + 1,
                    errors,
                )?;
                if errors.len() == before {
                    annotations.merge(sub);
                }
            }
        }
    }

    if is_allowed(ctx, "anyOf") {
        if let Some(Value::Array(branches)) = map.get("anyOf") {
            let mut any_passed = false;
            for (index, sub_schema) in branches.iter().enumerate() {
                let mut scratch = Vec::new();
                let sub = evaluate(
                    ctx,
                    resolver,
                    sub_schema,
                    instance,
                    schema_path.clone_with("anyOf").clone_with(index),
                    instance_path.clone(),
                    depth + 1,
                    &mut scratch,
                )?;
                if scratch.is_empty() {
                    any_passed = true;
                    annotations.merge(sub);
                }
            }
            if !any_passed {
                errors.push(ValidationError::any_of(
                    schema_path.clone_with("anyOf"),
                    instance_path.clone(),
                    instance,
                ));
            }
        }
    }

    if is_allowed(ctx, "oneOf") {
        if let Some(Value::Array(branches)) = map.get("oneOf") {
            let mut winner = None;
            let mut pass_count = 0;
            for (index, sub_schema) in branches.iter().enumerate() {
                let mut scratch = Vec::new();
                let sub = evaluate(
                    ctx,
                    resolver,
                    sub_schema,
                    instance,
                    schema_path.clone_with("oneOf").clone_with(index),
                    instance_path.clone(),
                    depth + 1,
                    &mut scratch,
                )?;
                if scratch.is_empty() {
                    pass_count += 1;
                    if winner.is_none() {
                        winner = Some(sub);
                    }
                }
            }
            match pass_count {
                0 => errors.push(ValidationError::one_of_not_valid(
                    schema_path.clone_with("oneOf"),
                    instance_path.clone(),
                    instance,
                )),
                1 => {
                    if let Some(sub) = winner {
                        annotations.merge(sub);
                    }
                }
                _ => errors.push(ValidationError::one_of_multiple_valid(
                    schema_path.clone_with("oneOf"),
                    instance_path.clone(),
                    instance,
                )),
            }
        }
    }

    if is_allowed(ctx, "not") {
        if let Some(sub_schema) = map.get("not") {
            let mut scratch = Vec::new();
            evaluate(
                ctx,
                resolver,
                sub_schema,
                instance,
                schema_path.clone_with("not"),
                instance_path.clone(),
                depth + 1,
                &mut scratch,
            )?;
            if scratch.is_empty() {
                errors.push(ValidationError::not(
                    schema_path.clone_with("not"),
                    instance_path.clone(),
                    instance,
                    sub_schema.clone(),
                ));
            }
        }
    }

    if is_allowed(ctx, "if") {
        if let Some(if_schema) = map.get("if") {
            let mut if_errors = Vec::new();
            let if_annotations = evaluate(
                ctx,
                resolver,
                if_schema,
                instance,
                schema_path.clone_with("if"),
                instance_path.clone(),
                depth + 1,
                &mut if_errors,
            )?;
            if if_errors.is_empty() {
                annotations.merge(if_annotations);
                if let Some(then_schema) = map.get("then") {
                    let sub = evaluate(
                        ctx,
                        resolver,
                        then_schema,
                        instance,
                        schema_path.clone_with("then"),
                        instance_path.clone(),
                        depth + 1,
                        errors,
                    )?;
                    annotations.merge(sub);
                }
            } else if let Some(else_schema) = map.get("else") {
                let sub = evaluate(
                    ctx,
                    resolver,
                    else_schema,
                    instance,
                    schema_path.clone_with("else"),
                    instance_path.clone(),
                    depth + 1,
                    errors,
                )?;
                annotations.merge(sub);
            }
        }
    }

    Ok(annotations)
}
