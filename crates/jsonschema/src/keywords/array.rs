//! Array assertions: `items`/`prefixItems`/`additionalItems` (the shape of `items` is
//! draft-dependent — see §4.G), `contains`/`minContains`/`maxContains`, `maxItems`/
//! `minItems`, `uniqueItems`, and `unevaluatedItems` (2019-09+).
use referencing::{Draft, Resolver};
use serde_json::{Map, Value};

use crate::{
    error::ValidationError,
    keywords::{equals, evaluate, is_allowed, Annotations, Context, EvaluationAbort},
    paths::JSONPointer,
};

#[allow(clippy::too_many_arguments, clippy::too_many_lines)]
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
    let Value::Array(items) = instance else {
        return Ok(Annotations::default());
    };
    let mut annotations = Annotations::default();

    if is_allowed(ctx, "maxItems") {
        if let Some(limit) = map.get("maxItems").and_then(Value::as_u64) {
            if items.len() as u64 > limit {
                errors.push(ValidationError::max_items(
                    schema_path.clone_with("maxItems"),
                    instance_path.clone(),
                    instance,
                    limit,
                ));
            }
        }
    }
    if is_allowed(ctx, "minItems") {
        if let Some(limit) = map.get("minItems").and_then(Value::as_u64) {
            if (items.len() as u64) < limit {
                errors.push(ValidationError::min_items(
                    schema_path.clone_with("minItems"),
                    instance_path.clone(),
                    instance,
                    limit,
                ));
            }
        }
    }
    if is_allowed(ctx, "uniqueItems") {
        if let Some(Value::Bool(true)) = map.get("uniqueItems") {
            if has_duplicates(items) {
                errors.push(ValidationError::unique_items(
                    schema_path.clone_with("uniqueItems"),
                    instance_path.clone(),
                    instance,
                ));
            }
        }
    }

    if ctx.draft == Draft::Draft202012 {
        let prefix_len = evaluate_prefix_items(
            ctx, resolver, map, items, schema_path, instance_path, depth, errors, &mut annotations,
        )?;
        if is_allowed(ctx, "items") {
            if let Some(sub_schema) = map.get("items") {
                for (index, item) in items.iter().enumerate().skip(prefix_len) {
                    let before = errors.len();
                    evaluate(
                        ctx,
                        resolver,
                        sub_schema,
                        item,
                        schema_path.clone_with("items"),
                        instance_path.clone_with(index),
                        depth + 1,
                        errors,
                    )?;
                    if errors.len() == before {
                        annotations.items.insert(index);
                    }
                }
            }
        }
    } else if is_allowed(ctx, "items") {
        match map.get("items") {
            Some(Value::Array(schemas)) => {
                for (index, sub_schema) in schemas.iter().enumerate() {
                    if let Some(item) = items.get(index) {
                        let before = errors.len();
                        evaluate(
                            ctx,
                            resolver,
                            sub_schema,
                            item,
                            schema_path.clone_with("items").clone_with(index),
                            instance_path.clone_with(index),
                            depth + 1,
                            errors,
                        )?;
                        if errors.len() == before {
                            annotations.items.insert(index);
                        }
                    }
                }
                let tuple_len = schemas.len();
                if is_allowed(ctx, "additionalItems") {
                    if let Some(additional) = map.get("additionalItems") {
                        for (index, item) in items.iter().enumerate().skip(tuple_len) {
                            match additional {
                                Value::Bool(false) => {
                                    errors.push(ValidationError::additional_items(
                                        schema_path.clone_with("additionalItems"),
                                        instance_path.clone(),
                                        instance,
                                        tuple_len,
                                    ));
                                    break;
                                }
                                _ => {
                                    let before = errors.len();
                                    evaluate(
                                        ctx,
                                        resolver,
                                        additional,
                                        item,
                                        schema_path.clone_with("additionalItems"),
                                        instance_path.clone_with(index),
                                        depth + 1,
                                        errors,
                                    )?;
                                    if errors.len() == before {
                                        annotations.items.insert(index);
                                    }
                                }
                            }
                        }
                    }
                }
            }
            Some(sub_schema) => {
                for (index, item) in items.iter().enumerate() {
                    let before = errors.len();
                    evaluate(
                        ctx,
                        resolver,
                        sub_schema,
                        item,
                        schema_path.clone_with("items"),
                        instance_path.clone_with(index),
                        depth + 1,
                        errors,
                    )?;
                    if errors.len() == before {
                        annotations.items.insert(index);
                    }
                }
            }
            None => {}
        }
    }

    if is_allowed(ctx, "contains") {
        evaluate_contains(ctx, resolver, map, items, instance, schema_path, instance_path, depth, errors, &mut annotations)?;
    }

    Ok(annotations)
}

#[allow(clippy::too_many_arguments)]
fn evaluate_prefix_items<'i>(
    ctx: &Context,
    resolver: &Resolver,
    map: &Map<String, Value>,
    items: &'i [Value],
    schema_path: &JSONPointer,
    instance_path: &JSONPointer,
    depth: usize,
    errors: &mut Vec<ValidationError<'i>>,
    annotations: &mut Annotations,
) -> Result<usize, EvaluationAbort> {
    if !is_allowed(ctx, "prefixItems") {
        return Ok(0);
    }
    let Some(Value::Array(schemas)) = map.get("prefixItems") else {
        return Ok(0);
    };
    for (index, sub_schema) in schemas.iter().enumerate() {
        if let Some(item) = items.get(index) {
            let before = errors.len();
            evaluate(
                ctx,
                resolver,
                sub_schema,
                item,
                schema_path.clone_with("prefixItems").clone_with(index),
                instance_path.clone_with(index),
                depth + 1,
                errors,
            )?;
            if errors.len() == before {
                annotations.items.insert(index);
            }
        }
    }
    Ok(schemas.len())
}

#[allow(clippy::too_many_arguments)]
fn evaluate_contains<'i>(
    ctx: &Context,
    resolver: &Resolver,
    map: &Map<String, Value>,
    items: &'i [Value],
    instance: &'i Value,
    schema_path: &JSONPointer,
    instance_path: &JSONPointer,
    depth: usize,
    errors: &mut Vec<ValidationError<'i>>,
    annotations: &mut Annotations,
) -> Result<(), EvaluationAbort> {
    let Some(sub_schema) = map.get("contains") else {
        return Ok(());
    };
    let min_contains = map.get("minContains").and_then(Value::as_u64).unwrap_or(1) as usize;
    let max_contains = map.get("maxContains").and_then(Value::as_u64).map(|v| v as usize);

    let mut matched = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let mut scratch = Vec::new();
        evaluate(
            ctx,
            resolver,
            sub_schema,
            item,
            schema_path.clone_with("contains"),
            instance_path.clone_with(index),
            depth + 1,
            &mut scratch,
        )?;
        if scratch.is_empty() {
            matched.push(index);
        }
    }
    let count = matched.len();

    if count < min_contains {
        if map.get("minContains").is_some() {
            errors.push(ValidationError::min_contains(
                schema_path.clone_with("minContains"),
                instance_path.clone(),
                instance,
                min_contains,
            ));
        } else {
            errors.push(ValidationError::contains(
                schema_path.clone_with("contains"),
                instance_path.clone(),
                instance,
            ));
        }
    }
    if let Some(max) = max_contains {
        if count > max {
            errors.push(ValidationError::max_contains(
                schema_path.clone_with("maxContains"),
                instance_path.clone(),
                instance,
                max,
            ));
        }
    }
    for index in matched {
        annotations.items.insert(index);
    }
    Ok(())
}

fn has_duplicates(items: &[Value]) -> bool {
    for (i, a) in items.iter().enumerate() {
        for b in &items[i + 1..] {
            if equals(a, b) {
                return true;
            }
        }
    }
    false
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn evaluate_unevaluated<'i>(
    ctx: &Context,
    resolver: &Resolver,
    map: &Map<String, Value>,
    instance: &'i Value,
    schema_path: &JSONPointer,
    instance_path: &JSONPointer,
    depth: usize,
    annotations: &Annotations,
    errors: &mut Vec<ValidationError<'i>>,
) -> Result<Annotations, EvaluationAbort> {
    let Value::Array(items) = instance else {
        return Ok(Annotations::default());
    };
    if !is_allowed(ctx, "unevaluatedItems") {
        return Ok(Annotations::default());
    }
    let Some(sub_schema) = map.get("unevaluatedItems") else {
        return Ok(Annotations::default());
    };

    let mut claimed = Annotations::default();
    let mut unexpected = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if annotations.items.contains(&index) {
            continue;
        }
        match sub_schema {
            Value::Bool(false) => unexpected.push(index),
            _ => {
                let before = errors.len();
                evaluate(
                    ctx,
                    resolver,
                    sub_schema,
                    item,
                    schema_path.clone_with("unevaluatedItems"),
                    instance_path.clone_with(index),
                    depth + 1,
                    errors,
                )?;
                if errors.len() == before {
                    claimed.items.insert(index);
                }
            }
        }
    }
    if !unexpected.is_empty() {
        errors.push(ValidationError::unevaluated_items(
            schema_path.clone_with("unevaluatedItems"),
            instance_path.clone(),
            instance,
            unexpected,
        ));
    }
    Ok(claimed)
}
