//! Object assertions: `properties`/`patternProperties`/`additionalProperties`,
//! `required`/`dependencies`/`dependentRequired`/`dependentSchemas`, `propertyNames`,
//! `maxProperties`/`minProperties`, and `unevaluatedProperties` (2019-09+).
use ahash::AHashSet;
use referencing::Resolver;
use serde_json::{Map, Value};

use crate::{
    error::ValidationError,
    keywords::{evaluate, is_allowed, pattern::convert_regex, Annotations, Context, EvaluationAbort},
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
    let Value::Object(properties_of_instance) = instance else {
        return Ok(Annotations::default());
    };
    let mut annotations = Annotations::default();

    if is_allowed(ctx, "maxProperties") {
        if let Some(limit) = map.get("maxProperties").and_then(Value::as_u64) {
            if properties_of_instance.len() as u64 > limit {
                errors.push(ValidationError::max_properties(
                    schema_path.clone_with("maxProperties"),
                    instance_path.clone(),
                    instance,
                    limit,
                ));
            }
        }
    }
    if is_allowed(ctx, "minProperties") {
        if let Some(limit) = map.get("minProperties").and_then(Value::as_u64) {
            if (properties_of_instance.len() as u64) < limit {
                errors.push(ValidationError::min_properties(
                    schema_path.clone_with("minProperties"),
                    instance_path.clone(),
                    instance,
                    limit,
                ));
            }
        }
    }
    if is_allowed(ctx, "required") {
        if let Some(Value::Array(required)) = map.get("required") {
            for name in required {
                if let Some(name_str) = name.as_str() {
                    if !properties_of_instance.contains_key(name_str) {
                        errors.push(ValidationError::required(
                            schema_path.clone_with("required"),
                            instance_path.clone(),
                            instance,
                            name.clone(),
                        ));
                    }
                }
            }
        }
    }
    if is_allowed(ctx, "propertyNames") {
        if let Some(sub_schema) = map.get("propertyNames") {
            for key in properties_of_instance.keys() {
                let key_value = Value::String(key.clone());
                let mut scratch = Vec::new();
                evaluate(
                    ctx,
                    resolver,
                    sub_schema,
                    &key_value,
                    schema_path.clone_with("propertyNames"),
                    instance_path.clone_with(key.clone()),
                    depth + 1,
                    &mut scratch,
                )?;
                if let Some(first) = scratch.into_iter().next() {
                    errors.push(ValidationError::property_names(
                        schema_path.clone_with("propertyNames"),
                        instance_path.clone(),
                        instance,
                        first.into_owned(),
                    ));
                }
            }
        }
    }

    evaluate_dependencies(
        ctx, resolver, map, properties_of_instance, instance, schema_path, instance_path, depth, errors,
    )?;

    let mut matched: AHashSet<String> = AHashSet::default();

    if is_allowed(ctx, "properties") {
        if let Some(Value::Object(props)) = map.get("properties") {
            for (key, sub_schema) in props {
                if let Some(value) = properties_of_instance.get(key) {
                    matched.insert(key.clone());
                    let before = errors.len();
                    evaluate(
                        ctx,
                        resolver,
                        sub_schema,
                        value,
                        schema_path.clone_with("properties").clone_with(key.clone()),
                        instance_path.clone_with(key.clone()),
                        depth + 1,
                        errors,
                    )?;
                    if errors.len() == before {
                        annotations.properties.insert(key.clone());
                    }
                }
            }
        }
    }
    if is_allowed(ctx, "patternProperties") {
        if let Some(Value::Object(patterns)) = map.get("patternProperties") {
            for (raw_pattern, sub_schema) in patterns {
                let Ok(regex) = convert_regex(raw_pattern) else {
                    continue;
                };
                for (key, value) in properties_of_instance {
                    if regex.is_match(key).unwrap_or(false) {
                        matched.insert(key.clone());
                        let before = errors.len();
                        evaluate(
                            ctx,
                            resolver,
                            sub_schema,
                            value,
                            schema_path.clone_with("patternProperties").clone_with(raw_pattern.clone()),
                            instance_path.clone_with(key.clone()),
                            depth + 1,
                            errors,
                        )?;
                        if errors.len() == before {
                            annotations.properties.insert(key.clone());
                        }
                    }
                }
            }
        }
    }
    if is_allowed(ctx, "additionalProperties") {
        if let Some(additional) = map.get("additionalProperties") {
            let mut unexpected = Vec::new();
            for (key, value) in properties_of_instance {
                if matched.contains(key) {
                    continue;
                }
                match additional {
                    Value::Bool(false) => unexpected.push(key.clone()),
                    _ => {
                        let before = errors.len();
                        evaluate(
                            ctx,
                            resolver,
                            additional,
                            value,
                            schema_path.clone_with("additionalProperties"),
                            instance_path.clone_with(key.clone()),
                            depth + 1,
                            errors,
                        )?;
                        if errors.len() == before {
                            annotations.properties.insert(key.clone());
                        }
                    }
                }
            }
            if !unexpected.is_empty() {
                errors.push(ValidationError::additional_properties(
                    schema_path.clone_with("additionalProperties"),
                    instance_path.clone(),
                    instance,
                    unexpected,
                ));
            }
        }
    }

    Ok(annotations)
}

#[allow(clippy::too_many_arguments)]
fn evaluate_dependencies<'i>(
    ctx: &Context,
    resolver: &Resolver,
    map: &Map<String, Value>,
    properties_of_instance: &Map<String, Value>,
    instance: &'i Value,
    schema_path: &JSONPointer,
    instance_path: &JSONPointer,
    depth: usize,
    errors: &mut Vec<ValidationError<'i>>,
) -> Result<(), EvaluationAbort> {
    if is_allowed(ctx, "dependencies") {
        if let Some(Value::Object(dependencies)) = map.get("dependencies") {
            for (key, dependency) in dependencies {
                if !properties_of_instance.contains_key(key) {
                    continue;
                }
                match dependency {
                    Value::Array(required) => {
                        for name in required {
                            if let Some(name_str) = name.as_str() {
                                if !properties_of_instance.contains_key(name_str) {
                                    errors.push(ValidationError::dependent_required(
                                        schema_path.clone_with("dependencies").clone_with(key.clone()),
                                        instance_path.clone(),
                                        instance,
                                        name_str,
                                    ));
                                }
                            }
                        }
                    }
                    sub_schema => {
                        evaluate(
                            ctx,
                            resolver,
                            sub_schema,
                            instance,
                            schema_path.clone_with("dependencies").clone_with(key.clone()),
                            instance_path.clone(),
                            depth + 1,
                            errors,
                        )?;
                    }
                }
            }
        }
    }
    if is_allowed(ctx, "dependentRequired") {
        if let Some(Value::Object(dependent)) = map.get("dependentRequired") {
            for (key, required) in dependent {
                if !properties_of_instance.contains_key(key) {
                    continue;
                }
                if let Value::Array(required) = required {
                    for name in required {
                        if let Some(name_str) = name.as_str() {
                            if !properties_of_instance.contains_key(name_str) {
                                errors.push(ValidationError::dependent_required(
                                    schema_path.clone_with("dependentRequired").clone_with(key.clone()),
                                    instance_path.clone(),
                                    instance,
                                    name_str,
                                ));
                            }
                        }
                    }
                }
            }
        }
    }
    if is_allowed(ctx, "dependentSchemas") {
        if let Some(Value::Object(dependent)) = map.get("dependentSchemas") {
            for (key, sub_schema) in dependent {
                if !properties_of_instance.contains_key(key) {
                    continue;
                }
                evaluate(
                    ctx,
                    resolver,
                    sub_schema,
                    instance,
                    schema_path.clone_with("dependentSchemas").clone_with(key.clone()),
                    instance_path.clone(),
                    depth + 1,
                    errors,
                )?;
            }
        }
    }
    Ok(())
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
) -> Result<(), EvaluationAbort> {
    let Value::Object(properties_of_instance) = instance else {
        return Ok(());
    };
    if !is_allowed(ctx, "unevaluatedProperties") {
        return Ok(());
    }
    let Some(sub_schema) = map.get("unevaluatedProperties") else {
        return Ok(());
    };

    let mut unexpected = Vec::new();
    for (key, value) in properties_of_instance {
        if annotations.properties.contains(key) {
            continue;
        }
        match sub_schema {
            Value::Bool(false) => unexpected.push(key.clone()),
            _ => {
                evaluate(
                    ctx,
                    resolver,
                    sub_schema,
                    value,
                    schema_path.clone_with("unevaluatedProperties"),
                    instance_path.clone_with(key.clone()),
                    depth + 1,
                    errors,
                )?;
            }
        }
    }
    if !unexpected.is_empty() {
        errors.push(ValidationError::unevaluated_properties(
            schema_path.clone_with("unevaluatedProperties"),
            instance_path.clone(),
            instance,
            unexpected,
        ));
    }
    Ok(())
}
