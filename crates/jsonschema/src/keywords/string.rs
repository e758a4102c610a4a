//! String assertions: `maxLength`, `minLength`, `pattern`, and `format` (draft/vocabulary
//! dependent assertion-vs-annotation split).
use referencing::Draft;
use serde_json::{Map, Value};

use crate::{
    error::ValidationError,
    format,
    keywords::{is_allowed, pattern::convert_regex, Context},
    paths::JSONPointer,
};

pub(crate) fn evaluate<'i>(
    ctx: &Context,
    map: &Map<String, Value>,
    instance: &'i Value,
    schema_path: &JSONPointer,
    instance_path: &JSONPointer,
    errors: &mut Vec<ValidationError<'i>>,
) {
    let Value::String(item) = instance else {
        return;
    };

    if is_allowed(ctx, "maxLength") {
        if let Some(limit) = map.get("maxLength").and_then(Value::as_u64) {
            if u64::try_from(bytecount::num_chars(item.as_bytes())).unwrap_or(u64::MAX) > limit {
                errors.push(ValidationError::max_length(
                    schema_path.clone_with("maxLength"),
                    instance_path.clone(),
                    instance,
                    limit,
                ));
            }
        }
    }
    if is_allowed(ctx, "minLength") {
        if let Some(limit) = map.get("minLength").and_then(Value::as_u64) {
            if u64::try_from(bytecount::num_chars(item.as_bytes())).unwrap_or(0) < limit {
                errors.push(ValidationError::min_length(
                    schema_path.clone_with("minLength"),
                    instance_path.clone(),
                    instance,
                    limit,
                ));
            }
        }
    }
    if is_allowed(ctx, "pattern") {
        if let Some(Value::String(raw)) = map.get("pattern") {
            if let Ok(re) = convert_regex(raw) {
                if !re.is_match(item).unwrap_or(false) {
                    errors.push(ValidationError::pattern(
                        schema_path.clone_with("pattern"),
                        instance_path.clone(),
                        instance,
                        raw.clone(),
                    ));
                }
            }
        }
    }
    if is_allowed(ctx, "format") && should_assert_format(ctx) {
        if let Some(Value::String(name)) = map.get("format") {
            if let Some(predicate) = ctx.options.formats.get(name.as_str()) {
                if !predicate(item) {
                    errors.push(ValidationError::format(
                        schema_path.clone_with("format"),
                        instance_path.clone(),
                        instance,
                        name.clone(),
                    ));
                }
            } else if let Some(predicate) = format::builtin(name) {
                if !predicate(item) {
                    errors.push(ValidationError::format(
                        schema_path.clone_with("format"),
                        instance_path.clone(),
                        instance,
                        name.clone(),
                    ));
                }
            } else if !ctx.options.ignore_unknown_formats {
                errors.push(ValidationError::format(
                    schema_path.clone_with("format"),
                    instance_path.clone(),
                    instance,
                    name.clone(),
                ));
            }
        }
    }
}

/// Whether `format` is an assertion (failure is an error) rather than a pure annotation.
///
/// Drafts 04/06/07 and 2019-09 only assert when the caller opted in via
/// [`crate::ValidationOptions::with_format_assertions`]; 2020-12 additionally asserts when
/// the active metaschema declares the `format-assertion` vocabulary.
fn should_assert_format(ctx: &Context) -> bool {
    if let Some(explicit) = ctx.options.validate_formats {
        return explicit;
    }
    match ctx.draft {
        Draft::Draft4 | Draft::Draft6 | Draft::Draft7 => ctx.options.format_assertion,
        Draft::Draft201909 => ctx.options.format_assertion,
        Draft::Draft202012 => {
            ctx.options.format_assertion
                || ctx
                    .active_vocabulary
                    .contains(referencing::vocabularies::uris::FORMAT_ASSERTION_2020)
        }
    }
}
