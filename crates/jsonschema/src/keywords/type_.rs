//! The `type` keyword: single name or an array of names.
use referencing::Draft;
use serde_json::Value;

use crate::{
    error::ValidationError,
    keywords::Context,
    paths::JSONPointer,
    primitive_type::{PrimitiveType, PrimitiveTypesBitMap},
};

pub(crate) fn evaluate<'i>(
    ctx: &Context,
    value: &Value,
    instance: &'i Value,
    schema_path: &JSONPointer,
    instance_path: &JSONPointer,
    errors: &mut Vec<ValidationError<'i>>,
) {
    match value {
        Value::String(name) => {
            if let Ok(expected) = PrimitiveType::try_from(name.as_str()) {
                if !matches_type(ctx.draft, expected, instance) {
                    errors.push(ValidationError::single_type_error(
                        schema_path.clone_with("type"),
                        instance_path.clone(),
                        instance,
                        expected,
                    ));
                }
            }
        }
        Value::Array(names) => {
            let mut bitmap = PrimitiveTypesBitMap::new();
            for name in names {
                if let Some(name) = name.as_str() {
                    if let Ok(primitive) = PrimitiveType::try_from(name) {
                        bitmap |= primitive;
                    }
                }
            }
            if !bitmap.into_iter().any(|expected| matches_type(ctx.draft, expected, instance)) {
                errors.push(ValidationError::multiple_type_error(
                    schema_path.clone_with("type"),
                    instance_path.clone(),
                    instance,
                    bitmap,
                ));
            }
        }
        _ => {}
    }
}

/// An `integer` match additionally accepts a JSON number with a zero fractional part from
/// draft 06 onward; draft 04 requires the representation to already be an integer.
fn matches_type(draft: Draft, expected: PrimitiveType, instance: &Value) -> bool {
    match (expected, instance) {
        (PrimitiveType::Integer, Value::Number(n)) => {
            n.is_i64()
                || n.is_u64()
                || (draft > Draft::Draft4 && n.as_f64().is_some_and(|f| f.fract() == 0.0))
        }
        _ => PrimitiveType::from(instance) == expected,
    }
}
