//! The `enum` and `const` keywords: deep equality against one or many candidates.
use serde_json::Value;

use crate::{error::ValidationError, keywords::equals, paths::JSONPointer};

pub(crate) fn evaluate_enum<'i>(
    value: &Value,
    instance: &'i Value,
    schema_path: &JSONPointer,
    instance_path: &JSONPointer,
    errors: &mut Vec<ValidationError<'i>>,
) {
    let Some(options) = value.as_array() else {
        return;
    };
    if !options.iter().any(|option| equals(option, instance)) {
        errors.push(ValidationError::enumeration(
            schema_path.clone_with("enum"),
            instance_path.clone(),
            instance,
            value,
        ));
    }
}

pub(crate) fn evaluate_const<'i>(
    value: &Value,
    instance: &'i Value,
    schema_path: &JSONPointer,
    instance_path: &JSONPointer,
    errors: &mut Vec<ValidationError<'i>>,
) {
    if !equals(value, instance) {
        errors.push(ValidationError::constant(
            schema_path.clone_with("const"),
            instance_path.clone(),
            instance,
            value,
        ));
    }
}
