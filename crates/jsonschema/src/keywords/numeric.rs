//! Numeric assertions: `multipleOf`, `maximum`/`minimum`, and their `exclusive*` siblings.
//!
//! Draft 4 is the odd one out: `exclusiveMaximum`/`exclusiveMinimum` are booleans that
//! merely toggle whether the sibling `maximum`/`minimum` comparison is strict. Draft 6
//! onward turns them into independent numeric limits.
use fraction::{BigFraction, BigUint};
use num_cmp::NumCmp;
use referencing::Draft;
use serde_json::{Map, Number, Value};

use crate::{error::ValidationError, keywords::{is_allowed, Context}, paths::JSONPointer};

pub(crate) fn evaluate<'i>(
    ctx: &Context,
    map: &Map<String, Value>,
    instance: &'i Value,
    schema_path: &JSONPointer,
    instance_path: &JSONPointer,
    errors: &mut Vec<ValidationError<'i>>,
) {
    let Value::Number(item) = instance else {
        return;
    };

    if is_allowed(ctx, "multipleOf") {
        if let Some(Value::Number(multiple_of)) = map.get("multipleOf") {
            if !is_multiple_of(item, multiple_of) {
                errors.push(ValidationError::multiple_of(
                    schema_path.clone_with("multipleOf"),
                    instance_path.clone(),
                    instance,
                    multiple_of.as_f64().unwrap_or(f64::NAN),
                ));
            }
        }
    }

    if ctx.draft == Draft::Draft4 {
        evaluate_legacy(map, item, instance, schema_path, instance_path, errors);
        return;
    }

    if is_allowed(ctx, "maximum") {
        if let Some(Value::Number(limit)) = map.get("maximum") {
            if num_gt(item, limit) {
                errors.push(ValidationError::maximum(
                    schema_path.clone_with("maximum"),
                    instance_path.clone(),
                    instance,
                    Value::Number(limit.clone()),
                ));
            }
        }
    }
    if is_allowed(ctx, "exclusiveMaximum") {
        if let Some(Value::Number(limit)) = map.get("exclusiveMaximum") {
            if !num_lt(item, limit) {
                errors.push(ValidationError::exclusive_maximum(
                    schema_path.clone_with("exclusiveMaximum"),
                    instance_path.clone(),
                    instance,
                    Value::Number(limit.clone()),
                ));
            }
        }
    }
    if is_allowed(ctx, "minimum") {
        if let Some(Value::Number(limit)) = map.get("minimum") {
            if num_lt(item, limit) {
                errors.push(ValidationError::minimum(
                    schema_path.clone_with("minimum"),
                    instance_path.clone(),
                    instance,
                    Value::Number(limit.clone()),
                ));
            }
        }
    }
    if is_allowed(ctx, "exclusiveMinimum") {
        if let Some(Value::Number(limit)) = map.get("exclusiveMinimum") {
            if !num_gt(item, limit) {
                errors.push(ValidationError::exclusive_minimum(
                    schema_path.clone_with("exclusiveMinimum"),
                    instance_path.clone(),
                    instance,
                    Value::Number(limit.clone()),
                ));
            }
        }
    }
}

/// Draft 4's `maximum`/`minimum`, whose strictness is toggled by a same-named boolean
/// `exclusiveMaximum`/`exclusiveMinimum` sibling rather than an independent numeric limit.
fn evaluate_legacy<'i>(
    map: &Map<String, Value>,
    item: &Number,
    instance: &'i Value,
    schema_path: &JSONPointer,
    instance_path: &JSONPointer,
    errors: &mut Vec<ValidationError<'i>>,
) {
    if let Some(Value::Number(limit)) = map.get("maximum") {
        let exclusive = matches!(map.get("exclusiveMaximum"), Some(Value::Bool(true)));
        let violated = if exclusive { !num_lt(item, limit) } else { num_gt(item, limit) };
        if violated {
            errors.push(ValidationError::maximum(
                schema_path.clone_with("maximum"),
                instance_path.clone(),
                instance,
                Value::Number(limit.clone()),
            ));
        }
    }
    if let Some(Value::Number(limit)) = map.get("minimum") {
        let exclusive = matches!(map.get("exclusiveMinimum"), Some(Value::Bool(true)));
        let violated = if exclusive { !num_gt(item, limit) } else { num_lt(item, limit) };
        if violated {
            errors.push(ValidationError::minimum(
                schema_path.clone_with("minimum"),
                instance_path.clone(),
                instance,
                Value::Number(limit.clone()),
            ));
        }
    }
}

fn is_multiple_of(item: &Number, multiple_of: &Number) -> bool {
    let divisor = multiple_of.as_f64().unwrap_or(f64::NAN);
    let item_f = item.as_f64().unwrap_or(f64::NAN);
    if divisor.fract() == 0. {
        // Fast path: an integer divisor can never divide a fractional value evenly.
        item_f.fract() == 0. && (item_f % divisor) == 0.
    } else {
        let remainder = (item_f / divisor) % 1.;
        if remainder.is_nan() {
            let fraction = BigFraction::from(item_f) / BigFraction::from(divisor);
            if let Some(denom) = fraction.denom() {
                denom == &BigUint::from(1_u8)
            } else {
                true
            }
        } else {
            remainder.abs() < f64::EPSILON
        }
    }
}

fn num_gt(instance: &Number, limit: &Number) -> bool {
    dispatch_limit(limit, instance, NumCmp::num_gt)
}

fn num_lt(instance: &Number, limit: &Number) -> bool {
    dispatch_limit(limit, instance, NumCmp::num_lt)
}

/// Picks the narrowest representation of `limit` (u64, then i64, then f64) and compares
/// `instance`'s own narrowest representation against it via `op`, avoiding precision loss
/// from forcing both sides through `f64` when both fit in an integer type.
fn dispatch_limit<F>(limit: &Number, instance: &Number, op: F) -> bool
where
    F: Fn(DispatchOperand, DispatchOperand) -> bool,
{
    if let Some(limit) = limit.as_u64() {
        op(DispatchOperand::from(instance), DispatchOperand::U64(limit))
    } else if let Some(limit) = limit.as_i64() {
        op(DispatchOperand::from(instance), DispatchOperand::I64(limit))
    } else {
        let limit = limit.as_f64().unwrap_or(f64::NAN);
        op(DispatchOperand::from(instance), DispatchOperand::F64(limit))
    }
}

#[derive(Clone, Copy)]
enum DispatchOperand {
    U64(u64),
    I64(i64),
    F64(f64),
}

impl From<&Number> for DispatchOperand {
    fn from(value: &Number) -> Self {
        if let Some(v) = value.as_u64() {
            DispatchOperand::U64(v)
        } else if let Some(v) = value.as_i64() {
            DispatchOperand::I64(v)
        } else {
            DispatchOperand::F64(value.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl NumCmp<DispatchOperand> for DispatchOperand {
    fn num_cmp(self, other: DispatchOperand) -> Option<std::cmp::Ordering> {
        match (self, other) {
            (DispatchOperand::U64(a), DispatchOperand::U64(b)) => NumCmp::num_cmp(a, b),
            (DispatchOperand::U64(a), DispatchOperand::I64(b)) => NumCmp::num_cmp(a, b),
            (DispatchOperand::U64(a), DispatchOperand::F64(b)) => NumCmp::num_cmp(a, b),
            (DispatchOperand::I64(a), DispatchOperand::U64(b)) => NumCmp::num_cmp(a, b),
            (DispatchOperand::I64(a), DispatchOperand::I64(b)) => NumCmp::num_cmp(a, b),
            (DispatchOperand::I64(a), DispatchOperand::F64(b)) => NumCmp::num_cmp(a, b),
            (DispatchOperand::F64(a), DispatchOperand::U64(b)) => NumCmp::num_cmp(a, b),
            (DispatchOperand::F64(a), DispatchOperand::I64(b)) => NumCmp::num_cmp(a, b),
            (DispatchOperand::F64(a), DispatchOperand::F64(b)) => NumCmp::num_cmp(a, b),
        }
    }
}
