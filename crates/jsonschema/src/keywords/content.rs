//! `contentEncoding`/`contentMediaType` (annotation keywords that only assert when the
//! instance fails to decode/parse at all; `contentSchema` is left as an annotation-only
//! keyword — see `DESIGN.md`).
use base64::Engine;
use serde_json::{Map, Value};

use crate::{
    error::ValidationError,
    keywords::{is_allowed, Context},
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
    let Value::String(string) = instance else {
        return;
    };

    let decoded = if is_allowed(ctx, "contentEncoding") {
        match map.get("contentEncoding").and_then(Value::as_str) {
            Some(encoding @ "base64") => {
                match base64::engine::general_purpose::STANDARD.decode(string.as_bytes()) {
                    Ok(bytes) => Some(bytes),
                    Err(_) => {
                        errors.push(ValidationError::content_encoding(
                            schema_path.clone_with("contentEncoding"),
                            instance_path.clone(),
                            instance,
                            encoding,
                        ));
                        return;
                    }
                }
            }
            _ => None,
        }
    } else {
        None
    };

    if is_allowed(ctx, "contentMediaType") {
        if let Some(media_type @ "application/json") = map.get("contentMediaType").and_then(Value::as_str) {
            let bytes = decoded.unwrap_or_else(|| string.clone().into_bytes());
            if serde_json::from_slice::<Value>(&bytes).is_err() {
                errors.push(ValidationError::content_media_type(
                    schema_path.clone_with("contentMediaType"),
                    instance_path.clone(),
                    instance,
                    media_type,
                ));
            }
        }
    }
}
