//! RFC 6901 JSON Pointer traversal.
use serde_json::Value;
use std::borrow::Cow;

use crate::Error;

/// Resolves a JSON Pointer (the part after `#`, including the leading `/`, or empty for the
/// whole document) against `root`.
///
/// # Errors
///
/// Returns [`Error::PointerToNowhere`] if any segment does not exist, or if an array segment
/// is not a valid index.
pub fn resolve<'a>(root: &'a Value, pointer: &str) -> Result<&'a Value, Error> {
    if pointer.is_empty() {
        return Ok(root);
    }
    let pointer = pointer.strip_prefix('/').unwrap_or(pointer);
    let mut current = root;
    for raw_segment in pointer.split('/') {
        let segment = unescape_segment(raw_segment);
        current = step(current, segment.as_ref(), pointer)?;
    }
    Ok(current)
}

fn step<'a>(current: &'a Value, segment: &str, full_pointer: &str) -> Result<&'a Value, Error> {
    match current {
        Value::Array(items) => {
            let index: usize = segment
                .parse()
                .map_err(|_| Error::pointer_to_nowhere(full_pointer))?;
            items
                .get(index)
                .ok_or_else(|| Error::pointer_to_nowhere(full_pointer))
        }
        Value::Object(map) => map
            .get(segment)
            .ok_or_else(|| Error::pointer_to_nowhere(full_pointer)),
        _ => Err(Error::pointer_to_nowhere(full_pointer)),
    }
}

/// Unescapes `~1` to `/` and `~0` to `~`, in that precedence order, per RFC 6901 §4.
#[must_use]
pub fn unescape_segment(segment: &str) -> Cow<'_, str> {
    if !segment.contains('~') {
        return Cow::Borrowed(segment);
    }
    let mut buffer = String::with_capacity(segment.len());
    let mut chars = segment.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '~' {
            match chars.peek() {
                Some('0') => {
                    buffer.push('~');
                    chars.next();
                }
                Some('1') => {
                    buffer.push('/');
                    chars.next();
                }
                _ => buffer.push('~'),
            }
        } else {
            buffer.push(ch);
        }
    }
    Cow::Owned(buffer)
}

/// Escapes `~` to `~0` and `/` to `~1`, for building pointers from path components.
#[must_use]
pub fn escape_segment(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn root_pointer() {
        let value = json!({"a": 1});
        assert_eq!(resolve(&value, "").unwrap(), &value);
    }

    #[test]
    fn nested_pointer() {
        let value = json!({"a": {"b": [1, 2, 3]}});
        assert_eq!(resolve(&value, "/a/b/1").unwrap(), &json!(2));
    }

    #[test]
    fn escaped_segments() {
        let value = json!({"a/b": {"c~d": 42}});
        assert_eq!(resolve(&value, "/a~1b/c~0d").unwrap(), &json!(42));
    }

    #[test]
    fn missing_segment_errors() {
        let value = json!({"a": 1});
        assert!(resolve(&value, "/b").is_err());
    }

    #[test]
    fn roundtrip_escape() {
        assert_eq!(escape_segment("a/b~c"), "a~1b~0c");
        assert_eq!(unescape_segment("a~1b~0c"), "a/b~c");
    }
}
