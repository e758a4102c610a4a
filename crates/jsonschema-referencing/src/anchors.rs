use serde_json::Value;

use crate::Draft;

/// A named anchor discovered while indexing a resource, together with the JSON Pointer
/// (relative to that resource's root) where it lives and whether it was declared with
/// `$dynamicAnchor` (as opposed to a plain `$anchor`, or a pre-2019-09 `id` fragment).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    name: String,
    pointer: String,
    dynamic: bool,
}

impl Anchor {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
    #[must_use]
    pub fn pointer(&self) -> &str {
        &self.pointer
    }
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }
}

/// Walks `contents` (the root of a single resource) collecting every `$anchor`/
/// `$dynamicAnchor` (2019-09+) or fragment-style `id: "#name"` (04/06/07) declaration,
/// without descending into nested resources (those are indexed independently once the
/// registry discovers them as subresources via their own `$id`).
pub(crate) fn discover(draft: Draft, contents: &Value) -> Vec<Anchor> {
    let mut found = Vec::new();
    walk(draft, contents, String::new(), true, &mut found);
    found
}

fn walk(draft: Draft, node: &Value, pointer: String, is_root: bool, out: &mut Vec<Anchor>) {
    let Some(object) = node.as_object() else {
        return;
    };
    if !is_root && object.contains_key(draft.id_keyword()) {
        // A new resource starts here; it will be indexed on its own.
        return;
    }
    if draft.supports_modern_anchors() {
        if let Some(name) = object.get("$anchor").and_then(Value::as_str) {
            out.push(Anchor {
                name: name.to_string(),
                pointer: pointer.clone(),
                dynamic: false,
            });
        }
        if let Some(name) = object.get("$dynamicAnchor").and_then(Value::as_str) {
            out.push(Anchor {
                name: name.to_string(),
                pointer: pointer.clone(),
                dynamic: true,
            });
        }
    } else if let Some(id) = object.get(draft.id_keyword()).and_then(Value::as_str) {
        if let Some(name) = id.strip_prefix('#') {
            if !name.is_empty() {
                out.push(Anchor {
                    name: name.to_string(),
                    pointer: pointer.clone(),
                    dynamic: false,
                });
            }
        }
    }
    for (key, value) in object {
        let next_pointer = format!("{pointer}/{}", crate::pointer::escape_segment(key));
        match value {
            Value::Object(_) => walk(draft, value, next_pointer, false, out),
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    walk(draft, item, format!("{next_pointer}/{index}"), false, out);
                }
            }
            _ => {}
        }
    }
}
