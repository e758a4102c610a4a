use serde_json::Value;

use crate::{
    anchors::{self, Anchor},
    specification::SubresourceLocation,
    Draft, Error,
};

/// A document with a concrete interpretation under a JSON Schema specification: the raw
/// JSON value plus the draft that governs how `$id`, `$ref`, and anchors inside it behave.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    contents: Value,
    draft: Draft,
}

impl Resource {
    #[must_use]
    pub(crate) fn new(contents: Value, draft: Draft) -> Self {
        Self { contents, draft }
    }

    /// Creates a resource, detecting its draft from `$schema`, falling back to
    /// [`Draft::default`] when it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSpecification`] if `$schema` names an unrecognized draft.
    pub fn from_contents(contents: Value) -> Result<Resource, Error> {
        Self::from_contents_and_draft(contents, Draft::default())
    }

    /// Creates a resource, detecting its draft from `$schema` and falling back to `draft`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSpecification`] if `$schema` names an unrecognized draft.
    pub fn from_contents_and_draft(contents: Value, draft: Draft) -> Result<Resource, Error> {
        let draft = draft.detect(&contents)?;
        Ok(Resource::new(contents, draft))
    }

    #[must_use]
    pub fn contents(&self) -> &Value {
        &self.contents
    }

    #[must_use]
    pub fn draft(&self) -> Draft {
        self.draft
    }

    /// This resource's own `$id`/`id`, if declared at its root.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.draft.id_of(&self.contents)
    }

    /// Anchors (`$anchor`, `$dynamicAnchor`, or draft 04/06/07 `id`-fragment anchors)
    /// declared anywhere in this resource, excluding nested subresources.
    #[must_use]
    pub(crate) fn anchors(&self) -> Vec<Anchor> {
        anchors::discover(self.draft, &self.contents)
    }

    /// Nested schema documents that declare their own `$id`/`id` and thus form new
    /// resources, discovered eagerly so the registry can index them by their own URI.
    pub(crate) fn subresources(&self) -> Vec<Resource> {
        let mut found = Vec::new();
        collect_subresources(self.draft, &self.contents, true, &mut found);
        found
    }

    /// Resolves a JSON Pointer (beginning with `/`, or empty for the root) against this
    /// resource's contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PointerToNowhere`] if the pointer does not resolve.
    pub fn pointer(&self, pointer: &str) -> Result<&Value, Error> {
        crate::pointer::resolve(&self.contents, pointer)
    }

    #[must_use]
    pub fn as_ref(&self) -> ResourceRef<'_> {
        ResourceRef::new(&self.contents, self.draft)
    }
}

fn collect_subresources(draft: Draft, node: &Value, is_root: bool, out: &mut Vec<Resource>) {
    let Some(object) = node.as_object() else {
        return;
    };
    if !is_root && object.contains_key(draft.id_keyword()) {
        out.push(Resource::new(node.clone(), draft));
        // A nested resource's own subresources are discovered when the registry processes
        // that resource in turn; we still need to look for refs out of it but not anchors.
    }
    for location in draft.subresource_locations() {
        match location {
            SubresourceLocation::Schema(key) => {
                if let Some(value) = object.get(*key) {
                    collect_subresources(draft, value, false, out);
                }
            }
            SubresourceLocation::SchemaMap(key) => {
                if let Some(map) = object.get(*key).and_then(Value::as_object) {
                    for value in map.values() {
                        collect_subresources(draft, value, false, out);
                    }
                }
            }
            SubresourceLocation::SchemaArray(key) => {
                if let Some(items) = object.get(*key).and_then(Value::as_array) {
                    for value in items {
                        collect_subresources(draft, value, false, out);
                    }
                }
            }
            SubresourceLocation::SchemaOrSchemaArray(key) => {
                if let Some(value) = object.get(*key) {
                    if let Some(items) = value.as_array() {
                        for item in items {
                            collect_subresources(draft, item, false, out);
                        }
                    } else {
                        collect_subresources(draft, value, false, out);
                    }
                }
            }
        }
    }
}

/// A borrowed view of a [`Resource`]'s contents, paired with its draft.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ResourceRef<'a> {
    contents: &'a Value,
    draft: Draft,
}

impl<'a> ResourceRef<'a> {
    #[must_use]
    pub fn new(contents: &'a Value, draft: Draft) -> Self {
        ResourceRef { contents, draft }
    }
    #[must_use]
    pub fn id(&self) -> Option<&'a str> {
        self.draft.id_of(self.contents)
    }
    #[must_use]
    pub fn contents(&self) -> &'a Value {
        self.contents
    }
    #[must_use]
    pub fn draft(&self) -> Draft {
        self.draft
    }
}
