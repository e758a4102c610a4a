use serde_json::Value;
use url::Url;

use crate::{uri, Draft, Error, Registry};

/// The active resolution scope stack while walking a schema.
///
/// `base_uri` is the lexical base for resolving the next relative `$ref`. `scopes` is the
/// *dynamic* scope chain: every resource entered at runtime (via `$ref`, `$dynamicRef`, or
/// `$recursiveRef`) during this particular validation call, outermost first. It is this
/// chain, not the lexical nesting of `$id`, that `$dynamicRef` searches.
#[derive(Clone)]
pub struct Resolver<'r> {
    registry: &'r Registry,
    base_uri: Url,
    scopes: Vec<Url>,
}

impl<'r> std::fmt::Debug for Resolver<'r> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("base_uri", &self.base_uri.as_str())
            .field("scopes", &self.scopes.len())
            .finish()
    }
}

/// The outcome of resolving a reference: the target schema value, and a [`Resolver`]
/// rebased to treat that target's document as the new lexical scope for any further
/// relative `$ref`s found inside it.
pub struct Resolved<'r> {
    contents: Value,
    resolver: Resolver<'r>,
    draft: Draft,
}

impl<'r> Resolved<'r> {
    #[must_use]
    pub fn contents(&self) -> &Value {
        &self.contents
    }
    #[must_use]
    pub fn resolver(&self) -> &Resolver<'r> {
        &self.resolver
    }
    #[must_use]
    pub fn into_resolver(self) -> Resolver<'r> {
        self.resolver
    }
    #[must_use]
    pub fn draft(&self) -> Draft {
        self.draft
    }
}

impl<'r> Resolver<'r> {
    #[must_use]
    pub(crate) fn new(registry: &'r Registry, base_uri: Url) -> Self {
        Resolver {
            registry,
            base_uri,
            scopes: Vec::new(),
        }
    }

    #[must_use]
    pub fn base_uri(&self) -> &Url {
        &self.base_uri
    }

    /// Enters a new lexical scope introduced by a nested `$id`/`id`, without counting as a
    /// dynamic-scope boundary (no `$ref` was followed).
    #[must_use]
    pub fn in_subresource(&self, id: &str) -> Result<Resolver<'r>, Error> {
        let base_uri = uri::resolve_against(&self.base_uri, id)?;
        Ok(Resolver {
            registry: self.registry,
            base_uri,
            scopes: self.scopes.clone(),
        })
    }

    /// Looks up `reference` (a `$ref`/`$recursiveRef`-family value) against the current
    /// scope, returning the resolved schema and a resolver rebased to its document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PointerToNowhere`], [`Error::NoSuchAnchor`],
    /// [`Error::InvalidAnchor`], or [`Error::Unretrievable`] as appropriate.
    pub fn lookup(&self, reference: &str) -> Result<Resolved<'r>, Error> {
        let (doc_uri, fragment) = if let Some(rest) = reference.strip_prefix('#') {
            (self.base_uri.clone(), rest.to_string())
        } else {
            let resolved = uri::resolve_against(&self.base_uri, reference)?;
            let (doc_uri, fragment) = uri::split_fragment(&resolved);
            (doc_uri, fragment.unwrap_or_default())
        };

        let resource = self.registry.get_or_retrieve(&doc_uri)?;
        let pointer = if fragment.is_empty() || fragment.starts_with('/') {
            fragment
        } else {
            let decoded = percent_encoding::percent_decode_str(&fragment)
                .decode_utf8()
                .map_err(|_| Error::invalid_anchor(fragment.clone()))?
                .into_owned();
            let anchor = self.registry.anchor(&doc_uri, &decoded)?;
            anchor.pointer().to_string()
        };
        let contents = resource.pointer(&pointer)?.clone();

        let mut scopes = self.scopes.clone();
        scopes.push(doc_uri.clone());
        Ok(Resolved {
            contents,
            draft: resource.draft(),
            resolver: Resolver {
                registry: self.registry,
                base_uri: doc_uri,
                scopes,
            },
        })
    }

    /// `$dynamicRef` resolution (2020-12): binds to the *outermost* dynamic scope that
    /// carries a matching `$dynamicAnchor`. Falls back to plain `$ref` semantics
    /// (`lookup("#" + name)`, or `lookup(reference)` if `name` could not be extracted) when
    /// no such scope exists.
    ///
    /// # Errors
    ///
    /// Propagates errors from the fallback `$ref` lookup.
    pub fn lookup_dynamic(&self, reference: &str) -> Result<Resolved<'r>, Error> {
        let name = reference.strip_prefix('#').unwrap_or(reference);
        if !name.contains('/') {
            for scope in &self.scopes {
                if let Ok(anchor) = self.registry.anchor(scope, name) {
                    if anchor.is_dynamic() {
                        let resource = self.registry.get_or_retrieve(scope)?;
                        let contents = resource.pointer(anchor.pointer())?.clone();
                        let mut scopes = self.scopes.clone();
                        scopes.push(scope.clone());
                        return Ok(Resolved {
                            contents,
                            draft: resource.draft(),
                            resolver: Resolver {
                                registry: self.registry,
                                base_uri: scope.clone(),
                                scopes,
                            },
                        });
                    }
                }
            }
        }
        self.lookup(reference)
    }

    /// `$recursiveRef` resolution (2019-09): if some ancestor in the dynamic scope declares
    /// `$recursiveAnchor: true` at its root, rebinds to the outermost such scope; otherwise
    /// behaves like plain `$ref`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying resource lookup.
    pub fn lookup_recursive(&self, reference: &str) -> Result<Resolved<'r>, Error> {
        for scope in &self.scopes {
            if let Ok(resource) = self.registry.get_or_retrieve(scope) {
                if resource
                    .contents()
                    .get("$recursiveAnchor")
                    .and_then(Value::as_bool)
                    == Some(true)
                {
                    let contents = resource.contents().clone();
                    let mut scopes = self.scopes.clone();
                    scopes.push(scope.clone());
                    return Ok(Resolved {
                        contents,
                        draft: resource.draft(),
                        resolver: Resolver {
                            registry: self.registry,
                            base_uri: scope.clone(),
                            scopes,
                        },
                    });
                }
            }
        }
        self.lookup(reference)
    }
}
