use std::sync::{Arc, RwLock};

use ahash::AHashMap;
use serde_json::Value;
use url::Url;

use crate::{
    anchors::Anchor, retriever::DefaultRetriever, uri, Draft, Error, Resolver, Resource, Retrieve,
};

/// A registry of JSON Schema resources, keyed by their canonical (fragment-stripped) URI.
///
/// Resources that are registered up front (via [`Registry::try_new`] or
/// [`RegistryOptions::try_new`]) are indexed eagerly: their subresources (nested `$id`
/// documents) and anchors are discovered and cached immediately. Resources reached only
/// through a `$ref` during validation are fetched lazily, on first lookup, via the
/// registry's [`Retrieve`] implementation, and then indexed the same way.
///
/// The resource cache (`resources`) and anchor cache (`anchors`) are the only shared
/// mutable state in this crate; external synchronization is provided by an internal
/// `RwLock` so a single `Registry` can be consulted from multiple validations in parallel.
pub struct Registry {
    resources: RwLock<AHashMap<String, Arc<Resource>>>,
    anchors: RwLock<AHashMap<(String, String), Anchor>>,
    retriever: Arc<dyn Retrieve>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("resources", &self.resources.read().unwrap().len())
            .finish_non_exhaustive()
    }
}

/// Configuration for building a [`Registry`]: a custom [`Retrieve`] implementation and/or
/// a default draft for resources whose `$schema` is absent.
pub struct RegistryOptions {
    retriever: Arc<dyn Retrieve>,
    draft: Draft,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            retriever: Arc::new(DefaultRetriever),
            draft: Draft::default(),
        }
    }
}

impl RegistryOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn retriever(mut self, retriever: Arc<dyn Retrieve>) -> Self {
        self.retriever = retriever;
        self
    }
    #[must_use]
    pub fn draft(mut self, draft: Draft) -> Self {
        self.draft = draft;
        self
    }
    /// # Errors
    ///
    /// Returns an error if `uri` is invalid.
    pub fn try_new(self, uri: impl AsRef<str>, resource: Resource) -> Result<Registry, Error> {
        Registry::build(vec![(uri.as_ref().to_string(), resource)], self.retriever, self.draft)
    }
    /// # Errors
    ///
    /// Returns an error if any URI is invalid.
    pub fn try_from_resources(
        self,
        pairs: impl IntoIterator<Item = (impl AsRef<str>, Resource)>,
    ) -> Result<Registry, Error> {
        let pairs = pairs
            .into_iter()
            .map(|(uri, resource)| (uri.as_ref().to_string(), resource))
            .collect();
        Registry::build(pairs, self.retriever, self.draft)
    }
}

impl Registry {
    #[must_use]
    pub fn options() -> RegistryOptions {
        RegistryOptions::new()
    }

    /// # Errors
    ///
    /// Returns an error if `uri` is invalid.
    pub fn try_new(uri: impl AsRef<str>, resource: Resource) -> Result<Self, Error> {
        Self::options().try_new(uri, resource)
    }

    /// # Errors
    ///
    /// Returns an error if any URI is invalid.
    pub fn try_from_resources(
        pairs: impl IntoIterator<Item = (impl AsRef<str>, Resource)>,
    ) -> Result<Self, Error> {
        Self::options().try_from_resources(pairs)
    }

    /// Registers an additional resource, re-indexing its subresources and anchors.
    ///
    /// # Errors
    ///
    /// Returns an error if `uri` is invalid.
    pub fn try_with_resource(&self, uri: impl AsRef<str>, resource: Resource) -> Result<(), Error> {
        let base = uri::from_str(uri.as_ref())?;
        self.index(base, Arc::new(resource))
    }

    fn build(
        pairs: Vec<(String, Resource)>,
        retriever: Arc<dyn Retrieve>,
        draft: Draft,
    ) -> Result<Self, Error> {
        let registry = Registry {
            resources: RwLock::new(AHashMap::default()),
            anchors: RwLock::new(AHashMap::default()),
            retriever,
        };
        for (raw_uri, resource) in pairs {
            let base = uri::from_str(&raw_uri)?;
            registry.index(base, Arc::new(resource))?;
        }
        let _ = draft;
        Ok(registry)
    }

    /// Indexes `resource` (and, transitively, its subresources and their anchors) under
    /// `base`.
    fn index(&self, mut base: Url, resource: Arc<Resource>) -> Result<(), Error> {
        if let Some(id) = resource.id() {
            base = uri::resolve_against(&base, id)?;
        }
        let key = uri::without_fragment(&base);
        for anchor in resource.anchors() {
            self.anchors
                .write()
                .unwrap()
                .insert((key.clone(), anchor.name().to_string()), anchor);
        }
        for subresource in resource.subresources() {
            let subresource = Arc::new(subresource);
            self.index(base.clone(), subresource)?;
        }
        self.resources.write().unwrap().insert(key, resource);
        Ok(())
    }

    /// Returns the resource cached at `uri` (its fragment is ignored), fetching it through
    /// the configured [`Retrieve`] implementation and indexing it on a cache miss.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unretrievable`] if the resource is absent and retrieval fails.
    pub(crate) fn get_or_retrieve(&self, uri: &Url) -> Result<Arc<Resource>, Error> {
        let key = uri::without_fragment(uri);
        if let Some(resource) = self.resources.read().unwrap().get(&key) {
            return Ok(Arc::clone(resource));
        }
        let contents = self
            .retriever
            .retrieve(uri)
            .map_err(|err| Error::unretrievable(key.clone(), Some(err)))?;
        let resource = Arc::new(Resource::from_contents(contents)?);
        self.index(uri.clone(), Arc::clone(&resource))?;
        Ok(resource)
    }

    pub(crate) fn anchor(&self, uri: &Url, name: &str) -> Result<Anchor, Error> {
        let key = uri::without_fragment(uri);
        if let Some(anchor) = self.anchors.read().unwrap().get(&(key, name.to_string())) {
            return Ok(anchor.clone());
        }
        if name.contains('/') {
            Err(Error::invalid_anchor(name.to_string()))
        } else {
            Err(Error::no_such_anchor(name.to_string()))
        }
    }

    /// Creates a [`Resolver`] rooted at `base_uri`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_uri` is invalid.
    pub fn try_resolver(&self, base_uri: &str) -> Result<Resolver<'_>, Error> {
        let base = uri::from_str(base_uri)?;
        Ok(Resolver::new(self, base))
    }

    #[must_use]
    pub fn resolver(&self, base_uri: Url) -> Resolver<'_> {
        Resolver::new(self, base_uri)
    }
}
