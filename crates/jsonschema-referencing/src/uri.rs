//! URI parsing and resolution helpers built on top of [`url::Url`].
use once_cell::sync::Lazy;
use url::Url;

use crate::Error;

/// The synthetic base used to give otherwise schemeless documents (e.g. schemas compiled
/// from an in-memory value with no `$id`) a resolvable identity.
pub(crate) static DEFAULT_ROOT_URI: Lazy<Url> =
    Lazy::new(|| Url::parse("json-schema:///").expect("valid URI"));

/// Parses a URI reference, resolving it against the default root if it has no scheme.
///
/// # Errors
///
/// Returns an error if `uri` is not a valid URI or URI-reference.
pub fn from_str(uri: &str) -> Result<Url, Error> {
    if uri.is_empty() {
        return Ok(DEFAULT_ROOT_URI.clone());
    }
    match Url::parse(uri) {
        Ok(url) => Ok(url),
        Err(_) => DEFAULT_ROOT_URI
            .join(uri)
            .map_err(|err| Error::invalid_uri(uri, err.to_string())),
    }
}

/// Resolves `reference` against `base`, returning the absolute target URI.
///
/// # Errors
///
/// Returns an error if `reference` cannot be parsed or joined to `base`.
pub fn resolve_against(base: &Url, reference: &str) -> Result<Url, Error> {
    if reference.is_empty() {
        return Ok(base.clone());
    }
    base.join(reference)
        .map_err(|err| Error::invalid_uri(reference, err.to_string()))
}

/// Splits a URI into its non-fragment part and an optional fragment.
#[must_use]
pub fn split_fragment(uri: &Url) -> (Url, Option<String>) {
    let fragment = uri.fragment().map(ToString::to_string);
    let mut base = uri.clone();
    base.set_fragment(None);
    (base, fragment)
}

/// Returns `uri` without its fragment, as a string. Used as the registry cache key.
#[must_use]
pub fn without_fragment(uri: &Url) -> String {
    let mut base = uri.clone();
    base.set_fragment(None);
    base.into()
}
