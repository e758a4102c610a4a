use core::fmt;

use serde_json::Value;
use url::Url;

/// Fetches resources that are not already present in a [`crate::Registry`].
///
/// Implementors are consulted only on a cache miss. All operations are blocking; there is
/// no async variant, matching the engine's synchronous, single-call-stack execution model.
pub trait Retrieve: Send + Sync {
    /// Attempt to retrieve the resource identified by `uri` (already stripped of its
    /// fragment).
    ///
    /// # Errors
    ///
    /// Any error indicating the resource could not be fetched or parsed.
    fn retrieve(&self, uri: &Url) -> Result<Value, Box<dyn std::error::Error + Send + Sync>>;
}

#[derive(Debug, Clone, Copy)]
struct DefaultRetrieverError;

impl fmt::Display for DefaultRetrieverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("the default retriever does not fetch external resources")
    }
}

impl std::error::Error for DefaultRetrieverError {}

/// A [`Retrieve`] implementation that never succeeds. Used when a caller only ever
/// validates against schemas with no out-of-document `$ref`s.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DefaultRetriever;

impl Retrieve for DefaultRetriever {
    fn retrieve(&self, _uri: &Url) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(DefaultRetrieverError))
    }
}
