//! Fetching external resources referenced by an out-of-document `$ref`.
use referencing::Retrieve;
use serde_json::Value;
use url::Url;

/// The retriever used when a caller doesn't supply one via
/// [`crate::ValidationOptions::with_retriever`].
///
/// Answers `http(s)://json-schema.org/...` metaschema URIs from the bundled copies in
/// [`referencing::meta`] without touching the network, resolves `file://` URIs from disk
/// (behind the `resolve-file` feature), and resolves `http(s)://` URIs over the network
/// (behind the `resolve-http` feature). Any other scheme, or a feature that is disabled,
/// is an error.
#[derive(Debug, Default)]
pub struct DefaultRetriever;

impl Retrieve for DefaultRetriever {
    fn retrieve(&self, uri: &Url) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let without_fragment = {
            let mut u = uri.clone();
            u.set_fragment(None);
            u
        };
        let as_str = without_fragment.as_str().trim_end_matches('#');
        for (known, contents) in referencing::meta::META_SCHEMAS.iter() {
            if *known == as_str {
                return Ok(contents.clone());
            }
        }
        match uri.scheme() {
            "http" | "https" => {
                #[cfg(feature = "resolve-http")]
                {
                    Ok(reqwest::blocking::get(uri.as_str())?.json()?)
                }
                #[cfg(not(feature = "resolve-http"))]
                Err("the `resolve-http` feature or a custom retriever is required to resolve external schemas over HTTP".into())
            }
            "file" => {
                #[cfg(feature = "resolve-file")]
                {
                    let path = uri
                        .to_file_path()
                        .map_err(|()| "invalid file path in `file://` URI")?;
                    let file = std::fs::File::open(path)?;
                    Ok(serde_json::from_reader(file)?)
                }
                #[cfg(not(feature = "resolve-file"))]
                Err("the `resolve-file` feature or a custom retriever is required to resolve external schemas via files".into())
            }
            scheme => Err(format!("unknown scheme `{scheme}`, provide a custom retriever").into()),
        }
    }
}
