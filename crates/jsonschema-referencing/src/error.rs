use core::fmt;

/// Errors that can occur during reference resolution and resource handling.
#[derive(Debug)]
pub enum Error {
    /// A resource is not present in a registry and retrieving it failed.
    Unretrievable {
        uri: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
    /// A JSON Pointer leads to a part of a document that does not exist.
    PointerToNowhere { pointer: String },
    /// An anchor does not exist within a particular resource.
    NoSuchAnchor { anchor: String },
    /// An anchor name that could never exist in a resource was dereferenced.
    InvalidAnchor { anchor: String },
    /// An error occurred while parsing or resolving a URI.
    InvalidUri { uri: String, reason: String },
    /// An unknown JSON Schema specification was encountered.
    UnknownSpecification { specification: String },
    /// Reference resolution recursed past the configured depth limit.
    DepthExceeded { limit: usize },
}

impl Error {
    pub(crate) fn pointer_to_nowhere(pointer: impl Into<String>) -> Error {
        Error::PointerToNowhere {
            pointer: pointer.into(),
        }
    }
    pub(crate) fn invalid_anchor(anchor: impl Into<String>) -> Error {
        Error::InvalidAnchor {
            anchor: anchor.into(),
        }
    }
    pub(crate) fn no_such_anchor(anchor: impl Into<String>) -> Error {
        Error::NoSuchAnchor {
            anchor: anchor.into(),
        }
    }
    pub(crate) fn unknown_specification(specification: impl Into<String>) -> Error {
        Error::UnknownSpecification {
            specification: specification.into(),
        }
    }
    pub(crate) fn unretrievable(
        uri: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Error {
        Error::Unretrievable {
            uri: uri.into(),
            source,
        }
    }
    pub(crate) fn invalid_uri(uri: impl Into<String>, reason: impl Into<String>) -> Error {
        Error::InvalidUri {
            uri: uri.into(),
            reason: reason.into(),
        }
    }
    #[must_use]
    pub fn depth_exceeded(limit: usize) -> Error {
        Error::DepthExceeded { limit }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Unretrievable { uri, source } => {
                write!(
                    f,
                    "Resource '{uri}' is not present in a registry and retrieving it failed"
                )?;
                if let Some(err) = source {
                    write!(f, ": {err}")?;
                }
                Ok(())
            }
            Error::PointerToNowhere { pointer } => {
                write!(f, "Pointer '{pointer}' does not exist")
            }
            Error::NoSuchAnchor { anchor } => write!(f, "Anchor '{anchor}' does not exist"),
            Error::InvalidAnchor { anchor } => write!(f, "Anchor '{anchor}' is invalid"),
            Error::InvalidUri { uri, reason } => write!(f, "Invalid URI '{uri}': {reason}"),
            Error::UnknownSpecification { specification } => {
                write!(f, "Unknown specification: {specification}")
            }
            Error::DepthExceeded { limit } => {
                write!(f, "Reference resolution exceeded the depth limit of {limit}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Unretrievable { source, .. } => source.as_deref(),
            _ => None,
        }
    }
}
