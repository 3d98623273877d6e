//! Error types for UUID collection parsing and JSON decoding

use thiserror::Error;

/// Errors produced while building collections from text or JSON
#[derive(Debug, Error)]
pub enum Error {
    /// A single identifier failed to parse
    #[error("invalid UUID: {0}")]
    Parse(#[from] uuid::Error),

    /// An element of a list failed to parse
    #[error("invalid UUID at index {index} ({element:?}): {source}")]
    ElementParse {
        /// Position of the offending element
        index: usize,
        /// The element text as received
        element: String,
        /// Underlying parse failure
        #[source]
        source: uuid::Error,
    },

    /// JSON value of a shape the target type does not accept
    #[error("can't decode JSON {found} as NullUuid")]
    JsonShape {
        /// Short description of what was found
        found: String,
    },

    /// JSON syntax or type error from the underlying parser
    #[error("JSON error: {0}")]
    Json(String),
}

/// Result type for collection operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}

impl Error {
    /// Check if this error came from a malformed identifier
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_) | Error::ElementParse { .. })
    }
}
