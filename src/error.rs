//! Unified error types for uuidcol.
//!
//! This module provides one error type covering both member crates, so
//! callers can use `?` across JSON and SQL decoding alike.

use thiserror::Error;

/// All uuidcol errors.
///
/// The variants follow the failure kinds of the wire formats rather than
/// the crate that raised them.
#[derive(Debug, Error)]
pub enum Error {
    /// Array literal without a valid `{`...`}` envelope
    #[error("format error: {0}")]
    Format(String),

    /// A collection element is not a valid UUID
    #[error("element {index} ({element:?}) of {target}: {source}")]
    ElementParse {
        /// Type being decoded
        target: String,
        /// Position of the element
        index: usize,
        /// The element text as received
        element: String,
        /// Underlying parse failure
        #[source]
        source: uuid::Error,
    },

    /// Column value of a kind that can't be scanned
    #[error("unsupported source type {kind} for {target}")]
    UnsupportedSource {
        /// Type being decoded
        target: String,
        /// Kind of the rejected value
        kind: String,
    },

    /// JSON value of an unexpected shape
    #[error("unexpected JSON shape: {0}")]
    JsonShape(String),

    /// A single UUID failed to parse
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    /// JSON syntax or type error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for uuidcol operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is an envelope error.
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }

    /// Check if this error came from a malformed UUID.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::InvalidUuid(_) | Error::ElementParse { .. })
    }
}

// Convert from collection errors
impl From<uuidcol_core::Error> for Error {
    fn from(e: uuidcol_core::Error) -> Self {
        use uuidcol_core::Error as CoreError;
        match e {
            CoreError::Parse(err) => Error::InvalidUuid(err),
            CoreError::ElementParse {
                index,
                element,
                source,
            } => Error::ElementParse {
                target: "Slice".to_string(),
                index,
                element,
                source,
            },
            CoreError::JsonShape { found } => Error::JsonShape(found),
            CoreError::Json(msg) => Error::Serialization(msg),
        }
    }
}

// Convert from SQL decode errors
impl From<uuidcol_wire::DecodeError> for Error {
    fn from(e: uuidcol_wire::DecodeError) -> Self {
        use uuidcol_wire::DecodeError as DE;
        match e {
            DE::Format { target, input } => {
                Error::Format(format!("can't parse {:?} as {}", input, target))
            }
            DE::ElementParse {
                target,
                index,
                element,
                source,
            } => Error::ElementParse {
                target: target.to_string(),
                index,
                element,
                source,
            },
            DE::UnsupportedSource { target, kind } => Error::UnsupportedSource {
                target: target.to_string(),
                kind: kind.to_string(),
            },
            DE::InvalidUuid(err) => Error::InvalidUuid(err),
        }
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
