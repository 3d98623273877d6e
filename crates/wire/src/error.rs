//! Decode errors for the SQL wire format

use thiserror::Error;

/// Errors raised while scanning a column value
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    /// Array literal without a `{`...`}` envelope
    #[error("can't parse {input:?} as {target}")]
    Format {
        /// Type being decoded
        target: &'static str,
        /// The rejected input, lossily converted to text
        input: String,
    },

    /// Array element that is not a UUID
    #[error("can't parse element {index} ({element:?}) of {target}: {source}")]
    ElementParse {
        /// Type being decoded
        target: &'static str,
        /// Position of the element inside the literal
        index: usize,
        /// The element after quote stripping
        element: String,
        /// Underlying parse failure
        #[source]
        source: uuid::Error,
    },

    /// Column value of a kind the target can't be scanned from
    #[error("can't scan value of type {kind} as {target}")]
    UnsupportedSource {
        /// Type being decoded
        target: &'static str,
        /// Kind of the rejected value
        kind: &'static str,
    },

    /// Single UUID column that failed to parse
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),
}

impl DecodeError {
    /// True for envelope errors
    pub fn is_format(&self) -> bool {
        matches!(self, DecodeError::Format { .. })
    }
}
