//! Driver-neutral column value and the scan/value traits

use crate::error::DecodeError;

/// A column value as handed over by a database driver
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// SQL NULL
    Null,
    /// Boolean column
    Bool(bool),
    /// Integer column
    Int(i64),
    /// Floating point column
    Float(f64),
    /// Text column
    Text(String),
    /// Binary column or raw text bytes
    Bytes(Vec<u8>),
}

impl SqlValue {
    /// Returns the kind name (for error messages)
    pub fn kind(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Bool(_) => "bool",
            SqlValue::Int(_) => "int",
            SqlValue::Float(_) => "float",
            SqlValue::Text(_) => "text",
            SqlValue::Bytes(_) => "bytes",
        }
    }

    /// Check if this value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Try to get as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SqlValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Bytes of a text or binary value, `None` for NULL
    ///
    /// Any other kind is rejected on behalf of `target`.
    pub(crate) fn text_bytes(&self, target: &'static str) -> Result<Option<&[u8]>, DecodeError> {
        match self {
            SqlValue::Null => Ok(None),
            SqlValue::Text(s) => Ok(Some(s.as_bytes())),
            SqlValue::Bytes(b) => Ok(Some(b.as_slice())),
            other => Err(DecodeError::UnsupportedSource {
                target,
                kind: other.kind(),
            }),
        }
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        SqlValue::Text(s)
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::Text(s.to_string())
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(b: Vec<u8>) -> Self {
        SqlValue::Bytes(b)
    }
}

impl From<&[u8]> for SqlValue {
    fn from(b: &[u8]) -> Self {
        SqlValue::Bytes(b.to_vec())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(SqlValue::Null, Into::into)
    }
}

/// Populate `self` from a column value
///
/// Implementations are all-or-nothing: on error the receiver is either
/// unchanged or in its documented NULL state.
pub trait Scanner {
    /// Decode `src` into `self`
    fn scan(&mut self, src: &SqlValue) -> Result<(), DecodeError>;
}

/// Produce the column value for `self`
pub trait Valuer {
    /// Encode `self` as a column value
    fn value(&self) -> SqlValue;
}
