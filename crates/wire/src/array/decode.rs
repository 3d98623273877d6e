//! Array-literal decoding
//!
//! Splits the body of a `{`...`}` literal on `,`, strips one layer of `'` or
//! `"` from each element and parses it as a UUID. Elements are not trimmed
//! of whitespace.

use crate::error::DecodeError;
use uuid::Uuid;

/// Decode an array literal into its UUIDs, in order
///
/// `target` names the type being decoded, for error messages.
pub fn decode_array(src: &[u8], target: &'static str) -> Result<Vec<Uuid>, DecodeError> {
    if src.len() < 2 || src[0] != b'{' || src[src.len() - 1] != b'}' {
        return Err(DecodeError::Format {
            target,
            input: String::from_utf8_lossy(src).into_owned(),
        });
    }

    let body = &src[1..src.len() - 1];
    if body.is_empty() {
        return Ok(Vec::new());
    }

    let mut ids = Vec::with_capacity(16);
    for (index, elem) in body.split(|b| *b == b',').enumerate() {
        let elem = strip_quotes(elem);
        let id = Uuid::try_parse_ascii(elem).map_err(|source| DecodeError::ElementParse {
            target,
            index,
            element: String::from_utf8_lossy(elem).into_owned(),
            source,
        })?;
        ids.push(id);
    }

    Ok(ids)
}

/// Remove one leading and one trailing quote character, if present
fn strip_quotes(elem: &[u8]) -> &[u8] {
    let elem = match elem.first() {
        Some(b'"' | b'\'') => &elem[1..],
        _ => elem,
    };
    match elem.last() {
        Some(b'"' | b'\'') => &elem[..elem.len() - 1],
        _ => elem,
    }
}
