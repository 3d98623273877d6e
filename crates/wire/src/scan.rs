//! Scan/value implementations for the uuidcol types
//!
//! Decoding always validates the whole input before touching the receiver,
//! so a failed scan never leaves a half-populated collection behind.

use crate::array::{decode_array, encode_array};
use crate::error::DecodeError;
use crate::value::{Scanner, SqlValue, Valuer};
use tracing::{debug, trace};
use uuid::Uuid;
use uuidcol_core::{NullUuid, Set, Slice};

const UUID_TARGET: &str = "Uuid";
const SET_TARGET: &str = "Set";
const SLICE_TARGET: &str = "Slice";

/// Scan a single UUID column
///
/// Text is parsed as canonical UUID text. Bytes of length 16 are taken as the
/// raw UUID; any other byte length is parsed as text. NULL and other kinds
/// are rejected.
pub fn scan_uuid(src: &SqlValue) -> Result<Uuid, DecodeError> {
    let id = match src {
        SqlValue::Text(s) => Uuid::parse_str(s)?,
        SqlValue::Bytes(b) if b.len() == 16 => Uuid::from_slice(b)?,
        SqlValue::Bytes(b) => Uuid::try_parse_ascii(b)?,
        other => {
            return Err(DecodeError::UnsupportedSource {
                target: UUID_TARGET,
                kind: other.kind(),
            })
        }
    };
    Ok(id)
}

fn rejected(src: &SqlValue, err: DecodeError) -> DecodeError {
    debug!("Rejected {} column value: {}", src.kind(), err);
    err
}

impl Scanner for Uuid {
    fn scan(&mut self, src: &SqlValue) -> Result<(), DecodeError> {
        *self = scan_uuid(src).map_err(|e| rejected(src, e))?;
        Ok(())
    }
}

impl Valuer for Uuid {
    fn value(&self) -> SqlValue {
        SqlValue::Text(self.to_string())
    }
}

impl Scanner for Set {
    fn scan(&mut self, src: &SqlValue) -> Result<(), DecodeError> {
        let Some(bytes) = src.text_bytes(SET_TARGET).map_err(|e| rejected(src, e))? else {
            self.set_nil();
            return Ok(());
        };
        let ids = decode_array(bytes, SET_TARGET).map_err(|e| rejected(src, e))?;
        self.replace_with(&ids);
        trace!("Scanned {} ids into Set ({} unique)", ids.len(), self.len());
        Ok(())
    }
}

impl Valuer for Set {
    fn value(&self) -> SqlValue {
        if self.is_nil() {
            return SqlValue::Null;
        }
        let sorted = self.sorted_slice();
        SqlValue::Text(encode_array(sorted.iter()))
    }
}

impl Scanner for Slice {
    fn scan(&mut self, src: &SqlValue) -> Result<(), DecodeError> {
        let Some(bytes) = src.text_bytes(SLICE_TARGET).map_err(|e| rejected(src, e))? else {
            *self = Slice::nil();
            return Ok(());
        };
        let ids = decode_array(bytes, SLICE_TARGET).map_err(|e| rejected(src, e))?;
        trace!("Scanned {} ids into Slice", ids.len());
        *self = Slice::from(ids);
        Ok(())
    }
}

impl Valuer for Slice {
    fn value(&self) -> SqlValue {
        if self.is_nil() {
            return SqlValue::Null;
        }
        SqlValue::Text(encode_array(self.iter()))
    }
}

impl Scanner for NullUuid {
    fn scan(&mut self, src: &SqlValue) -> Result<(), DecodeError> {
        if src.is_null() {
            self.set_null();
            return Ok(());
        }
        let mut id = Uuid::nil();
        match id.scan(src) {
            Ok(()) => {
                self.set_valid(id);
                Ok(())
            }
            Err(e) => {
                self.set_null();
                Err(e)
            }
        }
    }
}

impl Valuer for NullUuid {
    fn value(&self) -> SqlValue {
        match self.as_option() {
            Some(id) => id.value(),
            None => SqlValue::Null,
        }
    }
}
