//! SQL wire encoding for uuidcol
//!
//! This crate implements the scan/value contract used to store uuidcol
//! types in relational columns. It does not talk to a database; it only
//! converts between the collection types and a driver-neutral [`SqlValue`].
//!
//! - [`Scanner`]: populate a value from a column value (text, bytes or NULL)
//! - [`Valuer`]: produce the column value to write
//!
//! ## Wire Encoding Rules
//!
//! | Type | State | Column value |
//! |------|-------|--------------|
//! | Set / Slice | nil | `NULL` |
//! | Set / Slice | empty | `{}` |
//! | Set | populated | `{"<id>","<id>"}` in canonical order |
//! | Slice | populated | `{"<id>","<id>"}` in insertion order |
//! | NullUuid | invalid | `NULL` |
//! | NullUuid | valid | `<id>` |
//!
//! On decode, array elements may be bare or wrapped in one layer of `'` or
//! `"` quotes.
//!
//! ## Examples
//!
//! ```
//! use uuidcol_core::{Set, Uuid};
//! use uuidcol_wire::{Scanner, SqlValue, Valuer};
//!
//! let id = Uuid::parse_str("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap();
//! let set = Set::from_slice([id]);
//!
//! let column = set.value();
//! assert_eq!(
//!     column,
//!     SqlValue::Text(r#"{"6ba7b810-9dad-11d1-80b4-00c04fd430c8"}"#.to_string())
//! );
//!
//! let mut decoded = Set::nil();
//! decoded.scan(&column).unwrap();
//! assert_eq!(decoded, set);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
mod error;
mod scan;
mod value;

pub use array::{decode_array, encode_array};
pub use error::DecodeError;
pub use scan::scan_uuid;
pub use value::{Scanner, SqlValue, Valuer};
