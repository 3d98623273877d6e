//! # uuidcol
//!
//! UUID collection types for relational columns and JSON payloads.
//!
//! The workspace is split in two layers:
//!
//! - `uuidcol-core`: [`Set`], [`Slice`], [`NullUuid`], the canonical
//!   ordering ([`less`]) and the JSON encodings
//! - `uuidcol-wire`: the SQL scan/value contract ([`Scanner`], [`Valuer`],
//!   [`SqlValue`]) and the array-literal codec
//!
//! This crate re-exports both and adds a unified [`Error`].
//!
//! ## Quick Start
//!
//! ```
//! use uuidcol::prelude::*;
//!
//! # fn main() -> uuidcol::Result<()> {
//! let ids = Slice::from_strings(Some(&[
//!     "6ba7b811-9dad-11d1-80b4-00c04fd430c8",
//!     "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
//! ][..]))?;
//!
//! // Persist as an array literal
//! let column = ids.to_set().value();
//! assert_eq!(
//!     column.as_text(),
//!     Some(r#"{"6ba7b810-9dad-11d1-80b4-00c04fd430c8","6ba7b811-9dad-11d1-80b4-00c04fd430c8"}"#)
//! );
//!
//! // Read it back
//! let mut set = Set::nil();
//! set.scan(&column)?;
//! assert_eq!(set.len(), 2);
//!
//! // JSON keeps order and duplicates
//! let json = ids.to_json()?;
//! assert_eq!(Slice::from_json(json.as_bytes())?, ids);
//! # Ok(())
//! # }
//! ```
//!
//! ## NULL Handling
//!
//! Collections have a nil state distinct from empty, and [`NullUuid`] has a
//! validity flag distinct from the nil UUID. Both survive every encoding.

#![warn(missing_docs)]

mod error;
mod types;

pub mod prelude;

pub use error::{Error, Result};
pub use types::*;
