//! UUID collection types
//!
//! This crate defines the collection and wrapper types built on top of
//! [`uuid::Uuid`]:
//!
//! - [`Set`]: unordered, duplicate-free membership set
//! - [`Slice`]: ordered sequence that keeps duplicates
//! - [`NullUuid`]: a single UUID with an explicit validity flag
//!
//! All sorting goes through one canonical order, [`less`] / [`compare`],
//! which compares the raw 16 bytes of two UUIDs.
//!
//! ## NULL vs Empty
//!
//! `Set` and `Slice` distinguish an uninitialized ("nil") collection from an
//! initialized empty one. The distinction survives every encoding:
//!
//! | State | JSON | Array literal |
//! |-------|------|---------------|
//! | nil | `null` | SQL NULL |
//! | empty | `[]` | `{}` |
//! | populated | `["...", ...]` | `{"...",...}` |
//!
//! ## Examples
//!
//! ```
//! use uuidcol_core::{Set, Slice};
//!
//! let ids = Slice::must_from_strings(&[
//!     "6ba7b811-9dad-11d1-80b4-00c04fd430c8",
//!     "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
//!     "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
//! ]);
//! let set = ids.to_set();
//! assert_eq!(set.len(), 2);
//!
//! let sorted = set.sorted_strings();
//! assert_eq!(sorted[0], "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compare;
pub mod error;
pub mod null_uuid;
pub mod set;
pub mod slice;

pub use compare::{compare, less};
pub use error::{Error, Result};
pub use null_uuid::NullUuid;
pub use set::Set;
pub use slice::Slice;

pub use uuid::Uuid;

/// The all-zero UUID, used as the "no value" sentinel inside a value
pub const NIL: Uuid = Uuid::nil();
