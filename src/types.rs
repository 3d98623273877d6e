//! Public types for the uuidcol API.
//!
//! This module re-exports types from the member crates with a flat public
//! interface.

// Identifier core
pub use uuidcol_core::{Uuid, NIL};

// Ordering
pub use uuidcol_core::{compare, less};

// Collection and wrapper types
pub use uuidcol_core::{NullUuid, Set, Slice};

// SQL scan/value contract
pub use uuidcol_wire::{decode_array, encode_array, scan_uuid, Scanner, SqlValue, Valuer};

// Crate-level error types, for matching on specific kinds
pub use uuidcol_core::Error as CoreError;
pub use uuidcol_wire::DecodeError;
