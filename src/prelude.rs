//! Convenient imports for uuidcol.
//!
//! ```
//! use uuidcol::prelude::*;
//!
//! let mut set = Set::new();
//! set.add(Uuid::nil());
//! assert_eq!(set.value(), SqlValue::from(r#"{"00000000-0000-0000-0000-000000000000"}"#));
//! ```

// Types
pub use crate::types::{NullUuid, Set, Slice, SqlValue, Uuid};

// Traits needed to call scan()/value()
pub use crate::types::{Scanner, Valuer};

// Error handling
pub use crate::error::{Error, Result};
