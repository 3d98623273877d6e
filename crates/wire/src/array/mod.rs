//! Array-literal encoding for UUID collections
//!
//! The persisted form of a collection is a single text value:
//!
//! - `{}` for an empty collection
//! - `{"<id>","<id>",...}` otherwise
//!
//! NULL is not part of this grammar; callers map it before and after.

mod decode;
mod encode;

pub use decode::decode_array;
pub use encode::encode_array;
