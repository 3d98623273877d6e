//! Canonical ordering for UUIDs
//!
//! Every sort in this crate uses byte-wise comparison of the 16 stored
//! bytes, byte 0 first. This is a strict total order, so it is safe as a
//! comparator for both stable and unstable sorts.

use std::cmp::Ordering;
use uuid::Uuid;

/// Returns true if the raw bytes of `a` sort before the raw bytes of `b`
#[inline]
pub fn less(a: &Uuid, b: &Uuid) -> bool {
    a.as_bytes() < b.as_bytes()
}

/// Three-way form of [`less`], for use with `sort_by` and friends
#[inline]
pub fn compare(a: &Uuid, b: &Uuid) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}
