//! Wire Format Comprehensive Test Suite
//!
//! Exercises Set, Slice and NullUuid through the public facade, across both
//! external encodings (array literal and JSON).
//!
//! ## Key Verification Points
//!
//! 1. nil and empty collections stay distinct through every encoding
//! 2. Set encoding is canonical; Slice encoding keeps order and duplicates
//! 3. Failed decodes never leave a half-populated receiver
//! 4. NullUuid absence is distinct from a present nil UUID
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test wire_formats
//!
//! # Run Set tests only
//! cargo test --test wire_formats set::
//! ```

use uuidcol::prelude::*;

pub mod properties;
pub mod slice;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// The UUID used in most fixtures
pub const ID: &str = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";

/// `ID` as a parsed value
pub fn fixture_id() -> Uuid {
    Uuid::from_bytes([
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ])
}

/// UUID whose only non-zero byte is the last one
pub fn small_id(n: u8) -> Uuid {
    Uuid::from_u128(n as u128)
}

/// Install a test subscriber so decode diagnostics show up with --nocapture
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
}
