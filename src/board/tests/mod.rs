//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `rules.rs` - Movement patterns and King safety
//! - `resolution.rs` - Chinese notation resolution against positions
//! - `edge_cases.rs` - Malformed and unusual positions
//! - `proptest.rs` - Property-based tests
