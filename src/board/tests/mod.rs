//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `edge_cases.rs` - Board edges, odd positions and rule corner cases
//! - `proptest.rs` - Property-based tests
