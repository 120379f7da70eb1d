//! Preview builder tests
//!
//! Tests for:
//! - Delimiter detection and delimited previews
//! - JSON record previews
//! - File-kind dispatch from file names

pub mod delimited_tests;
