//! HTML export tests
//!
//! Tests for markdown → HTML conversion.

mod export;
