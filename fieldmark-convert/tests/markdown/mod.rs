//! Markdown recovery tests
//!
//! Tests for HTML → markdown conversion.

mod import;
