//! # Unit Components
//!
//! Tests for each SEF library component, grouped the way the library
//! lays out its modules.

/// Conversions between patterns, host doubles, and text.
pub mod codec;

/// Presentation configuration loading.
pub mod config;
