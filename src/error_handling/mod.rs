//! Error handling.
//!
//! This module provides the error type definitions. Extraction has a single
//! failure kind, unparsable input, which `ParseError` breaks down by cause.

mod types;

// Re-export public API
pub use types::{InitializationError, ParseError};
