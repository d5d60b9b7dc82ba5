//! Extraction configuration and constants.
//!
//! This module provides:
//! - Normalization constants (default scheme, separators, the "www." label)
//! - Option types for the extraction functions
//! - Logging level and format types used by the logger initializer

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{ExtractOptions, LogFormat, LogLevel, ParseOptions};
