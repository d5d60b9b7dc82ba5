//! Error type definitions.
//!
//! This module defines the error types used throughout the crate. None of the
//! extraction functions return these to callers; they are converted to `None`
//! at the public boundary.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Reasons an input cannot be parsed well enough to extract a component.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The input does not match the RFC 3986 `URI-reference` grammar.
    #[error("Invalid URI reference: {0}")]
    Uri(#[from] fluent_uri::ParseError),

    /// The WHATWG parser rejected the normalized input.
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}
