//! Configuration types.
//!
//! This module defines the option structs accepted by the extraction functions
//! and the logging enums used by the logger initializer. Every type here can be
//! embedded in a host application's own (serde-based) configuration.

use serde::{Deserialize, Serialize};

/// Options controlling how a domain is derived from the input.
///
/// The default matches [`crate::domain`]: the registrable domain, with a leading
/// "www." label removed.
///
/// # Examples
///
/// ```
/// use domain_extract::{domain_with, ParseOptions};
///
/// let opts = ParseOptions {
///     strip_subdomain: false,
///     ..Default::default()
/// };
/// assert_eq!(domain_with("http://www.abc.xyz.com", &opts).as_deref(), Some("abc.xyz.com"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Keep a leading "www." label instead of stripping it before parsing
    pub keep_www: bool,

    /// Return the registrable domain rather than the full host
    pub strip_subdomain: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            keep_www: false,
            strip_subdomain: true,
        }
    }
}

/// Options for [`crate::extract`], the convenience entry point.
///
/// Both flags default to `false`, which yields the full host minus any leading
/// "www." label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Return the registrable domain rather than the full host
    pub domain: bool,

    /// Keep a leading "www." label
    pub www: bool,
}

impl From<ExtractOptions> for ParseOptions {
    fn from(opts: ExtractOptions) -> Self {
        Self {
            keep_www: opts.www,
            strip_subdomain: opts.domain,
        }
    }
}

/// Minimum level of this crate's records, as accepted by
/// [`crate::initialization::init_logger_with`].
///
/// Deserializes from lowercase names (`"debug"`), so it can be read straight
/// out of a host's config file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and up
    Warn,
    /// Info and up
    Info,
    /// Debug and up; unparsable inputs are reported here
    Debug,
    /// Everything
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    #[default]
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}
