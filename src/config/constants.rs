//! Configuration constants.
//!
//! This module defines the fixed strings used when normalizing input before
//! domain extraction.

/// Scheme prepended to inputs that carry no scheme separator.
///
/// A scheme is required for the parser to tell the host apart from the path in
/// partial inputs such as `abc.com/path`.
pub const DEFAULT_SCHEME: &str = "https://";

/// Separator between the scheme and the authority.
pub const SCHEME_SEPARATOR: &str = "://";

/// Leading host label removed unless `keep_www` is set (matched case-insensitively).
pub const WWW_LABEL: &str = "www.";

/// Log target used for diagnostics emitted by this crate.
pub const LOG_TARGET: &str = "domain_extract";
