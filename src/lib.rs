//! domain_extract library: domain and URL component extraction
//!
//! This library extracts normalized components from loosely-formed URL strings
//! such as user input, scraped links, or partial URLs without a scheme. It never
//! panics or returns an error for bad input: anything that cannot be extracted
//! comes back as `None`.
//!
//! # Example
//!
//! ```
//! use domain_extract::{domain, path, query_values, scheme, subdomain, subdomain_www};
//!
//! assert_eq!(domain("http://www.abc.xyz.com").as_deref(), Some("xyz.com"));
//! assert_eq!(subdomain("http://www.abc.xyz.com").as_deref(), Some("abc.xyz.com"));
//! assert_eq!(subdomain_www("http://www.xyz.com").as_deref(), Some("www.xyz.com"));
//! assert_eq!(scheme("http://aloha").as_deref(), Some("http"));
//! assert_eq!(path("abc.name.co.uk/custom/path").as_deref(), Some("/custom/path"));
//!
//! let values = query_values("xyz.com/?a=1&b=2").unwrap();
//! assert_eq!(values["b"], "2");
//!
//! // Garbage in, nothing out
//! assert_eq!(domain("::::::::::"), None);
//! ```
//!
//! # Logging
//!
//! Unparsable inputs are reported with `log::debug!`. Install a logger (for
//! example with [`initialization::init_logger_with`]) to see them.

#![warn(missing_docs)]

pub mod config;
mod domain;
mod error_handling;
pub mod initialization;
mod parse;

// Re-export public API
pub use config::{ExtractOptions, LogFormat, LogLevel, ParseOptions};
pub use domain::{domain, domain_with, extract, subdomain, subdomain_with, subdomain_www};
pub use error_handling::{InitializationError, ParseError};
pub use parse::{parse_component, path, query_values, scheme, Component, ParseResult};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
