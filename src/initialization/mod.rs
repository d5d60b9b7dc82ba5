//! Host application setup.
//!
//! The extraction functions only emit `log::debug!` records through the `log`
//! facade, which is a no-op until a logger is installed. Applications that want
//! those diagnostics can install one here.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
