//! Error types for eolstrip.
//!
//! A declined conversion is not an error and never shows up here; see
//! [`Filtered::Declined`](crate::Filtered::Declined).

use thiserror::Error;

/// Errors reported by an attribute store.
///
/// "No rules apply to this path" is not an error: lookups report it as
/// [`AttrMatch::NoRulesApply`](crate::AttrMatch::NoRulesApply).
#[derive(Debug, Error)]
pub enum LookupError {
    /// The attribute store failed to answer for the given path.
    #[error("attribute lookup failed for '{path}': {message}")]
    Backend {
        /// Path that was being looked up.
        path: String,
        /// Description of the failure.
        message: String,
    },

    /// An I/O error occurred while reading attribute sources.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while attaching or applying a filter.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Attribute lookup failed; the filter could not be attached.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// The destination buffer could not be allocated.
    #[error("out of memory: failed to reserve {requested} bytes")]
    OutOfMemory {
        /// Number of bytes that were requested.
        requested: usize,
    },

    /// Invalid configuration value.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: String,
    },
}
