//! Filters applied to content on its way into the object store.
//!
//! - [`Filter`] - The seam a filter chain drives
//! - [`Filtered`] - Outcome of one application: converted or declined
//! - [`CrlfFilter`] - CRLF to LF normalization driven by attributes

mod crlf;
mod strip;

use std::fmt;

use bytes::Bytes;

use crate::error::FilterError;

pub use crlf::{CrlfFilter, check_stats, should_attach};
pub use strip::strip_crlf;

/// A content filter attached to one path.
pub trait Filter {
    /// Short name of the filter, for diagnostics.
    fn name(&self) -> &'static str;

    /// Filters `source`, either producing a new buffer or declining.
    fn apply(&self, source: &[u8]) -> Result<Filtered, FilterError>;
}

/// Why a filter left its input untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Declined {
    /// The input was empty; nothing to do.
    Empty,
    /// The input has carriage returns that are not part of a CRLF pair.
    BareCr,
    /// The input looks binary.
    Binary,
    /// The input has no carriage returns.
    NoCarriageReturn,
    /// No carriage return precedes the final byte, so the output would be
    /// identical to the input.
    Clean,
}

impl fmt::Display for Declined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Declined::Empty => "empty input",
            Declined::BareCr => "bare carriage return",
            Declined::Binary => "binary content",
            Declined::NoCarriageReturn => "no carriage returns",
            Declined::Clean => "nothing to strip",
        };
        f.write_str(s)
    }
}

/// Outcome of applying a filter.
///
/// Declining is a normal result meaning "use the original buffer"; hard
/// failures are reported through [`FilterError`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Filtered {
    /// The filter produced a new buffer.
    Converted(Bytes),
    /// The filter left the input as it was.
    Declined(Declined),
}

impl Filtered {
    /// Returns true if a new buffer was produced.
    pub fn is_converted(&self) -> bool {
        matches!(self, Filtered::Converted(_))
    }

    /// Returns the decline reason, if the filter declined.
    pub fn declined(&self) -> Option<Declined> {
        match self {
            Filtered::Converted(_) => None,
            Filtered::Declined(reason) => Some(*reason),
        }
    }

    /// Returns the converted buffer, or `original` if the filter declined.
    ///
    /// ```
    /// use bytes::Bytes;
    /// use eolstrip::strip_crlf;
    ///
    /// let original = Bytes::from_static(b"no carriage returns\n");
    /// let out = strip_crlf(&original)?.into_bytes_or(original.clone());
    /// assert_eq!(out, original);
    /// # Ok::<(), eolstrip::FilterError>(())
    /// ```
    pub fn into_bytes_or(self, original: Bytes) -> Bytes {
        match self {
            Filtered::Converted(data) => data,
            Filtered::Declined(_) => original,
        }
    }
}

impl From<Declined> for Filtered {
    fn from(reason: Declined) -> Self {
        Filtered::Declined(reason)
    }
}
