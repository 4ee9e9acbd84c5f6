//! Repository-wide filter options.
//!
//! - [`FilterConfig`] - Options consulted when attaching filters to a path
//! - [`AutoCrlf`] - The `core.autocrlf` setting
//!
//! # Example
//!
//! ```
//! use eolstrip::{AutoCrlf, FilterConfig};
//!
//! let config = FilterConfig::default().with_auto_crlf("input".parse()?);
//! assert_eq!(config.auto_crlf(), AutoCrlf::Input);
//! assert!(config.auto_crlf_enabled());
//! # Ok::<(), eolstrip::FilterError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::FilterError;

/// The `core.autocrlf` setting.
///
/// Any value other than [`AutoCrlf::False`] permits automatic line ending
/// detection for paths that carry no explicit attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AutoCrlf {
    /// Never guess; only paths with explicit attributes are converted.
    #[default]
    False,
    /// Guess, and convert both on input and on checkout.
    True,
    /// Guess, and convert on input only.
    Input,
}

impl AutoCrlf {
    /// Returns true if paths without attributes may be auto-detected.
    pub const fn is_enabled(self) -> bool {
        !matches!(self, AutoCrlf::False)
    }
}

impl FromStr for AutoCrlf {
    type Err = FilterError;

    /// Parses a git-config style value. Booleans accept the usual git
    /// spellings; an empty value is false.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "input" => Ok(AutoCrlf::Input),
            "true" | "yes" | "on" | "1" => Ok(AutoCrlf::True),
            "false" | "no" | "off" | "0" | "" => Ok(AutoCrlf::False),
            other => Err(FilterError::InvalidConfig {
                message: format!("invalid core.autocrlf value '{}'", other),
            }),
        }
    }
}

impl fmt::Display for AutoCrlf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutoCrlf::False => write!(f, "false"),
            AutoCrlf::True => write!(f, "true"),
            AutoCrlf::Input => write!(f, "input"),
        }
    }
}

/// Options consulted when deciding whether to attach a filter to a path.
///
/// Passed explicitly to [`CrlfFilter::for_path`](crate::CrlfFilter::for_path)
/// rather than read from a repository handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FilterConfig {
    auto_crlf: AutoCrlf,
}

impl FilterConfig {
    /// Creates a configuration with the given `core.autocrlf` value.
    pub const fn new(auto_crlf: AutoCrlf) -> Self {
        Self { auto_crlf }
    }

    /// Sets the `core.autocrlf` value.
    pub fn with_auto_crlf(mut self, auto_crlf: AutoCrlf) -> Self {
        self.auto_crlf = auto_crlf;
        self
    }

    /// Returns the `core.autocrlf` value.
    pub fn auto_crlf(&self) -> AutoCrlf {
        self.auto_crlf
    }

    /// Returns true if automatic detection is permitted.
    pub fn auto_crlf_enabled(&self) -> bool {
        self.auto_crlf.is_enabled()
    }
}
