//! eolstrip
//!
//! Attribute-driven CRLF to LF normalization for content entering a
//! content-addressed object store.
//!
//! `eolstrip` decides, per path, whether carriage return/line feed pairs
//! should be collapsed before a file is stored, and performs the rewrite on
//! arbitrary bytes without touching anything else. It is designed as a
//! small, composable piece of a larger filter pipeline:
//!
//! - the `crlf`, `eol` and `text` attributes are read through [`AttrLookup`]
//! - `core.autocrlf` is passed in through [`FilterConfig`]
//! - the result is a [`CrlfFilter`] implementing [`Filter`], or nothing
//!
//! The crate intentionally:
//! - does NOT parse `.gitattributes` files or match path patterns
//! - does NOT load repository configuration
//! - does NOT restore CRLF on checkout
//! - does NOT process streams; buffers are handled whole
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use eolstrip::{AttrTable, AutoCrlf, CrlfFilter, Filter, FilterConfig};
//!
//! fn main() -> Result<(), eolstrip::FilterError> {
//!     let mut attrs = AttrTable::new();
//!     attrs.insert_rule("src/main.c", "text=auto");
//!
//!     let config = FilterConfig::default().with_auto_crlf(AutoCrlf::Input);
//!     let source = Bytes::from_static(b"int main() {\r\n}\r\n");
//!
//!     if let Some(filter) = CrlfFilter::for_path(&config, &attrs, "src/main.c")? {
//!         let stored = filter.apply(&source)?.into_bytes_or(source.clone());
//!         assert_eq!(stored, &b"int main() {\n}\n"[..]);
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod attr;
mod config;
mod error;
mod filter;
mod stats;

mod util; // internal (fallible allocation)

//
// Public surface (intentionally tiny)
//

pub use attr::{
    AttrLookup, AttrMatch, AttrTable, AttrValue, CONV_ATTR_NAMES, EolPreference,
    LineEndingAction, ResolvedAttrs, interpret_crlf, interpret_eol, resolve,
};
pub use config::{AutoCrlf, FilterConfig};
pub use error::{FilterError, LookupError};
pub use filter::{CrlfFilter, Declined, Filter, Filtered, check_stats, should_attach, strip_crlf};
pub use stats::TextStats;
