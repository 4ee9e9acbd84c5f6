//! Path attributes and policy resolution.
//!
//! - [`AttrLookup`] - Seam to the attribute store
//! - [`AttrTable`] - In-memory store keyed by exact path
//! - [`resolve`] - Reads `crlf`, `eol` and `text` into [`ResolvedAttrs`]

mod policy;
mod table;
mod value;

pub use policy::{
    EolPreference, LineEndingAction, ResolvedAttrs, interpret_crlf, interpret_eol, resolve,
};
pub use table::AttrTable;
pub use value::{AttrLookup, AttrMatch, AttrValue, CONV_ATTR_NAMES};
