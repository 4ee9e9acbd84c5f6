//! Turning `crlf`, `eol` and `text` attributes into a line ending action.

use std::fmt;

use super::value::{ATTR_CRLF, ATTR_EOL, ATTR_TEXT, AttrLookup, AttrMatch, AttrValue, CONV_ATTR_NAMES};
use crate::error::LookupError;

/// What to do with line endings for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineEndingAction {
    /// No directive; defer to `core.autocrlf`.
    Guess,
    /// Detect per file (`text=auto`).
    Auto,
    /// Always treat as text (`text`).
    Text,
    /// Never convert (`-text`).
    Binary,
    /// Convert on input only (`crlf=input`, `eol=lf`).
    Input,
    /// Text with CRLF in the working tree (`eol=crlf`).
    Crlf,
}

impl LineEndingAction {
    /// Returns true if the decision to convert depends on the content.
    pub const fn is_heuristic(self) -> bool {
        matches!(self, LineEndingAction::Auto | LineEndingAction::Guess)
    }
}

impl fmt::Display for LineEndingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LineEndingAction::Guess => "guess",
            LineEndingAction::Auto => "auto",
            LineEndingAction::Text => "text",
            LineEndingAction::Binary => "binary",
            LineEndingAction::Input => "input",
            LineEndingAction::Crlf => "crlf",
        };
        f.write_str(s)
    }
}

/// An explicit end-of-line request from the `eol` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EolPreference {
    /// No usable `eol` value.
    #[default]
    Unset,
    /// `eol=lf`
    Lf,
    /// `eol=crlf`
    Crlf,
}

/// The merged attribute outcome for one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedAttrs {
    /// Action derived from `text`, falling back to `crlf`.
    pub action: LineEndingAction,
    /// Preference derived from `eol`.
    pub eol: EolPreference,
}

impl ResolvedAttrs {
    /// Creates resolved attributes from their parts.
    pub const fn new(action: LineEndingAction, eol: EolPreference) -> Self {
        Self { action, eol }
    }

    /// Collapses `eol` into the action.
    ///
    /// `Binary` always wins; otherwise an explicit `eol` overrides the
    /// action derived from `text`/`crlf`.
    pub fn finalize(&self) -> LineEndingAction {
        if self.action == LineEndingAction::Binary {
            return LineEndingAction::Binary;
        }

        match self.eol {
            EolPreference::Lf => LineEndingAction::Input,
            EolPreference::Crlf => LineEndingAction::Crlf,
            EolPreference::Unset => self.action,
        }
    }
}

impl Default for ResolvedAttrs {
    fn default() -> Self {
        Self::new(LineEndingAction::Guess, EolPreference::Unset)
    }
}

/// Interprets a `text` or legacy `crlf` attribute value.
pub fn interpret_crlf(value: &AttrValue) -> LineEndingAction {
    match value {
        AttrValue::True => LineEndingAction::Text,
        AttrValue::False => LineEndingAction::Binary,
        AttrValue::Unset => LineEndingAction::Guess,
        AttrValue::Value(s) => match s.as_str() {
            "input" => LineEndingAction::Input,
            "auto" => LineEndingAction::Auto,
            _ => LineEndingAction::Guess,
        },
    }
}

/// Interprets an `eol` attribute value.
pub fn interpret_eol(value: &AttrValue) -> EolPreference {
    match value.as_str() {
        Some("lf") => EolPreference::Lf,
        Some("crlf") => EolPreference::Crlf,
        _ => EolPreference::Unset,
    }
}

/// Loads and interprets the conversion attributes for `path`.
///
/// A path with no applicable rules resolves to
/// `{ action: Guess, eol: Unset }`. Any other lookup failure is returned.
pub fn resolve<L>(path: &str, lookup: &L) -> Result<ResolvedAttrs, LookupError>
where
    L: AttrLookup + ?Sized,
{
    let values = match lookup.get_many(path, &CONV_ATTR_NAMES)? {
        AttrMatch::NoRulesApply => {
            tracing::trace!(path, "no attribute rules apply");
            return Ok(ResolvedAttrs::default());
        }
        AttrMatch::Values(values) => values,
    };

    // `text` takes precedence over the legacy `crlf` attribute
    let mut action = interpret_crlf(&values[ATTR_TEXT]);
    if action == LineEndingAction::Guess {
        action = interpret_crlf(&values[ATTR_CRLF]);
    }

    let resolved = ResolvedAttrs::new(action, interpret_eol(&values[ATTR_EOL]));
    tracing::trace!(path, action = %resolved.action, eol = ?resolved.eol, "resolved attributes");
    Ok(resolved)
}
