//! The CRLF filter for the to-odb direction.
//!
//! Attachment and application are split the way a filter chain drives
//! them: [`CrlfFilter::for_path`] resolves attributes once per path and
//! decides whether the filter is needed at all, and [`Filter::apply`] then
//! runs per buffer.

use super::strip::strip_crlf;
use super::{Declined, Filter, Filtered};
use crate::attr::{AttrLookup, LineEndingAction, ResolvedAttrs, resolve};
use crate::config::FilterConfig;
use crate::error::{FilterError, LookupError};
use crate::stats::TextStats;

/// Decides whether a filter is needed for a finalized action.
///
/// `Binary` never converts; `Guess` converts only when `core.autocrlf`
/// permits detection.
pub fn should_attach(action: LineEndingAction, auto_crlf_enabled: bool) -> bool {
    match action {
        LineEndingAction::Binary => false,
        LineEndingAction::Guess => auto_crlf_enabled,
        LineEndingAction::Auto
        | LineEndingAction::Text
        | LineEndingAction::Input
        | LineEndingAction::Crlf => true,
    }
}

/// Content check for `Auto` and `Guess` actions.
///
/// Returns the reason to leave the buffer alone, or `None` if it is safe to
/// convert.
pub fn check_stats(stats: &TextStats) -> Option<Declined> {
    if stats.cr != stats.crlf {
        return Some(Declined::BareCr);
    }
    if stats.is_binary() {
        return Some(Declined::Binary);
    }
    if stats.cr == 0 {
        return Some(Declined::NoCarriageReturn);
    }
    None
}

/// Converts CRLF to LF for content entering the object store.
///
/// Holds the resolved attributes for the one path it was attached to.
///
/// # Example
///
/// ```
/// use eolstrip::{AttrTable, CrlfFilter, Filter, FilterConfig, Filtered};
///
/// let mut attrs = AttrTable::new();
/// attrs.insert_rule("notes.txt", "text");
///
/// let filter = CrlfFilter::for_path(&FilterConfig::default(), &attrs, "notes.txt")?
///     .expect("text files get a filter");
/// let out = filter.apply(b"a\r\nb\r\n")?;
/// assert_eq!(out, Filtered::Converted(bytes::Bytes::from_static(b"a\nb\n")));
///
/// // Without attributes and with core.autocrlf=false nothing is attached
/// assert!(CrlfFilter::for_path(&FilterConfig::default(), &attrs, "image.png")?.is_none());
/// # Ok::<(), eolstrip::FilterError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrlfFilter {
    attrs: ResolvedAttrs,
}

impl CrlfFilter {
    /// Creates a filter for already finalized attributes.
    pub const fn new(attrs: ResolvedAttrs) -> Self {
        Self { attrs }
    }

    /// Resolves attributes for `path` and builds a filter if one is needed.
    ///
    /// Returns `Ok(None)` when the path is binary, or carries no directive
    /// while `core.autocrlf` is off.
    ///
    /// # Errors
    ///
    /// Propagates attribute lookup failures; the caller should then pass the
    /// content through unfiltered.
    pub fn for_path<L>(
        config: &FilterConfig,
        lookup: &L,
        path: &str,
    ) -> Result<Option<Self>, LookupError>
    where
        L: AttrLookup + ?Sized,
    {
        let mut attrs = resolve(path, lookup)?;
        attrs.action = attrs.finalize();

        if !should_attach(attrs.action, config.auto_crlf_enabled()) {
            tracing::debug!(
                path,
                action = %attrs.action,
                auto_crlf = %config.auto_crlf(),
                "crlf filter not attached"
            );
            return Ok(None);
        }

        tracing::debug!(path, action = %attrs.action, "crlf filter attached");
        Ok(Some(Self::new(attrs)))
    }

    /// Returns the attributes this filter was built with.
    pub fn attrs(&self) -> &ResolvedAttrs {
        &self.attrs
    }

    /// Returns the finalized action.
    pub fn action(&self) -> LineEndingAction {
        self.attrs.action
    }
}

impl Filter for CrlfFilter {
    fn name(&self) -> &'static str {
        "crlf"
    }

    fn apply(&self, source: &[u8]) -> Result<Filtered, FilterError> {
        if source.is_empty() {
            return Ok(Declined::Empty.into());
        }

        if self.attrs.action.is_heuristic() {
            let stats = TextStats::gather(source);
            if let Some(reason) = check_stats(&stats) {
                tracing::debug!(
                    %reason,
                    cr = stats.cr,
                    crlf = stats.crlf,
                    nul = stats.nul,
                    "crlf conversion skipped"
                );
                return Ok(reason.into());
            }
        }

        strip_crlf(source)
    }
}
