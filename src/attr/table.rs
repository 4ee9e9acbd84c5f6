//! In-memory attribute store keyed by exact path.

use std::collections::HashMap;

use super::value::{AttrLookup, AttrMatch, AttrValue};
use crate::error::LookupError;

/// An [`AttrLookup`] backed by a map from exact paths to attribute values.
///
/// Paths with no entry report [`AttrMatch::NoRulesApply`]. No pattern
/// matching or macro expansion is performed.
///
/// # Example
///
/// ```
/// use eolstrip::{AttrLookup, AttrMatch, AttrTable, AttrValue, CONV_ATTR_NAMES};
///
/// let mut table = AttrTable::new();
/// table.insert_rule("build.bat", "text eol=crlf");
///
/// let found = table.get_many("build.bat", &CONV_ATTR_NAMES)?;
/// assert_eq!(
///     found,
///     AttrMatch::Values([
///         AttrValue::Unset,
///         AttrValue::Value("crlf".into()),
///         AttrValue::True,
///     ])
/// );
/// assert_eq!(table.get_many("other.txt", &CONV_ATTR_NAMES)?, AttrMatch::NoRulesApply);
/// # Ok::<(), eolstrip::LookupError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttrTable {
    entries: HashMap<String, HashMap<String, AttrValue>>,
}

impl AttrTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one attribute for `path`. Later calls override earlier ones.
    pub fn set(&mut self, path: impl Into<String>, name: impl Into<String>, value: AttrValue) {
        self.entries
            .entry(path.into())
            .or_default()
            .insert(name.into(), value);
    }

    /// Applies a whitespace separated list of gitattributes assignments to
    /// `path`, e.g. `"text -crlf eol=lf"`.
    ///
    /// The path gets an entry even if `assignments` is empty, so it reports
    /// rules present with every attribute unset.
    pub fn insert_rule(&mut self, path: impl Into<String>, assignments: &str) {
        let attrs = self.entries.entry(path.into()).or_default();
        for token in assignments.split_whitespace() {
            let (name, value) = AttrValue::parse_assignment(token);
            attrs.insert(name.to_string(), value);
        }
    }

    /// Returns the number of paths with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no path has an entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AttrLookup for AttrTable {
    fn get_many(&self, path: &str, names: &[&str; 3]) -> Result<AttrMatch, LookupError> {
        let Some(attrs) = self.entries.get(path) else {
            return Ok(AttrMatch::NoRulesApply);
        };

        Ok(AttrMatch::Values(
            names.map(|name| attrs.get(name).cloned().unwrap_or_default()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::CONV_ATTR_NAMES;

    #[test]
    fn test_missing_path_has_no_rules() {
        let table = AttrTable::new();
        assert!(table.is_empty());
        assert_eq!(
            table.get_many("a.txt", &CONV_ATTR_NAMES).unwrap(),
            AttrMatch::NoRulesApply
        );
    }

    #[test]
    fn test_empty_rule_reports_all_unset() {
        let mut table = AttrTable::new();
        table.insert_rule("a.txt", "");
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get_many("a.txt", &CONV_ATTR_NAMES).unwrap(),
            AttrMatch::Values([AttrValue::Unset, AttrValue::Unset, AttrValue::Unset])
        );
    }

    #[test]
    fn test_later_assignment_overrides() {
        let mut table = AttrTable::new();
        table.insert_rule("a.txt", "text");
        table.insert_rule("a.txt", "-text crlf=input");
        table.set("a.txt", "eol", AttrValue::Value("lf".into()));

        assert_eq!(
            table.get_many("a.txt", &CONV_ATTR_NAMES).unwrap(),
            AttrMatch::Values([
                AttrValue::Value("input".into()),
                AttrValue::Value("lf".into()),
                AttrValue::False,
            ])
        );
    }

    #[test]
    fn test_unrelated_attributes_ignored() {
        let mut table = AttrTable::new();
        table.insert_rule("secret.key", "filter=git-crypt diff=git-crypt");
        assert_eq!(
            table.get_many("secret.key", &CONV_ATTR_NAMES).unwrap(),
            AttrMatch::Values([AttrValue::Unset, AttrValue::Unset, AttrValue::Unset])
        );
    }
}
