//! Attribute values and the lookup seam.

use std::fmt;

use crate::error::LookupError;

/// Names of the attributes that drive line ending conversion, in the order
/// [`AttrLookup::get_many`] must answer them.
pub const CONV_ATTR_NAMES: [&str; 3] = ["crlf", "eol", "text"];

/// Index of `crlf` in [`CONV_ATTR_NAMES`].
pub(crate) const ATTR_CRLF: usize = 0;
/// Index of `eol` in [`CONV_ATTR_NAMES`].
pub(crate) const ATTR_EOL: usize = 1;
/// Index of `text` in [`CONV_ATTR_NAMES`].
pub(crate) const ATTR_TEXT: usize = 2;

/// The value of a single attribute for a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AttrValue {
    /// The attribute is set (`text`).
    True,
    /// The attribute is explicitly unset (`-text`).
    False,
    /// No rule mentions the attribute, or it was reset (`!text`).
    #[default]
    Unset,
    /// The attribute carries a value (`eol=lf`).
    Value(String),
}

impl AttrValue {
    /// Parses one gitattributes assignment into its name and value.
    ///
    /// ```
    /// use eolstrip::AttrValue;
    ///
    /// assert_eq!(AttrValue::parse_assignment("text"), ("text", AttrValue::True));
    /// assert_eq!(AttrValue::parse_assignment("-crlf"), ("crlf", AttrValue::False));
    /// assert_eq!(AttrValue::parse_assignment("!eol"), ("eol", AttrValue::Unset));
    /// assert_eq!(
    ///     AttrValue::parse_assignment("eol=crlf"),
    ///     ("eol", AttrValue::Value("crlf".into()))
    /// );
    /// ```
    pub fn parse_assignment(token: &str) -> (&str, AttrValue) {
        if let Some(name) = token.strip_prefix('-') {
            return (name, AttrValue::False);
        }
        if let Some(name) = token.strip_prefix('!') {
            return (name, AttrValue::Unset);
        }
        match token.split_once('=') {
            Some((name, value)) => (name, AttrValue::Value(value.to_string())),
            None => (token, AttrValue::True),
        }
    }

    /// Returns the string value, if this attribute carries one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Value(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true if no rule set this attribute.
    pub fn is_unset(&self) -> bool {
        matches!(self, AttrValue::Unset)
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::True => write!(f, "set"),
            AttrValue::False => write!(f, "unset"),
            AttrValue::Unset => write!(f, "unspecified"),
            AttrValue::Value(s) => write!(f, "{}", s),
        }
    }
}

/// Result of a batched attribute lookup for one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrMatch {
    /// No attribute rule applies to the path at all.
    NoRulesApply,
    /// Rules apply; values are in the order of the requested names. Any of
    /// them may still be [`AttrValue::Unset`].
    Values([AttrValue; 3]),
}

/// An attribute store keyed by path.
///
/// Implementations answer the three names in [`CONV_ATTR_NAMES`] in one
/// call, and must distinguish "nothing applies to this path" from "rules
/// apply but leave these attributes unset".
pub trait AttrLookup {
    /// Looks up `names` for `path`.
    fn get_many(&self, path: &str, names: &[&str; 3]) -> Result<AttrMatch, LookupError>;
}

impl<T: AttrLookup + ?Sized> AttrLookup for &T {
    fn get_many(&self, path: &str, names: &[&str; 3]) -> Result<AttrMatch, LookupError> {
        (**self).get_many(path, names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment_forms() {
        assert_eq!(AttrValue::parse_assignment("crlf"), ("crlf", AttrValue::True));
        assert_eq!(AttrValue::parse_assignment("-text"), ("text", AttrValue::False));
        assert_eq!(AttrValue::parse_assignment("!text"), ("text", AttrValue::Unset));
        assert_eq!(
            AttrValue::parse_assignment("crlf=input"),
            ("crlf", AttrValue::Value("input".to_string()))
        );
    }

    #[test]
    fn test_parse_assignment_empty_value() {
        assert_eq!(
            AttrValue::parse_assignment("eol="),
            ("eol", AttrValue::Value(String::new()))
        );
    }

    #[test]
    fn test_as_str() {
        assert_eq!(AttrValue::Value("lf".into()).as_str(), Some("lf"));
        assert_eq!(AttrValue::True.as_str(), None);
        assert_eq!(AttrValue::Unset.as_str(), None);
    }

    #[test]
    fn test_default_is_unset() {
        assert!(AttrValue::default().is_unset());
    }

    #[test]
    fn test_names_order() {
        assert_eq!(CONV_ATTR_NAMES[ATTR_CRLF], "crlf");
        assert_eq!(CONV_ATTR_NAMES[ATTR_EOL], "eol");
        assert_eq!(CONV_ATTR_NAMES[ATTR_TEXT], "text");
    }
}
