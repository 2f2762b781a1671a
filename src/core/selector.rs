//! Objective-C selectors as a first-class type.
//!
//! A selector like `setPosition:y:` carries both the method's keyword labels
//! and its arity (one argument per colon). Both are computed once at parse
//! time so call sites never re-split the raw text.

use crate::errors::{BindgenError, Result};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    raw: String,
    labels: Vec<String>,
    arity: usize,
}

impl Selector {
    /// Parse a selector string.
    ///
    /// A selector that takes arguments must end with `:`; anything after the
    /// final colon would be a keyword with no argument to bind.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(BindgenError::structure("empty selector"));
        }

        let arity = raw.matches(':').count();
        if arity == 0 {
            return Ok(Self {
                raw: raw.to_string(),
                labels: vec![raw.to_string()],
                arity,
            });
        }

        if !raw.ends_with(':') {
            return Err(BindgenError::structure(format!(
                "selector '{}' has a keyword after its last ':'",
                raw
            )));
        }

        let labels = raw[..raw.len() - 1]
            .split(':')
            .map(str::to_string)
            .collect();

        Ok(Self {
            raw: raw.to_string(),
            labels,
            arity,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Keyword labels in call order. For a unary selector this is the name.
    /// A label may be empty for anonymous arguments (`foo::`).
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// C-identifier form used for trampoline symbols (`setX:y:` -> `setX_y_`).
    pub fn native_name(&self) -> String {
        self.raw.replace(':', "_")
    }

    /// Name the method is registered under in the script engine (`setX:y:` -> `setXy`).
    pub fn script_name(&self) -> String {
        self.raw.replace(':', "")
    }

    /// `init`-family methods return the object being constructed.
    pub fn is_initializer(&self) -> bool {
        self.raw.starts_with("init")
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unary_selector() {
        let sel = Selector::parse("update").unwrap();
        assert_eq!(sel.arity(), 0);
        assert_eq!(sel.labels(), ["update"]);
        assert_eq!(sel.native_name(), "update");
        assert_eq!(sel.script_name(), "update");
    }

    #[test]
    fn test_keyword_selector() {
        let sel = Selector::parse("setX:y:").unwrap();
        assert_eq!(sel.arity(), 2);
        assert_eq!(sel.labels(), ["setX", "y"]);
        assert_eq!(sel.native_name(), "setX_y_");
        assert_eq!(sel.script_name(), "setXy");
    }

    #[test]
    fn test_anonymous_label_is_kept() {
        let sel = Selector::parse("foo::").unwrap();
        assert_eq!(sel.arity(), 2);
        assert_eq!(sel.labels(), ["foo", ""]);
    }

    #[test]
    fn test_trailing_keyword_is_rejected() {
        assert!(Selector::parse("setX:y").is_err());
    }

    #[test]
    fn test_empty_selector_is_rejected() {
        assert!(Selector::parse("").is_err());
    }

    #[test]
    fn test_initializer_detection() {
        assert!(Selector::parse("initWithFile:").unwrap().is_initializer());
        assert!(Selector::parse("init").unwrap().is_initializer());
        assert!(!Selector::parse("setInitial:").unwrap().is_initializer());
    }

    proptest! {
        #[test]
        fn prop_arity_matches_label_count(labels in prop::collection::vec("[a-zA-Z][a-zA-Z0-9]{0,8}", 1..6)) {
            let raw: String = labels.iter().map(|l| format!("{}:", l)).collect();
            let sel = Selector::parse(&raw).unwrap();
            prop_assert_eq!(sel.arity(), labels.len());
            prop_assert_eq!(sel.labels(), labels.as_slice());
            prop_assert!(!sel.script_name().contains(':'));
        }
    }
}
