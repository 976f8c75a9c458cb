//! Module with the pattern types and their methods.
use std::str::FromStr;

use regex_automata::{meta::Regex, PatternID};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Result, StrScanError};

/// A compiled regular expression that can be used with the scan operations of a
/// [crate::StringScanner].
///
/// The pattern keeps its source text. Two patterns are equal if their sources are equal.
/// Cloning a pattern is cheap, the compiled regex is shared.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern from its regex source.
    ///
    /// The syntax is the one of the `regex-syntax` crate. Fails with
    /// [crate::StrScanErrorKind::RegexSyntaxError] if the source is malformed.
    pub fn new(source: &str) -> Result<Self> {
        let hir = regex_syntax::Parser::new()
            .parse(source)
            .map_err(|e| StrScanError::syntax(e, source))?;
        let regex = Regex::builder()
            .build_from_hir(&hir)
            .map_err(|e| StrScanError::build(e, source))?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// Create a pattern that matches `text` literally.
    pub fn literal(text: &str) -> Result<Self> {
        Pattern::new(&regex_syntax::escape(text))
    }

    /// Get the pattern source.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The number of capture groups, not counting the group of the whole match.
    pub fn captures_len(&self) -> usize {
        self.regex
            .group_info()
            .group_len(PatternID::ZERO)
            .saturating_sub(1)
    }

    #[inline]
    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl std::hash::Hash for Pattern {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

impl FromStr for Pattern {
    type Err = StrScanError;

    fn from_str(s: &str) -> Result<Self> {
        Pattern::new(s)
    }
}

impl TryFrom<&str> for Pattern {
    type Error = StrScanError;

    fn try_from(source: &str) -> Result<Self> {
        Pattern::new(source)
    }
}

impl TryFrom<String> for Pattern {
    type Error = StrScanError;

    fn try_from(source: String) -> Result<Self> {
        Pattern::new(&source)
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.source
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source.escape_default())
    }
}

/// The pattern argument of the scan operations.
///
/// A source string is resolved through the pattern cache of the scanner, a [Pattern] is used as
/// is. Both forms produce the same matches.
#[derive(Debug, Clone, Copy)]
pub enum PatternRef<'p> {
    /// Regex source text, compiled on first use and cached by the scanner.
    Source(&'p str),
    /// An already compiled pattern.
    Compiled(&'p Pattern),
}

impl<'p> From<&'p str> for PatternRef<'p> {
    fn from(source: &'p str) -> Self {
        PatternRef::Source(source)
    }
}

impl<'p> From<&'p String> for PatternRef<'p> {
    fn from(source: &'p String) -> Self {
        PatternRef::Source(source.as_str())
    }
}

impl<'p> From<&'p Pattern> for PatternRef<'p> {
    fn from(pattern: &'p Pattern) -> Self {
        PatternRef::Compiled(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StrScanErrorKind;

    #[test]
    fn test_captures_len() {
        assert_eq!(Pattern::new(r"t.st").unwrap().captures_len(), 0);
        assert_eq!(Pattern::new(r"(st).*(st)").unwrap().captures_len(), 2);
        assert_eq!(Pattern::new(r"(?:a)(?<n>b)").unwrap().captures_len(), 1);
    }

    #[test]
    fn test_literal_is_escaped() {
        let pattern = Pattern::literal("a.b(").unwrap();
        assert_eq!(pattern.as_str(), r"a\.b\(");
        assert_eq!(pattern.captures_len(), 0);
        assert!(pattern.regex().is_match("a.b("));
        assert!(!pattern.regex().is_match("axb("));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = "[a-".parse::<Pattern>().unwrap_err();
        assert!(matches!(
            *err.source,
            StrScanErrorKind::RegexSyntaxError(_, ref p) if p == "[a-"
        ));
    }

    #[test]
    fn test_equality_by_source() {
        let a = Pattern::new(r"\w+").unwrap();
        let b = Pattern::try_from(r"\w+".to_string()).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Pattern::new(r"\w*").unwrap());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_recompiles() {
        let pattern = Pattern::new(r"(\d+)\.(\d+)").unwrap();
        let json = serde_json::to_string(&pattern).unwrap();
        assert_eq!(json, r#""(\\d+)\\.(\\d+)""#);
        let back: Pattern = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pattern);
        assert_eq!(back.captures_len(), 2);
        assert!(serde_json::from_str::<Pattern>(r#""(""#).is_err());
    }
}
