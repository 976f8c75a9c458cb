use thiserror::Error;

/// The result type for the `strscan` crate.
pub type Result<T> = std::result::Result<T, StrScanError>;

/// The error type for the `strscan` crate.
#[derive(Error, Debug)]
pub struct StrScanError {
    /// The source of the error.
    pub source: Box<StrScanErrorKind>,
}

impl StrScanError {
    /// Create a new `StrScanError`.
    pub fn new(kind: StrScanErrorKind) -> Self {
        StrScanError {
            source: Box::new(kind),
        }
    }

    /// The pattern source that caused the error.
    pub fn pattern(&self) -> &str {
        match &*self.source {
            StrScanErrorKind::RegexSyntaxError(_, pattern)
            | StrScanErrorKind::RegexBuildError(_, pattern) => pattern,
        }
    }
}

impl std::fmt::Display for StrScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum StrScanErrorKind {
    /// The pattern source is not a valid regular expression.
    #[error("'{1}' {0}")]
    RegexSyntaxError(regex_syntax::Error, String),

    /// The pattern could be parsed but the regex engine failed to compile it.
    #[error("'{1}' {0}")]
    RegexBuildError(regex_automata::meta::BuildError, String),
}

impl StrScanError {
    pub(crate) fn syntax(error: regex_syntax::Error, pattern: &str) -> Self {
        StrScanError::new(StrScanErrorKind::RegexSyntaxError(
            error,
            pattern.to_string(),
        ))
    }

    pub(crate) fn build(error: regex_automata::meta::BuildError, pattern: &str) -> Self {
        StrScanError::new(StrScanErrorKind::RegexBuildError(
            error,
            pattern.to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::Pattern;

    use super::*;

    #[test]
    fn test_syntax_error_names_the_pattern() {
        let err = Pattern::new("(unclosed").unwrap_err();
        assert_eq!(err.pattern(), "(unclosed");
        assert!(matches!(
            *err.source,
            StrScanErrorKind::RegexSyntaxError(_, _)
        ));
        assert!(err.to_string().starts_with("'(unclosed' "));
    }
}
