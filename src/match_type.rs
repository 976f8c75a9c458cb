use regex_automata::util::captures::Captures;

use super::Span;

/// The result of the last successful scan operation, as stored by the scanner.
///
/// The spans in `captures` are relative to the region the match was searched in, `base` is the
/// offset of that region in the input.
#[derive(Debug, Clone)]
pub(crate) struct LastMatch {
    pub(crate) base: usize,
    pub(crate) captures: Captures,
}

impl LastMatch {
    /// The span of the whole match in input coordinates.
    #[inline]
    pub(crate) fn span(&self) -> Span {
        self.group_span(0).unwrap_or(Span::new(self.base, self.base))
    }

    /// The span of group `index` in input coordinates, `None` if the group did not participate.
    #[inline]
    pub(crate) fn group_span(&self, index: usize) -> Option<Span> {
        self.captures
            .get_group(index)
            .map(|span| Span::from(span).offset_by(self.base))
    }
}

/// A read-only view of the last match of a [crate::StringScanner].
///
/// * `'s` is the lifetime of the borrow of the scanner.
/// * `'h` represents the lifetime of the input being scanned.
#[derive(Debug, Clone, Copy)]
pub struct ScanMatch<'s, 'h> {
    input: &'h str,
    last: &'s LastMatch,
}

impl<'s, 'h> ScanMatch<'s, 'h> {
    pub(crate) fn new(input: &'h str, last: &'s LastMatch) -> Self {
        Self { input, last }
    }

    /// Get the start of the match.
    #[inline]
    pub fn start(&self) -> usize {
        self.last.span().start
    }

    /// Get the end of the match.
    #[inline]
    pub fn end(&self) -> usize {
        self.last.span().end
    }

    /// Get the span of the match.
    #[inline]
    pub fn span(&self) -> Span {
        self.last.span()
    }

    /// Get the length of the match in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.span().len()
    }

    /// Check if the match is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span().is_empty()
    }

    /// The matched text.
    #[inline]
    pub fn as_str(&self) -> &'h str {
        &self.input[self.span().range()]
    }

    /// The number of capture groups of the pattern, not counting the whole match.
    #[inline]
    pub fn captures_len(&self) -> usize {
        self.last.captures.group_len().saturating_sub(1)
    }

    /// The text of group `index`. Group 0 is the whole match.
    /// Returns `None` if the group does not exist or did not participate in the match.
    pub fn get(&self, index: usize) -> Option<&'h str> {
        self.last
            .group_span(index)
            .map(|span| &self.input[span.range()])
    }

    /// The text of the group with the given name.
    pub fn name(&self, name: &str) -> Option<&'h str> {
        self.last
            .captures
            .get_group_by_name(name)
            .map(|span| &self.input[Span::from(span).offset_by(self.last.base).range()])
    }

    /// The texts of the groups 1..N in order. A group that did not participate is `None`.
    pub fn captures(&self) -> Vec<Option<&'h str>> {
        (1..self.last.captures.group_len())
            .map(|index| self.get(index))
            .collect()
    }
}
