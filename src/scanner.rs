use log::trace;

use crate::{
    internal::{PatternCache, SearchMode},
    match_type::LastMatch,
    PatternRef, Position, PositionProvider, Result, ScanMatch, Span,
};

/// Source of the pattern used by [StringScanner::get_char].
const ANY_CHAR: &str = r"(?s:.)";

/// A string scanner.
///
/// The scanner holds a cursor into an immutable input and tries to match regular expressions at
/// or after the cursor. A successful scan moves the cursor to the end of the match and keeps the
/// match data until the next scan attempt, [StringScanner::reset] or
/// [StringScanner::terminate]. A failed scan leaves the cursor where it is and clears the match
/// data.
///
/// * `'h` represents the lifetime of the input being scanned.
///
/// Offsets are byte offsets into the input. The input may be absent, in which case the scanner is
/// always at the end and every scan fails.
///
/// Patterns given as source strings are compiled once and cached for the lifetime of the scanner.
/// Each scanner owns its cache, so scanners over the same input are independent of each other.
#[derive(Debug, Clone)]
pub struct StringScanner<'h> {
    input: Option<&'h str>,
    pos: usize,
    last_match: Option<LastMatch>,
    cache: PatternCache,
}

impl<'h> StringScanner<'h> {
    /// Creates a new scanner at position 0 without match data.
    /// ```rust
    /// use strscan::StringScanner;
    ///
    /// let scanner = StringScanner::new("some input");
    /// assert_eq!(scanner.pos(), 0);
    /// let empty = StringScanner::new(None);
    /// assert!(empty.is_eos());
    /// ```
    pub fn new(input: impl Into<Option<&'h str>>) -> Self {
        Self {
            input: input.into(),
            pos: 0,
            last_match: None,
            cache: PatternCache::new(),
        }
    }

    /// The input of the scanner.
    #[inline]
    pub fn input(&self) -> Option<&'h str> {
        self.input
    }

    /// The current position of the cursor.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Sets the position from which the next scan starts.
    ///
    /// The value is not validated and the match data is kept. A position beyond the end of the
    /// input or inside a multi-byte character makes every following scan fail.
    #[inline]
    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Returns true if the input is absent or the cursor is at or beyond its end.
    #[inline]
    pub fn is_eos(&self) -> bool {
        self.input.map_or(true, |input| self.pos >= input.len())
    }

    /// Returns true if the cursor is at the start of the input or right after a newline.
    pub fn is_beginning_of_line(&self) -> bool {
        self.pos == 0
            || self
                .input
                .and_then(|input| input.as_bytes().get(self.pos - 1))
                .is_some_and(|b| *b == b'\n')
    }

    /// The text of the last match, `None` if the last scan failed or nothing was scanned yet.
    #[inline]
    pub fn matched(&self) -> Option<&'h str> {
        self.last_match().map(|ma| ma.as_str())
    }

    /// The span of the last match.
    #[inline]
    pub fn matched_span(&self) -> Option<Span> {
        self.last_match.as_ref().map(LastMatch::span)
    }

    /// The length in bytes of the last match.
    #[inline]
    pub fn matched_size(&self) -> Option<usize> {
        self.matched_span().map(|span| span.len())
    }

    /// The subgroups of the last match, not including the whole match.
    ///
    /// A group that did not participate in the match is `None`. Without match data the result is
    /// empty.
    pub fn captures(&self) -> Vec<Option<&'h str>> {
        self.last_match()
            .map(|ma| ma.captures())
            .unwrap_or_default()
    }

    /// The text of the named group of the last match.
    pub fn named_capture(&self, name: &str) -> Option<&'h str> {
        self.last_match().and_then(|ma| ma.name(name))
    }

    /// A view of the last match.
    pub fn last_match(&self) -> Option<ScanMatch<'_, 'h>> {
        match (self.input, &self.last_match) {
            (Some(input), Some(last)) => Some(ScanMatch::new(input, last)),
            _ => None,
        }
    }

    /// The input before the last match.
    pub fn pre_match(&self) -> Option<&'h str> {
        let span = self.matched_span()?;
        self.input.map(|input| &input[..span.start])
    }

    /// The input after the last match.
    pub fn post_match(&self) -> Option<&'h str> {
        let span = self.matched_span()?;
        self.input.map(|input| &input[span.end..])
    }

    /// The input from the cursor to the end. Empty if the cursor is not inside the input.
    pub fn rest(&self) -> &'h str {
        self.input
            .and_then(|input| input.get(self.pos..))
            .unwrap_or_default()
    }

    /// The length in bytes of [StringScanner::rest].
    #[inline]
    pub fn rest_size(&self) -> usize {
        self.rest().len()
    }

    /// Returns the next `len` bytes of the input without moving the cursor.
    ///
    /// Returns less if the input ends earlier. The end is moved back to a character boundary, so
    /// a multi-byte character that doesn't fit completely is left out.
    pub fn peek(&self, len: usize) -> &'h str {
        let rest = self.rest();
        let mut end = len.min(rest.len());
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        &rest[..end]
    }

    /// Moves the cursor to the start and clears the match data.
    pub fn reset(&mut self) {
        trace!("Reset");
        self.pos = 0;
        self.last_match = None;
    }

    /// Moves the cursor to the end of the input and clears the match data.
    pub fn terminate(&mut self) {
        trace!("Terminate");
        self.pos = self.input.map_or(0, str::len);
        self.last_match = None;
    }

    /// Tries to match `pattern` exactly at the cursor.
    ///
    /// On a match the cursor advances to its end and the matched text is returned. Otherwise
    /// `None` is returned and the cursor stays.
    /// The only error is a pattern source that can't be compiled, it leaves the scanner untouched.
    /// ```rust
    /// use strscan::StringScanner;
    ///
    /// let mut scanner = StringScanner::new("test st");
    /// assert_eq!(scanner.scan("est")?, None);
    /// scanner.set_pos(1);
    /// assert_eq!(scanner.scan("est")?, Some("est"));
    /// assert_eq!(scanner.pos(), 4);
    /// # Ok::<(), strscan::StrScanError>(())
    /// ```
    pub fn scan<'p>(&mut self, pattern: impl Into<PatternRef<'p>>) -> Result<Option<&'h str>> {
        self.scan_with(pattern.into(), SearchMode::Anchored)
    }

    /// Tries to find `pattern` anywhere at or after the cursor.
    ///
    /// On a match the cursor advances to the end of the match, skipping any text before it. Only
    /// the text of the match itself is returned.
    /// ```rust
    /// use strscan::StringScanner;
    ///
    /// let mut scanner = StringScanner::new("test st");
    /// assert_eq!(scanner.scan_until("(st).*(st)")?, Some("st st"));
    /// assert_eq!(scanner.captures(), vec![Some("st"), Some("st")]);
    /// assert_eq!(scanner.pos(), 7);
    /// # Ok::<(), strscan::StrScanError>(())
    /// ```
    pub fn scan_until<'p>(
        &mut self,
        pattern: impl Into<PatternRef<'p>>,
    ) -> Result<Option<&'h str>> {
        self.scan_with(pattern.into(), SearchMode::Leftmost)
    }

    /// Like [StringScanner::scan], but returns the length of the match.
    pub fn skip<'p>(&mut self, pattern: impl Into<PatternRef<'p>>) -> Result<Option<usize>> {
        Ok(self
            .scan_with(pattern.into(), SearchMode::Anchored)?
            .map(str::len))
    }

    /// Like [StringScanner::scan_until], but returns the number of bytes the cursor advanced,
    /// including the text skipped before the match.
    pub fn skip_until<'p>(
        &mut self,
        pattern: impl Into<PatternRef<'p>>,
    ) -> Result<Option<usize>> {
        let start = self.pos;
        Ok(self
            .scan_with(pattern.into(), SearchMode::Leftmost)?
            .map(|_| self.pos - start))
    }

    /// Consumes the next character, newlines included, and returns it as the matched text.
    pub fn get_char(&mut self) -> Option<&'h str> {
        // The pattern source is valid, so scanning can't fail.
        self.scan(ANY_CHAR).ok().flatten()
    }

    /// The number of patterns compiled and cached by this scanner.
    #[inline]
    pub fn cached_patterns(&self) -> usize {
        self.cache.len()
    }

    /// The line and column of the cursor.
    pub fn cursor_location(&self) -> Position {
        self.location(self.pos)
    }

    fn scan_with(&mut self, pattern: PatternRef<'_>, mode: SearchMode) -> Result<Option<&'h str>> {
        let pattern = match pattern {
            PatternRef::Compiled(pattern) => pattern,
            PatternRef::Source(source) => self.cache.get(source)?,
        };
        let Some(input) = self.input else {
            return Ok(None);
        };
        trace!("{:?} scan for '{}' at {}", mode, pattern, self.pos);

        // A cursor outside of the input or inside a character has no region to search in.
        let Some(region) = input.get(self.pos..) else {
            self.last_match = None;
            return Ok(None);
        };

        match mode.find(pattern, region) {
            Some(captures) => {
                let last = LastMatch {
                    base: self.pos,
                    captures,
                };
                let span = last.span();
                self.pos = span.end;
                self.last_match = Some(last);
                Ok(Some(&input[span.range()]))
            }
            None => {
                self.last_match = None;
                Ok(None)
            }
        }
    }
}

impl PositionProvider for StringScanner<'_> {
    /// Returns the line and column numbers of the given offset.
    /// Offsets beyond the end of the input are reported as the end of the input.
    fn location(&self, offset: usize) -> Position {
        Position::of_offset(self.input.unwrap_or_default(), offset)
    }
}
