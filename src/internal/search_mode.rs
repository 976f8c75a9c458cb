use log::trace;
use regex_automata::{util::captures::Captures, Anchored, Input};

use crate::Pattern;

/// The strategy of a scan operation.
///
/// Both strategies search a region that starts at the scanner's cursor. The region is handed to
/// the regex engine as a haystack of its own, so assertions like `^` or `\b` see the cursor as the
/// start of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchMode {
    /// The match must start exactly at the start of the region.
    Anchored,
    /// The leftmost match starting anywhere in the region.
    Leftmost,
}

impl SearchMode {
    /// Searches `region` for `pattern`.
    ///
    /// Returns the capture slots of the match, with spans relative to the start of `region`, or
    /// `None` if the pattern does not match.
    pub(crate) fn find(self, pattern: &Pattern, region: &str) -> Option<Captures> {
        let anchored = match self {
            SearchMode::Anchored => Anchored::Yes,
            SearchMode::Leftmost => Anchored::No,
        };
        let input = Input::new(region).anchored(anchored);
        let regex = pattern.regex();
        let mut captures = regex.create_captures();
        regex.search_captures(&input, &mut captures);
        if captures.is_match() {
            trace!(
                "{:?} match of '{}' at {:?}",
                self,
                pattern,
                captures.get_match().map(|m| m.span())
            );
            Some(captures)
        } else {
            trace!("{:?} search for '{}' found no match", self, pattern);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span_of(mode: SearchMode, pattern: &str, region: &str) -> Option<(usize, usize)> {
        let pattern = Pattern::new(pattern).unwrap();
        mode.find(&pattern, region)
            .and_then(|c| c.get_match())
            .map(|m| (m.start(), m.end()))
    }

    #[test]
    fn test_anchored_requires_start() {
        assert_eq!(span_of(SearchMode::Anchored, "est", "test st"), None);
        assert_eq!(span_of(SearchMode::Anchored, "t.st", "test st"), Some((0, 4)));
    }

    #[test]
    fn test_leftmost_skips_prefix() {
        assert_eq!(span_of(SearchMode::Leftmost, "est", "test st"), Some((1, 4)));
        assert_eq!(span_of(SearchMode::Leftmost, "xyz", "test st"), None);
    }

    #[test]
    fn test_start_assertion_sees_region_start() {
        assert_eq!(span_of(SearchMode::Anchored, "^st", "st"), Some((0, 2)));
        assert_eq!(span_of(SearchMode::Leftmost, "^st", "test st"), None);
    }

    #[test]
    fn test_groups_are_reported() {
        let pattern = Pattern::new("(st).*(st)").unwrap();
        let captures = SearchMode::Leftmost.find(&pattern, "test st").unwrap();
        assert_eq!(captures.group_len(), 3);
        assert_eq!(captures.get_group(1).map(|s| s.range()), Some(2..4));
        assert_eq!(captures.get_group(2).map(|s| s.range()), Some(5..7));
    }
}
