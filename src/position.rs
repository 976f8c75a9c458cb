//! Module with the position type and functions.
//! A position is a struct that contains a line and column number.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position in the scanned input.
/// The position is represented by a line and column number.
/// The line and column numbers are 1-based, the column counts characters, not bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// The line number of the position.
    pub line: usize,
    /// The column number of the position.
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, column: usize) -> Self {
        debug_assert!(line > 0, "line number must be greater than 0");
        debug_assert!(column > 0, "column number must be greater than 0");
        Self { line, column }
    }

    /// Get the line number of the position.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the column number of the position.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Computes the position of the byte `offset` in `input`.
    ///
    /// Offsets beyond the end of the input are treated as the end of the input. An offset inside a
    /// multi-byte character is attributed to that character.
    pub(crate) fn of_offset(input: &str, offset: usize) -> Self {
        let mut end = offset.min(input.len());
        while !input.is_char_boundary(end) {
            end -= 1;
        }
        let before = &input[..end];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let line = before.bytes().filter(|b| *b == b'\n').count() + 1;
        let column = before[line_start..].chars().count() + 1;
        Self::new(line, column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line: {}, column: {}", self.line, self.column)
    }
}

/// A trait for providing the line and column information of a given byte offset in the input.
pub trait PositionProvider {
    /// Returns the position of the given offset.
    fn location(&self, offset: usize) -> Position;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position() {
        let pos = Position::new(1, 1);
        assert_eq!(pos.line(), 1);
        assert_eq!(pos.column(), 1);
        assert_eq!(format!("{}", pos), "line: 1, column: 1");
    }

    #[test]
    fn test_of_offset() {
        let input = "ab\ncd\n\näö";
        assert_eq!(Position::of_offset(input, 0), Position::new(1, 1));
        assert_eq!(Position::of_offset(input, 2), Position::new(1, 3));
        assert_eq!(Position::of_offset(input, 3), Position::new(2, 1));
        assert_eq!(Position::of_offset(input, 7), Position::new(4, 1));
        // 'ä' is two bytes long
        assert_eq!(Position::of_offset(input, 9), Position::new(4, 2));
        assert_eq!(Position::of_offset(input, 8), Position::new(4, 1));
        assert_eq!(Position::of_offset(input, 100), Position::new(4, 3));
    }
}
