#![forbid(missing_docs)]
//! # `strscan`
//! The `strscan` crate provides a string scanner with a cursor, in the manner of Ruby's
//! `StringScanner`. It is meant for hand-written tokenizers and ad-hoc parsers that consume their
//! input piece by piece with regular expressions instead of doing index arithmetic around a regex
//! engine.
//!
//! The scanner keeps a position in an immutable input. [StringScanner::scan] matches a pattern
//! exactly at that position, [StringScanner::scan_until] finds the leftmost match at or after it.
//! A successful scan moves the position to the end of the match and keeps the match data
//! (matched text and capture groups) until the next attempt. A failed scan returns `None`, keeps
//! the position and clears the match data.
//!
//! Patterns can be given as source strings, which are compiled on first use and cached by the
//! scanner, or as precompiled [Pattern]s. To compile the regular expressions, the crate uses the
//! `regex-syntax` and `regex-automata` crates.
//!
//! # Example
//! ```rust
//! use strscan::{Pattern, StringScanner};
//!
//! fn main() -> strscan::Result<()> {
//!     let words = Pattern::new(r"\w+")?;
//!     let spaces = Pattern::new(r"\s+")?;
//!     let mut scanner = StringScanner::new("This is an example string");
//!
//!     assert_eq!(scanner.scan(&words)?, Some("This"));
//!     assert_eq!(scanner.scan(&words)?, None);
//!     assert_eq!(scanner.scan(&spaces)?, Some(" "));
//!     assert_eq!(scanner.scan(&words)?, Some("is"));
//!
//!     assert_eq!(scanner.scan_until(r"(ex)(a)")?, Some("exa"));
//!     assert_eq!(scanner.captures(), vec![Some("ex"), Some("a")]);
//!     assert_eq!(scanner.pos(), 14);
//!     assert_eq!(scanner.peek(4), "mple");
//!
//!     scanner.terminate();
//!     assert!(scanner.is_eos());
//!     assert_eq!(scanner.matched(), None);
//!     Ok(())
//! }
//! ```
//!
//! # Crate features
//! - `serde`: Enabled by default. Serialization of [Span], [Position] and [Pattern]. A pattern is
//!   serialized as its source and compiled again on deserialization.

/// Module with error definitions
mod errors;
pub use errors::{Result, StrScanError, StrScanErrorKind};

/// The module with internal implementation details.
mod internal;

/// Module that provides the view of the last match
mod match_type;
pub use match_type::ScanMatch;

/// Module that provides a Pattern type
mod pattern;
pub use pattern::{Pattern, PatternRef};

/// Module that provides a position type
mod position;
pub use position::{Position, PositionProvider};

/// The module with the scanner.
mod scanner;
pub use scanner::StringScanner;

/// Module that provides a Span type
mod span;
pub use span::Span;
