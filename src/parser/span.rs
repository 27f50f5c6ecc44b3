//! Source location tracking for tokens and error messages.

use std::fmt;

use serde::Serialize;

/// A location in rule text (byte offset, line, column).
///
/// The tokenizer maintains these incrementally: line advances on `\n` and
/// the column resets, so every token and every error points at the exact
/// character a caller's editor should highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Location {
    /// Byte offset from start of input
    pub offset: usize,
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed, in characters not bytes)
    pub column: u32,
}

impl Location {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
