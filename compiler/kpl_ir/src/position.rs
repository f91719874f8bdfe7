//! Source positions.

use std::fmt;

/// Line/column location of a token, 1-based, as reported by the scanner.
///
/// The parser never computes positions; it only forwards the ones it
/// receives so diagnostics can point at the offending token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Position used by tokens fabricated without a source.
    pub const DUMMY: Position = Position { line: 0, column: 0 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
