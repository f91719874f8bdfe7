//! Errors raised by a scanner.
//!
//! The parser never produces these; it forwards them unchanged when the
//! token source fails to classify the next characters.

use thiserror::Error;

use crate::Position;

/// Why a scanner could not produce the next token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// A character that starts no token.
    InvalidSymbol(char),
    /// Identifier longer than the scanner accepts.
    IdentTooLong,
    /// Integer literal that does not fit the scanner's number type.
    NumberTooLong,
    /// Malformed `'c'` literal.
    InvalidCharConstant,
    /// Comment still open at end of input.
    UnterminatedComment,
}

impl LexErrorKind {
    pub fn description(&self) -> String {
        match self {
            LexErrorKind::InvalidSymbol(c) => format!("invalid symbol `{c}`"),
            LexErrorKind::IdentTooLong => "identifier too long".to_string(),
            LexErrorKind::NumberTooLong => "number too long".to_string(),
            LexErrorKind::InvalidCharConstant => "invalid char constant".to_string(),
            LexErrorKind::UnterminatedComment => "end of input inside a comment".to_string(),
        }
    }
}

/// A lexical failure at a source position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{position}: {}", .kind.description())]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: Position,
}

impl LexError {
    #[cold]
    pub fn new(kind: LexErrorKind, position: Position) -> Self {
        LexError { kind, position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_position() {
        let err = LexError::new(LexErrorKind::InvalidSymbol('#'), Position::new(4, 9));
        assert_eq!(err.to_string(), "4:9: invalid symbol `#`");
    }

    #[test]
    fn test_unterminated_comment_message() {
        let err = LexError::new(LexErrorKind::UnterminatedComment, Position::new(10, 1));
        assert_eq!(err.to_string(), "10:1: end of input inside a comment");
    }
}
