//! Tokens handed from the scanner to the parser.

mod kind;

pub use kind::TokenKind;

use std::fmt;

use crate::Position;

/// The value a token carries besides its kind.
///
/// Only identifiers, numbers and char literals have one; the spelling of
/// keywords and symbols is implied by their kind.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Lexeme {
    Ident(String),
    Number(u64),
    Char(char),
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lexeme::Ident(name) => f.write_str(name),
            Lexeme::Number(n) => write!(f, "{n}"),
            Lexeme::Char(c) => write!(f, "'{c}'"),
        }
    }
}

/// A classified lexical unit. Immutable once the scanner produced it.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: Option<Lexeme>,
    pub position: Position,
}

impl Token {
    /// Token without an associated value (keywords, symbols, EOF).
    #[inline]
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Token {
            kind,
            lexeme: None,
            position,
        }
    }

    pub fn ident(name: impl Into<String>, position: Position) -> Self {
        Token {
            kind: TokenKind::Ident,
            lexeme: Some(Lexeme::Ident(name.into())),
            position,
        }
    }

    pub fn number(value: u64, position: Position) -> Self {
        Token {
            kind: TokenKind::Number,
            lexeme: Some(Lexeme::Number(value)),
            position,
        }
    }

    pub fn char_lit(value: char, position: Position) -> Self {
        Token {
            kind: TokenKind::CharLit,
            lexeme: Some(Lexeme::Char(value)),
            position,
        }
    }

    pub fn eof(position: Position) -> Self {
        Token::new(TokenKind::Eof, position)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// `line-column:kind`, followed by the value in parentheses when there is one.
///
/// This is the line format of the parser's token echo.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}:{}",
            self.position.line,
            self.position.column,
            self.kind.display_name()
        )?;
        if let Some(lexeme) = &self.lexeme {
            write!(f, "({lexeme})")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lexeme {
            Some(lexeme) => write!(f, "{:?}({lexeme}) @ {}", self.kind, self.position),
            None => write!(f, "{:?} @ {}", self.kind, self.position),
        }
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::TokenKind;
    crate::static_assert_size!(TokenKind, 1);
}

#[cfg(test)]
mod tests;
