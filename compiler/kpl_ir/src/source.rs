//! Token sources: the "next token" seam between scanner and parser.

use std::collections::VecDeque;

use crate::{LexError, Position, Token};

/// Anything that hands out tokens one at a time.
///
/// A source that runs out of input must keep answering with an end-of-file
/// token; the parser stops pulling once it has seen one.
pub trait TokenSource {
    fn next_token(&mut self) -> Result<Token, LexError>;
}

impl<T: TokenSource + ?Sized> TokenSource for &mut T {
    #[inline]
    fn next_token(&mut self) -> Result<Token, LexError> {
        (**self).next_token()
    }
}

impl<T: TokenSource + ?Sized> TokenSource for Box<T> {
    #[inline]
    fn next_token(&mut self) -> Result<Token, LexError> {
        (**self).next_token()
    }
}

/// In-memory token source over already-scanned tokens.
///
/// Yields the buffered items in order, then `Eof` forever. When the input
/// carries no `Eof` of its own, one is synthesized one column past the last
/// item. Anything buffered after an explicit `Eof` is discarded.
#[derive(Clone, Debug)]
pub struct TokenBuffer {
    items: VecDeque<Result<Token, LexError>>,
    eof: Position,
}

impl TokenBuffer {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_results(tokens.into_iter().map(Ok).collect())
    }

    /// Buffer that may fail part way, as a scanner would on bad input.
    pub fn with_results(items: Vec<Result<Token, LexError>>) -> Self {
        let eof = match items.last() {
            Some(Ok(token)) if token.is_eof() => token.position,
            Some(Ok(Token { position, .. }) | Err(LexError { position, .. })) => {
                Position::new(position.line, position.column + 1)
            }
            None => Position::new(1, 1),
        };
        TokenBuffer {
            items: items.into(),
            eof,
        }
    }

    /// Number of buffered items not yet handed out.
    pub fn remaining(&self) -> usize {
        self.items.len()
    }
}

impl TokenSource for TokenBuffer {
    fn next_token(&mut self) -> Result<Token, LexError> {
        match self.items.pop_front() {
            Some(Ok(token)) if token.is_eof() => {
                self.eof = token.position;
                self.items.clear();
                Ok(token)
            }
            Some(item) => item,
            None => Ok(Token::eof(self.eof)),
        }
    }
}
