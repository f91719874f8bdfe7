//! Two-token cursor over a token source.
//!
//! Holds the token most recently consumed (`current`) and the next one to
//! consume (`lookahead`). Advancing drops `current`, shifts `lookahead` into
//! its slot and pulls one new token from the source.

use kpl_ir::{Token, TokenKind, TokenSource};
use tracing::trace;

use crate::echo::TokenEcho;
use crate::error::{Nonterminal, ParseError};

/// Cursor for consuming tokens during parsing.
///
/// Invariant: `lookahead` is always a real token. Once it is `Eof` the
/// source is never asked for another token.
pub struct Cursor<'e, S> {
    source: S,
    current: Option<Token>,
    lookahead: Token,
    echo: Option<&'e mut dyn TokenEcho>,
}

impl<'e, S: TokenSource> Cursor<'e, S> {
    /// Take ownership of `source` and prime the lookahead with its first token.
    ///
    /// `current` starts out unset; no rule reads it before the first advance.
    pub fn new(mut source: S) -> Result<Self, ParseError> {
        let lookahead = source.next_token()?;
        trace!(kind = %lookahead.kind.display_name(), "prime lookahead");
        Ok(Cursor {
            source,
            current: None,
            lookahead,
            echo: None,
        })
    }

    /// Send every token consumed by [`expect`](Self::expect) to `echo`.
    pub fn set_echo(&mut self, echo: &'e mut dyn TokenEcho) {
        self.echo = Some(echo);
    }

    /// The last consumed token; `None` before the first advance.
    #[inline]
    pub fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// The next unconsumed token.
    #[inline]
    pub fn lookahead(&self) -> &Token {
        &self.lookahead
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.lookahead.kind
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.lookahead.kind == kind
    }

    #[inline]
    pub fn check_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.lookahead.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.lookahead.is_eof()
    }

    /// Shift `lookahead` into `current` and pull the next token.
    ///
    /// The previous `current` is dropped here. Scanner failures propagate
    /// unchanged. At `Eof` the source is left alone and `Eof` stays in the
    /// lookahead.
    pub fn advance(&mut self) -> Result<(), ParseError> {
        let next = if self.lookahead.is_eof() {
            self.lookahead.clone()
        } else {
            self.source.next_token()?
        };
        let consumed = std::mem::replace(&mut self.lookahead, next);
        trace!(
            kind = %consumed.kind.display_name(),
            line = consumed.position.line,
            column = consumed.position.column,
            "advance"
        );
        self.current = Some(consumed);
        Ok(())
    }

    /// Consume the lookahead if it is `kind`, echoing it first.
    ///
    /// On mismatch nothing is consumed and the error names `kind` and the
    /// offending lookahead.
    pub fn expect(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.lookahead.kind != kind {
            return Err(ParseError::unexpected_token(kind, self.lookahead.clone()));
        }
        if let Some(echo) = self.echo.as_deref_mut() {
            echo.echo(&self.lookahead);
        }
        self.advance()
    }

    /// Consume the lookahead if it is `kind`; report whether it was.
    ///
    /// For optional terminals, which are present iff the lookahead matches.
    pub fn eat(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        if self.check(kind) {
            self.expect(kind)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consume the lookahead if it is any of `kinds`, returning which one.
    pub fn eat_any(&mut self, kinds: &[TokenKind]) -> Result<Option<TokenKind>, ParseError> {
        let kind = self.kind();
        if kinds.contains(&kind) {
            self.expect(kind)?;
            Ok(Some(kind))
        } else {
            Ok(None)
        }
    }

    /// `InvalidConstruct` for `nonterminal` at the current lookahead.
    #[cold]
    pub fn invalid(&self, nonterminal: Nonterminal) -> ParseError {
        ParseError::invalid_construct(nonterminal, self.lookahead.clone())
    }

    /// Check that the input is exhausted.
    ///
    /// The `Eof` token is echoed like any other consumed token.
    pub fn finish(mut self) -> Result<(), ParseError> {
        if !self.is_at_end() {
            return Err(ParseError::unexpected_token(
                TokenKind::Eof,
                self.lookahead.clone(),
            ));
        }
        if let Some(echo) = self.echo.as_deref_mut() {
            echo.echo(&self.lookahead);
        }
        trace!(line = self.lookahead.position.line, "end of input");
        Ok(())
    }
}
