//! Predictive parser for KPL, a small Pascal-like teaching language.
//!
//! A pure syntax acceptor: it consumes a token stream with one token of
//! lookahead, one method per grammar nonterminal, and reports either
//! acceptance or the first defect. No tree is built.
//!
//! ```text
//! let source = TokenBuffer::new(tokens);
//! kpl_parse::parse(source)?;
//! ```

mod cursor;
mod echo;
mod error;
mod grammar;
mod stack;

#[cfg(test)]
mod tests;

pub use cursor::Cursor;
pub use echo::{TokenEcho, WriterEcho};
pub use error::{ErrorCode, Nonterminal, ParseError};

use std::sync::Once;

use kpl_ir::{TokenKind, TokenSource};
use tracing::debug;

/// Marker returned when the whole input derives from `Program`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accepted;

/// A parse session: owns the token source for the duration of one parse.
pub struct Parser<'e, S> {
    cursor: Cursor<'e, S>,
}

impl<'e, S: TokenSource> Parser<'e, S> {
    /// Open a session, pulling the first token from `source`.
    pub fn new(source: S) -> Result<Self, ParseError> {
        Ok(Parser {
            cursor: Cursor::new(source)?,
        })
    }

    /// Echo every consumed token to `echo`.
    #[must_use]
    pub fn with_echo(mut self, echo: &'e mut dyn TokenEcho) -> Self {
        self.cursor.set_echo(echo);
        self
    }

    /// Recognize one `Program` followed by end of input.
    ///
    /// The session and its token source are dropped on return, whatever
    /// the outcome.
    pub fn parse(mut self) -> Result<Accepted, ParseError> {
        let result = self
            .parse_program()
            .and_then(|()| self.cursor.finish())
            .map(|()| Accepted);
        if let Err(err) = &result {
            debug!(code = %err.code(), position = %err.position(), "parse failed: {err}");
        }
        result
    }

    // Cursor delegation, so grammar rules read as `self.expect(..)`.

    #[inline]
    fn kind(&self) -> TokenKind {
        self.cursor.kind()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn expect(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        self.cursor.expect(kind)
    }

    #[inline]
    fn eat(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        self.cursor.eat(kind)
    }

    #[inline]
    fn eat_any(&mut self, kinds: &[TokenKind]) -> Result<Option<TokenKind>, ParseError> {
        self.cursor.eat_any(kinds)
    }

    #[inline]
    fn invalid(&self, nonterminal: Nonterminal) -> ParseError {
        self.cursor.invalid(nonterminal)
    }
}

/// Parse a whole token stream.
pub fn parse<S: TokenSource>(source: S) -> Result<Accepted, ParseError> {
    Parser::new(source)?.parse()
}

/// Parse a whole token stream, echoing every consumed token to `echo`.
pub fn parse_with_echo<S: TokenSource>(
    source: S,
    echo: &mut dyn TokenEcho,
) -> Result<Accepted, ParseError> {
    Parser::new(source)?.with_echo(echo).parse()
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for parser diagnostics.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=kpl_parse=debug` or `RUST_LOG=kpl_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
