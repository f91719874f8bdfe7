//! Diagnostic echo of consumed tokens.
//!
//! An observability side channel: whatever a sink does with the tokens it
//! receives has no effect on whether the input is accepted.

use std::io;

use kpl_ir::Token;
use tracing::warn;

/// Receives every token the parser consumes, in order.
pub trait TokenEcho {
    fn echo(&mut self, token: &Token);
}

/// Collects the consumed tokens.
impl TokenEcho for Vec<Token> {
    fn echo(&mut self, token: &Token) {
        self.push(token.clone());
    }
}

/// Writes one line per consumed token, in `Token`'s `Display` format.
#[derive(Debug)]
pub struct WriterEcho<W> {
    writer: W,
}

impl<W: io::Write> WriterEcho<W> {
    pub fn new(writer: W) -> Self {
        WriterEcho { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> TokenEcho for WriterEcho<W> {
    fn echo(&mut self, token: &Token) {
        if let Err(error) = writeln!(self.writer, "{token}") {
            warn!(%error, "token echo write failed");
        }
    }
}
