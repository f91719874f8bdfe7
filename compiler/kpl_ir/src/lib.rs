//! KPL IR - token model shared by the scanner and the parser.
//!
//! This crate contains the data exchanged across the scanner/parser seam:
//! - `Position` for line/column source locations
//! - `Token`, `TokenKind` and `Lexeme` for classified lexical units
//! - `LexError` for failures raised by a scanner
//! - `TokenSource` and `TokenBuffer` for pulling tokens one at a time
//!
//! The scanner itself lives outside this workspace; anything that can hand
//! out `Token`s through [`TokenSource::next_token`] can drive the parser.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod lex_error;
mod position;
mod source;
mod token;

pub use lex_error::{LexError, LexErrorKind};
pub use position::Position;
pub use source::{TokenBuffer, TokenSource};
pub use token::{Lexeme, Token, TokenKind};
