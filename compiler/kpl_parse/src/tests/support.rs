//! Token streams for tests, written as whitespace-separated words.
//!
//! Every token must be its own word: `x := a [ 1 ] ;`, not `x:=a[1];`.
//! Keywords and symbols map to their kinds, digit runs to numbers, `'c'`
//! to char literals, anything else to identifiers. Positions are the
//! 1-based line and column of each word.

use kpl_ir::{Position, Token, TokenBuffer, TokenKind};

use crate::{parse, Accepted, ParseError};

pub(crate) fn tokens(src: &str) -> Vec<Token> {
    let mut out = Vec::new();
    for (line_idx, line) in src.lines().enumerate() {
        let line_no = u32::try_from(line_idx + 1).unwrap();
        let mut start = None;
        for (i, ch) in line.char_indices().chain(std::iter::once((line.len(), ' '))) {
            if ch.is_whitespace() {
                if let Some(s) = start.take() {
                    let column = u32::try_from(s + 1).unwrap();
                    out.push(word(&line[s..i], Position::new(line_no, column)));
                }
            } else if start.is_none() {
                start = Some(i);
            }
        }
    }
    out
}

pub(crate) fn words(src: &str) -> TokenBuffer {
    TokenBuffer::new(tokens(src))
}

pub(crate) fn parse_words(src: &str) -> Result<Accepted, ParseError> {
    parse(words(src))
}

#[track_caller]
pub(crate) fn assert_accepts(src: &str) {
    if let Err(err) = parse_words(src) {
        panic!("expected `{src}` to parse, got: {err}");
    }
}

#[track_caller]
pub(crate) fn reject(src: &str) -> ParseError {
    match parse_words(src) {
        Ok(Accepted) => panic!("expected `{src}` to be rejected"),
        Err(err) => err,
    }
}

/// Wrap statements in a minimal program.
pub(crate) fn program_with_body(decls: &str, body: &str) -> String {
    format!("program test ; {decls} begin {body} end .")
}

fn word(text: &str, position: Position) -> Token {
    if let Some(kind) = TokenKind::keyword(text) {
        return Token::new(kind, position);
    }
    if let Some(kind) = symbol(text) {
        return Token::new(kind, position);
    }
    if text.chars().all(|c| c.is_ascii_digit()) {
        return Token::number(text.parse().unwrap(), position);
    }
    let chars: Vec<char> = text.chars().collect();
    if chars.len() == 3 && chars[0] == '\'' && chars[2] == '\'' {
        return Token::char_lit(chars[1], position);
    }
    assert!(
        chars[0].is_alphabetic() && chars.iter().all(|c| c.is_alphanumeric() || *c == '_'),
        "not a single token: `{text}`"
    );
    Token::ident(text, position)
}

fn symbol(text: &str) -> Option<TokenKind> {
    let kind = match text {
        ";" => TokenKind::Semicolon,
        ":" => TokenKind::Colon,
        "." => TokenKind::Period,
        "," => TokenKind::Comma,
        ":=" => TokenKind::Assign,
        "=" => TokenKind::Eq,
        "<>" => TokenKind::NotEq,
        "<" => TokenKind::Lt,
        "<=" => TokenKind::LtEq,
        ">" => TokenKind::Gt,
        ">=" => TokenKind::GtEq,
        "+" => TokenKind::Plus,
        "-" => TokenKind::Minus,
        "*" => TokenKind::Star,
        "/" => TokenKind::Slash,
        "(" => TokenKind::LParen,
        ")" => TokenKind::RParen,
        "[" => TokenKind::LBracket,
        "]" => TokenKind::RBracket,
        _ => return None,
    };
    Some(kind)
}

#[test]
fn test_words_positions() {
    let toks = tokens("program p ;\n  begin");
    let shape: Vec<_> = toks.iter().map(|t| (t.kind, t.position)).collect();
    assert_eq!(
        shape,
        vec![
            (TokenKind::Program, Position::new(1, 1)),
            (TokenKind::Ident, Position::new(1, 9)),
            (TokenKind::Semicolon, Position::new(1, 11)),
            (TokenKind::Begin, Position::new(2, 3)),
        ]
    );
}

#[test]
fn test_words_literals() {
    let toks = tokens("42 'a' x1");
    assert_eq!(toks[0], Token::number(42, Position::new(1, 1)));
    assert_eq!(toks[1], Token::char_lit('a', Position::new(1, 4)));
    assert_eq!(toks[2], Token::ident("x1", Position::new(1, 8)));
}
