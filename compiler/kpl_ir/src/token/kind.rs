//! Token kinds for KPL.

use std::fmt;

/// Every kind of token the scanner can produce.
///
/// Field-less so the parser can compare kinds directly; identifier and
/// literal values travel in [`Lexeme`](super::Lexeme).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Ident,
    Number,
    CharLit,

    Program,
    Const,
    Type,
    Var,
    Integer,
    Char,
    Array,
    Of,
    Function,
    Procedure,
    Begin,
    End,
    Call,
    If,
    Then,
    Else,
    While,
    Do,
    For,
    To,

    Semicolon, // ;
    Colon,     // :
    Period,    // .
    Comma,     // ,
    Assign,    // :=
    Eq,        // =
    NotEq,     // <>
    Lt,        // <
    LtEq,      // <=
    Gt,        // >
    GtEq,      // >=
    Plus,      // +
    Minus,     // -
    Star,      // *
    Slash,     // /
    LParen,    // (
    RParen,    // )
    LBracket,  // [
    RBracket,  // ]

    Eof,
}

impl TokenKind {
    /// Keyword table, in declaration order.
    pub(crate) const KEYWORDS: [(&'static str, TokenKind); 20] = [
        ("program", TokenKind::Program),
        ("const", TokenKind::Const),
        ("type", TokenKind::Type),
        ("var", TokenKind::Var),
        ("integer", TokenKind::Integer),
        ("char", TokenKind::Char),
        ("array", TokenKind::Array),
        ("of", TokenKind::Of),
        ("function", TokenKind::Function),
        ("procedure", TokenKind::Procedure),
        ("begin", TokenKind::Begin),
        ("end", TokenKind::End),
        ("call", TokenKind::Call),
        ("if", TokenKind::If),
        ("then", TokenKind::Then),
        ("else", TokenKind::Else),
        ("while", TokenKind::While),
        ("do", TokenKind::Do),
        ("for", TokenKind::For),
        ("to", TokenKind::To),
    ];

    /// Look up a keyword by spelling. KPL keywords are case-insensitive.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        Self::KEYWORDS
            .iter()
            .find(|(spelling, _)| spelling.eq_ignore_ascii_case(word))
            .map(|&(_, kind)| kind)
    }

    pub fn is_keyword(self) -> bool {
        Self::KEYWORDS.iter().any(|&(_, kind)| kind == self)
    }

    /// Source spelling for keywords and symbols, a class word otherwise.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::CharLit => "char literal",
            TokenKind::Program => "program",
            TokenKind::Const => "const",
            TokenKind::Type => "type",
            TokenKind::Var => "var",
            TokenKind::Integer => "integer",
            TokenKind::Char => "char",
            TokenKind::Array => "array",
            TokenKind::Of => "of",
            TokenKind::Function => "function",
            TokenKind::Procedure => "procedure",
            TokenKind::Begin => "begin",
            TokenKind::End => "end",
            TokenKind::Call => "call",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::For => "for",
            TokenKind::To => "to",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Period => ".",
            TokenKind::Comma => ",",
            TokenKind::Assign => ":=",
            TokenKind::Eq => "=",
            TokenKind::NotEq => "<>",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident | TokenKind::Number | TokenKind::CharLit | TokenKind::Eof => {
                f.write_str(self.display_name())
            }
            _ => write!(f, "`{}`", self.display_name()),
        }
    }
}
