//! Parse error types.
//!
//! A parse stops at its first defect, so a session produces at most one
//! [`ParseError`]. Besides lexical failures forwarded from the scanner there
//! are two classifications:
//! - `UnexpectedToken`: a terminal matched by `Cursor::expect` was missing
//! - `InvalidConstruct`: a rule hit a decision point and the lookahead fits
//!   none of its alternatives

use kpl_ir::{LexError, Position, Token, TokenKind};
use thiserror::Error;

/// Grammar rule names, one per nonterminal.
///
/// Used both as the subject of `InvalidConstruct` errors and to label rule
/// entry in trace output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Nonterminal {
    // === Program structure ===
    Program,
    Block,
    ConstDecls,
    TypeDecls,
    VarDecls,
    SubDecls,
    FuncDecl,
    ProcDecl,
    ParamList,
    Param,

    // === Statements ===
    StatementSeq,
    Statement,
    AssignSt,
    CallSt,
    GroupSt,
    IfSt,
    WhileSt,
    ForSt,
    Variable,

    // === Expressions ===
    Indexes,
    Expression,
    Term,
    Factor,
    Condition,
    Arguments,

    // === Constants and types ===
    Constant,
    UnsignedConstant,
    Type,
    BasicType,
}

impl Nonterminal {
    /// Returns a phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::Program => "a program",
            Self::Block => "a block",
            Self::ConstDecls => "constant declarations",
            Self::TypeDecls => "type declarations",
            Self::VarDecls => "variable declarations",
            Self::SubDecls => "subroutine declarations",
            Self::FuncDecl => "a function declaration",
            Self::ProcDecl => "a procedure declaration",
            Self::ParamList => "a parameter list",
            Self::Param => "a parameter",

            Self::StatementSeq => "a statement sequence",
            Self::Statement => "a statement",
            Self::AssignSt => "an assignment",
            Self::CallSt => "a call statement",
            Self::GroupSt => "a compound statement",
            Self::IfSt => "an if statement",
            Self::WhileSt => "a while statement",
            Self::ForSt => "a for statement",
            Self::Variable => "a variable",

            Self::Indexes => "array indexes",
            Self::Expression => "an expression",
            Self::Term => "a term",
            Self::Factor => "a factor",
            Self::Condition => "a condition",
            Self::Arguments => "call arguments",

            Self::Constant => "a constant",
            Self::UnsignedConstant => "an unsigned constant",
            Self::Type => "a type",
            Self::BasicType => "a basic type",
        }
    }
}

impl std::fmt::Display for Nonterminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Stable, searchable error codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Scanner could not classify the input.
    E0001,
    /// Expected terminal missing.
    E1001,
    /// Invalid construct in a rule without a dedicated code.
    E1100,
    /// Invalid constant.
    E1101,
    /// Invalid unsigned constant.
    E1102,
    /// Invalid type.
    E1103,
    /// Invalid basic type.
    E1104,
    /// Invalid parameter list.
    E1105,
    /// Invalid statement.
    E1106,
    /// Invalid term.
    E1107,
    /// Invalid factor.
    E1108,
    /// Invalid comparison operator.
    E1109,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1100 => "E1100",
            ErrorCode::E1101 => "E1101",
            ErrorCode::E1102 => "E1102",
            ErrorCode::E1103 => "E1103",
            ErrorCode::E1104 => "E1104",
            ErrorCode::E1105 => "E1105",
            ErrorCode::E1106 => "E1106",
            ErrorCode::E1107 => "E1107",
            ErrorCode::E1108 => "E1108",
            ErrorCode::E1109 => "E1109",
        }
    }

    fn for_construct(nonterminal: Nonterminal) -> Self {
        match nonterminal {
            Nonterminal::Constant => ErrorCode::E1101,
            Nonterminal::UnsignedConstant => ErrorCode::E1102,
            Nonterminal::Type => ErrorCode::E1103,
            Nonterminal::BasicType => ErrorCode::E1104,
            Nonterminal::ParamList => ErrorCode::E1105,
            Nonterminal::Statement => ErrorCode::E1106,
            Nonterminal::Term => ErrorCode::E1107,
            Nonterminal::Factor => ErrorCode::E1108,
            Nonterminal::Condition => ErrorCode::E1109,
            _ => ErrorCode::E1100,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The first defect found in a token stream.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A direct terminal match failed.
    #[error("{}: expected {expected}, found {}", .found.position, describe(.found))]
    UnexpectedToken { expected: TokenKind, found: Token },

    /// The lookahead is outside every continuation of `nonterminal`.
    #[error(
        "{}: unexpected {} while parsing {}",
        .found.position,
        describe(.found),
        .nonterminal.description()
    )]
    InvalidConstruct { nonterminal: Nonterminal, found: Token },

    /// Forwarded unchanged from the token source.
    #[error(transparent)]
    Lexical(#[from] LexError),
}

impl ParseError {
    #[cold]
    pub fn unexpected_token(expected: TokenKind, found: Token) -> Self {
        ParseError::UnexpectedToken { expected, found }
    }

    #[cold]
    pub fn invalid_construct(nonterminal: Nonterminal, found: Token) -> Self {
        ParseError::InvalidConstruct { nonterminal, found }
    }

    /// Position of the offending token, or of the scanner failure.
    pub fn position(&self) -> Position {
        match self {
            ParseError::UnexpectedToken { found, .. }
            | ParseError::InvalidConstruct { found, .. } => found.position,
            ParseError::Lexical(err) => err.position,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseError::InvalidConstruct { nonterminal, .. } => {
                ErrorCode::for_construct(*nonterminal)
            }
            ParseError::Lexical(_) => ErrorCode::E0001,
        }
    }

    /// The token the parser choked on; `None` for lexical failures.
    pub fn found(&self) -> Option<&Token> {
        match self {
            ParseError::UnexpectedToken { found, .. }
            | ParseError::InvalidConstruct { found, .. } => Some(found),
            ParseError::Lexical(_) => None,
        }
    }
}

/// Kind of a token plus its value, e.g. ``identifier `b` `` or `` `;` ``.
fn describe(token: &Token) -> String {
    match &token.lexeme {
        Some(lexeme) => format!("{} `{lexeme}`", token.kind),
        None => token.kind.to_string(),
    }
}
