//! Expressions, conditions, indexes and call arguments.
//!
//! The left-recursive productions
//! `Expression := Expression ('+'|'-') Term | Term` and
//! `Term := Term ('*'|'/') Factor | Factor` are recognized as loops:
//! one operand, then `(operator, operand)` pairs while an operator follows.

use kpl_ir::{TokenKind, TokenSource};

use super::PResult;
use crate::error::Nonterminal;
use crate::Parser;

const ADDITIVE_OPS: &[TokenKind] = &[TokenKind::Plus, TokenKind::Minus];

const MULTIPLICATIVE_OPS: &[TokenKind] = &[TokenKind::Star, TokenKind::Slash];

const RELATIONAL_OPS: &[TokenKind] = &[
    TokenKind::Eq,
    TokenKind::NotEq,
    TokenKind::Lt,
    TokenKind::LtEq,
    TokenKind::Gt,
    TokenKind::GtEq,
];

/// Tokens that may follow a complete term.
const TERM_FOLLOW: &[TokenKind] = &[
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Semicolon,
    TokenKind::End,
    TokenKind::Then,
    TokenKind::Do,
    TokenKind::To,
    TokenKind::Else,
    TokenKind::RBracket,
    TokenKind::RParen,
    TokenKind::Comma,
    TokenKind::Eq,
    TokenKind::NotEq,
    TokenKind::Lt,
    TokenKind::LtEq,
    TokenKind::Gt,
    TokenKind::GtEq,
];

impl<S: TokenSource> Parser<'_, S> {
    /// `Expression := ('+'|'-')? Term (('+'|'-') Term)*`
    pub(crate) fn parse_expression(&mut self) -> PResult {
        self.rule(Nonterminal::Expression, |p| {
            p.eat_any(ADDITIVE_OPS)?;
            p.parse_term()?;
            while p.eat_any(ADDITIVE_OPS)?.is_some() {
                p.parse_term()?;
            }
            Ok(())
        })
    }

    /// `Term := Factor (('*'|'/') Factor)*`
    ///
    /// A factor followed by anything outside `*`, `/` and FOLLOW(Term) is
    /// rejected here, at the token that cannot continue the term.
    fn parse_term(&mut self) -> PResult {
        self.rule(Nonterminal::Term, |p| loop {
            p.parse_factor()?;
            if p.eat_any(MULTIPLICATIVE_OPS)?.is_some() {
                continue;
            }
            if p.cursor.check_any(TERM_FOLLOW) {
                return Ok(());
            }
            return Err(p.invalid(Nonterminal::Term));
        })
    }

    /// `Factor := UnsignedConstant | '(' Expression ')' | IDENT (Indexes | Arguments)?`
    ///
    /// After an identifier, `[` selects indexes and `(` selects arguments;
    /// never both.
    fn parse_factor(&mut self) -> PResult {
        self.rule(Nonterminal::Factor, |p| match p.kind() {
            TokenKind::Number | TokenKind::CharLit => p.parse_unsigned_constant(),
            TokenKind::LParen => {
                p.expect(TokenKind::LParen)?;
                p.parse_expression()?;
                p.expect(TokenKind::RParen)
            }
            TokenKind::Ident => {
                p.expect(TokenKind::Ident)?;
                match p.kind() {
                    TokenKind::LBracket => p.parse_indexes(),
                    TokenKind::LParen => p.parse_arguments(),
                    _ => Ok(()),
                }
            }
            _ => Err(p.invalid(Nonterminal::Factor)),
        })
    }

    /// `Condition := Expression ('='|'<'|'>'|'<>'|'<='|'>=') Expression`
    pub(crate) fn parse_condition(&mut self) -> PResult {
        self.rule(Nonterminal::Condition, |p| {
            p.parse_expression()?;
            if p.eat_any(RELATIONAL_OPS)?.is_none() {
                return Err(p.invalid(Nonterminal::Condition));
            }
            p.parse_expression()
        })
    }

    /// `Indexes := ('[' Expression ']')*`
    pub(crate) fn parse_indexes(&mut self) -> PResult {
        self.rule(Nonterminal::Indexes, |p| {
            while p.eat(TokenKind::LBracket)? {
                p.parse_expression()?;
                p.expect(TokenKind::RBracket)?;
            }
            Ok(())
        })
    }

    /// `Arguments := '(' Expression (',' Expression)* ')'`
    pub(crate) fn parse_arguments(&mut self) -> PResult {
        self.rule(Nonterminal::Arguments, |p| {
            p.expect(TokenKind::LParen)?;
            p.parse_expression()?;
            while p.eat(TokenKind::Comma)? {
                p.parse_expression()?;
            }
            p.expect(TokenKind::RParen)
        })
    }
}
