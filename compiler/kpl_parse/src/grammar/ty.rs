//! Types and constants.

use kpl_ir::{TokenKind, TokenSource};

use super::PResult;
use crate::error::Nonterminal;
use crate::Parser;

const SIGNS: &[TokenKind] = &[TokenKind::Plus, TokenKind::Minus];

impl<S: TokenSource> Parser<'_, S> {
    /// `Type := IDENT | 'array' '[' NUMBER ']' 'of' Type | BasicType`
    pub(crate) fn parse_type(&mut self) -> PResult {
        self.rule(Nonterminal::Type, |p| match p.kind() {
            TokenKind::Ident => p.expect(TokenKind::Ident),
            TokenKind::Array => {
                p.expect(TokenKind::Array)?;
                p.expect(TokenKind::LBracket)?;
                p.expect(TokenKind::Number)?;
                p.expect(TokenKind::RBracket)?;
                p.expect(TokenKind::Of)?;
                p.parse_type()
            }
            TokenKind::Integer | TokenKind::Char => p.parse_basic_type(),
            _ => Err(p.invalid(Nonterminal::Type)),
        })
    }

    /// `BasicType := 'integer' | 'char'`
    pub(crate) fn parse_basic_type(&mut self) -> PResult {
        self.rule(Nonterminal::BasicType, |p| {
            match p.eat_any(&[TokenKind::Integer, TokenKind::Char])? {
                Some(_) => Ok(()),
                None => Err(p.invalid(Nonterminal::BasicType)),
            }
        })
    }

    /// `Constant := CHAR_LIT | ('+'|'-')? (IDENT | NUMBER)`
    ///
    /// The only place the grammar allows a sign in front of an operand
    /// other than at the head of an expression.
    pub(crate) fn parse_constant(&mut self) -> PResult {
        self.rule(Nonterminal::Constant, |p| {
            if p.eat(TokenKind::CharLit)? {
                return Ok(());
            }
            p.eat_any(SIGNS)?;
            match p.eat_any(&[TokenKind::Ident, TokenKind::Number])? {
                Some(_) => Ok(()),
                None => Err(p.invalid(Nonterminal::Constant)),
            }
        })
    }

    /// `UnsignedConstant := NUMBER | IDENT | CHAR_LIT`
    pub(crate) fn parse_unsigned_constant(&mut self) -> PResult {
        self.rule(Nonterminal::UnsignedConstant, |p| {
            match p.eat_any(&[TokenKind::Number, TokenKind::Ident, TokenKind::CharLit])? {
                Some(_) => Ok(()),
                None => Err(p.invalid(Nonterminal::UnsignedConstant)),
            }
        })
    }
}
