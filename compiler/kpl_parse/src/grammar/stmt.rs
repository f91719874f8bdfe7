//! Statements.

use kpl_ir::{TokenKind, TokenSource};

use super::PResult;
use crate::error::Nonterminal;
use crate::Parser;

impl<S: TokenSource> Parser<'_, S> {
    /// `StatementSeq := Statement (';' Statement)*`, ended by `end`.
    ///
    /// After each statement the sequence ends if the lookahead is `end`;
    /// otherwise a `;` separator is required.
    pub(crate) fn parse_statement_seq(&mut self) -> PResult {
        self.rule(Nonterminal::StatementSeq, |p| loop {
            p.parse_statement()?;
            if p.check(TokenKind::End) {
                return Ok(());
            }
            p.expect(TokenKind::Semicolon)?;
        })
    }

    /// `Statement := AssignSt | CallSt | GroupSt | IfSt | WhileSt | ForSt | ε`
    ///
    /// The empty statement is only accepted where FOLLOW(Statement) allows
    /// it: before `;`, `end` or `else`.
    pub(crate) fn parse_statement(&mut self) -> PResult {
        self.rule(Nonterminal::Statement, |p| match p.kind() {
            TokenKind::Ident => p.parse_assign_st(),
            TokenKind::Call => p.parse_call_st(),
            TokenKind::Begin => p.parse_group_st(),
            TokenKind::If => p.parse_if_st(),
            TokenKind::While => p.parse_while_st(),
            TokenKind::For => p.parse_for_st(),
            TokenKind::Semicolon | TokenKind::End | TokenKind::Else => Ok(()),
            _ => Err(p.invalid(Nonterminal::Statement)),
        })
    }

    /// `AssignSt := Variable ':=' Expression`
    fn parse_assign_st(&mut self) -> PResult {
        self.rule(Nonterminal::AssignSt, |p| {
            p.parse_variable()?;
            p.expect(TokenKind::Assign)?;
            p.parse_expression()
        })
    }

    /// `Variable := IDENT Indexes`
    fn parse_variable(&mut self) -> PResult {
        self.rule(Nonterminal::Variable, |p| {
            p.expect(TokenKind::Ident)?;
            p.parse_indexes()
        })
    }

    /// `CallSt := 'call' IDENT Arguments?`
    fn parse_call_st(&mut self) -> PResult {
        self.rule(Nonterminal::CallSt, |p| {
            p.expect(TokenKind::Call)?;
            p.expect(TokenKind::Ident)?;
            if p.check(TokenKind::LParen) {
                p.parse_arguments()?;
            }
            Ok(())
        })
    }

    /// `GroupSt := BEGIN Statement (';' Statement)* END`
    fn parse_group_st(&mut self) -> PResult {
        self.rule(Nonterminal::GroupSt, |p| {
            p.expect(TokenKind::Begin)?;
            p.parse_statement_seq()?;
            p.expect(TokenKind::End)
        })
    }

    /// `IfSt := 'if' Condition 'then' Statement ('else' Statement)?`
    ///
    /// A dangling `else` binds to the innermost `if`.
    fn parse_if_st(&mut self) -> PResult {
        self.rule(Nonterminal::IfSt, |p| {
            p.expect(TokenKind::If)?;
            p.parse_condition()?;
            p.expect(TokenKind::Then)?;
            p.parse_statement()?;
            if p.eat(TokenKind::Else)? {
                p.parse_statement()?;
            }
            Ok(())
        })
    }

    /// `WhileSt := 'while' Condition 'do' Statement`
    fn parse_while_st(&mut self) -> PResult {
        self.rule(Nonterminal::WhileSt, |p| {
            p.expect(TokenKind::While)?;
            p.parse_condition()?;
            p.expect(TokenKind::Do)?;
            p.parse_statement()
        })
    }

    /// `ForSt := 'for' IDENT ':=' Expression 'to' Expression 'do' Statement`
    fn parse_for_st(&mut self) -> PResult {
        self.rule(Nonterminal::ForSt, |p| {
            p.expect(TokenKind::For)?;
            p.expect(TokenKind::Ident)?;
            p.expect(TokenKind::Assign)?;
            p.parse_expression()?;
            p.expect(TokenKind::To)?;
            p.parse_expression()?;
            p.expect(TokenKind::Do)?;
            p.parse_statement()
        })
    }
}
