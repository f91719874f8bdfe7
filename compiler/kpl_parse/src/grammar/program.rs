//! Program and Block.

use kpl_ir::{TokenKind, TokenSource};

use super::PResult;
use crate::error::Nonterminal;
use crate::Parser;

impl<S: TokenSource> Parser<'_, S> {
    /// `Program := 'program' IDENT ';' Block '.'`
    pub(crate) fn parse_program(&mut self) -> PResult {
        self.rule(Nonterminal::Program, |p| {
            p.expect(TokenKind::Program)?;
            p.expect(TokenKind::Ident)?;
            p.expect(TokenKind::Semicolon)?;
            p.parse_block()?;
            p.expect(TokenKind::Period)
        })
    }

    /// `Block := ConstDecls? TypeDecls? VarDecls? SubDecls BEGIN StatementSeq END`
    ///
    /// Sections appear in this fixed order, each at most once.
    pub(crate) fn parse_block(&mut self) -> PResult {
        self.rule(Nonterminal::Block, |p| {
            if p.check(TokenKind::Const) {
                p.parse_const_decls()?;
            }
            if p.check(TokenKind::Type) {
                p.parse_type_decls()?;
            }
            if p.check(TokenKind::Var) {
                p.parse_var_decls()?;
            }
            p.parse_sub_decls()?;
            p.expect(TokenKind::Begin)?;
            p.parse_statement_seq()?;
            p.expect(TokenKind::End)
        })
    }
}
