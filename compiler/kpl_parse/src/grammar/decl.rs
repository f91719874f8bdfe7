//! Declarations: constants, types, variables, subroutines and parameters.

use kpl_ir::{TokenKind, TokenSource};

use super::PResult;
use crate::error::Nonterminal;
use crate::Parser;

impl<S: TokenSource> Parser<'_, S> {
    /// `ConstDecls := 'const' (IDENT '=' Constant ';')+`
    pub(crate) fn parse_const_decls(&mut self) -> PResult {
        self.rule(Nonterminal::ConstDecls, |p| {
            p.expect(TokenKind::Const)?;
            loop {
                p.expect(TokenKind::Ident)?;
                p.expect(TokenKind::Eq)?;
                p.parse_constant()?;
                p.expect(TokenKind::Semicolon)?;
                if !p.check(TokenKind::Ident) {
                    return Ok(());
                }
            }
        })
    }

    /// `TypeDecls := 'type' (IDENT '=' Type ';')+`
    pub(crate) fn parse_type_decls(&mut self) -> PResult {
        self.rule(Nonterminal::TypeDecls, |p| {
            p.expect(TokenKind::Type)?;
            loop {
                p.expect(TokenKind::Ident)?;
                p.expect(TokenKind::Eq)?;
                p.parse_type()?;
                p.expect(TokenKind::Semicolon)?;
                if !p.check(TokenKind::Ident) {
                    return Ok(());
                }
            }
        })
    }

    /// `VarDecls := 'var' (IDENT ':' Type ';')+`
    pub(crate) fn parse_var_decls(&mut self) -> PResult {
        self.rule(Nonterminal::VarDecls, |p| {
            p.expect(TokenKind::Var)?;
            loop {
                p.expect(TokenKind::Ident)?;
                p.expect(TokenKind::Colon)?;
                p.parse_type()?;
                p.expect(TokenKind::Semicolon)?;
                if !p.check(TokenKind::Ident) {
                    return Ok(());
                }
            }
        })
    }

    /// `SubDecls := (FuncDecl | ProcDecl)*`
    pub(crate) fn parse_sub_decls(&mut self) -> PResult {
        self.rule(Nonterminal::SubDecls, |p| loop {
            match p.kind() {
                TokenKind::Function => p.parse_func_decl()?,
                TokenKind::Procedure => p.parse_proc_decl()?,
                _ => return Ok(()),
            }
        })
    }

    /// `FuncDecl := 'function' IDENT ParamList? ':' BasicType ';' Block ';'`
    fn parse_func_decl(&mut self) -> PResult {
        self.rule(Nonterminal::FuncDecl, |p| {
            p.expect(TokenKind::Function)?;
            p.expect(TokenKind::Ident)?;
            if p.check(TokenKind::LParen) {
                p.parse_param_list()?;
            }
            p.expect(TokenKind::Colon)?;
            p.parse_basic_type()?;
            p.expect(TokenKind::Semicolon)?;
            p.parse_block()?;
            p.expect(TokenKind::Semicolon)
        })
    }

    /// `ProcDecl := 'procedure' IDENT ParamList? ';' Block ';'`
    fn parse_proc_decl(&mut self) -> PResult {
        self.rule(Nonterminal::ProcDecl, |p| {
            p.expect(TokenKind::Procedure)?;
            p.expect(TokenKind::Ident)?;
            if p.check(TokenKind::LParen) {
                p.parse_param_list()?;
            }
            p.expect(TokenKind::Semicolon)?;
            p.parse_block()?;
            p.expect(TokenKind::Semicolon)
        })
    }

    /// `ParamList := '(' Param (';' Param)* ')'`
    ///
    /// A parameter followed by neither `;` nor `)` is an invalid parameter
    /// list rather than a missing `)`.
    fn parse_param_list(&mut self) -> PResult {
        self.rule(Nonterminal::ParamList, |p| {
            p.expect(TokenKind::LParen)?;
            loop {
                p.parse_param()?;
                match p.kind() {
                    TokenKind::Semicolon => p.expect(TokenKind::Semicolon)?,
                    TokenKind::RParen => break,
                    _ => return Err(p.invalid(Nonterminal::ParamList)),
                }
            }
            p.expect(TokenKind::RParen)
        })
    }

    /// `Param := 'var'? IDENT ':' BasicType`
    fn parse_param(&mut self) -> PResult {
        self.rule(Nonterminal::Param, |p| {
            p.eat(TokenKind::Var)?;
            p.expect(TokenKind::Ident)?;
            p.expect(TokenKind::Colon)?;
            p.parse_basic_type()
        })
    }
}
