//! Grammar rules, one method per nonterminal.
//!
//! Every rule returns with the lookahead on the first token that is not
//! part of its production. Optional clauses are taken iff the lookahead is
//! in their FIRST set; nothing backtracks.
//!
//! - `program`: Program, Block
//! - `decl`: constant, type, variable and subroutine declarations
//! - `ty`: Type, BasicType, Constant, UnsignedConstant
//! - `stmt`: statements
//! - `expr`: expressions, conditions, indexes, arguments

mod decl;
mod expr;
mod program;
mod stmt;
mod ty;

use kpl_ir::TokenSource;
use tracing::trace;

use crate::error::{Nonterminal, ParseError};
use crate::stack::ensure_sufficient_stack;
use crate::Parser;

pub(crate) type PResult = Result<(), ParseError>;

impl<S: TokenSource> Parser<'_, S> {
    /// Run the body of `nonterminal`'s rule.
    ///
    /// Rules recurse through each other (expressions in parentheses,
    /// statements in compound statements, blocks in subroutines), so each
    /// one gets room to grow the stack.
    #[inline]
    fn rule(
        &mut self,
        nonterminal: Nonterminal,
        body: impl FnOnce(&mut Self) -> PResult,
    ) -> PResult {
        trace!(
            rule = %nonterminal,
            lookahead = %self.kind().display_name(),
            "enter"
        );
        ensure_sufficient_stack(|| body(self))
    }
}
