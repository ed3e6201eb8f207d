//! Context counters for context-sensitive expression syntax.
//!
//! Each counter is raised for the extent of one sub-parse and restored on
//! every return path by [`Parser::with_context`], so the counters stay
//! balanced no matter how the sub-parse ends.

use crate::Parser;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ParseContext {
    /// `> 0` disables `: Type` as a postfix cast.
    pub suspend_colon_cast: u32,
    /// `> 0` permits `=>` to end an expression (arm heads).
    pub allow_fat_arrow: u32,
    /// `> 0` disables `Upper {` struct literals (control-flow heads).
    pub no_struct_literal: u32,
    /// `> 0` while parsing expressions nested in a type, such as an array
    /// length.
    pub in_type_operand: u32,
}

impl ParseContext {
    pub(crate) fn allows_struct_literal(self) -> bool {
        self.no_struct_literal == 0 && self.in_type_operand == 0
    }
}

impl Parser<'_> {
    /// Run `f` with the context adjusted by `adjust`, then restore it.
    pub(crate) fn with_context<R>(
        &mut self,
        adjust: impl FnOnce(&mut ParseContext),
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let saved = self.ctx;
        adjust(&mut self.ctx);
        let result = f(self);
        self.ctx = saved;
        result
    }

    pub(crate) fn suspending_colon_cast<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.with_context(|ctx| ctx.suspend_colon_cast += 1, f)
    }

    pub(crate) fn allowing_fat_arrow<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.with_context(|ctx| ctx.allow_fat_arrow += 1, f)
    }

    pub(crate) fn without_struct_literals<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.with_context(|ctx| ctx.no_struct_literal += 1, f)
    }

    pub(crate) fn in_type_operand<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.with_context(|ctx| ctx.in_type_operand += 1, f)
    }

    /// Inside `( )`, `[ ]` and `{ }` the surrounding restrictions no longer
    /// apply.
    pub(crate) fn in_delimiters<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.with_context(|ctx| *ctx = ParseContext::default(), f)
    }
}
