//! Arm-based and concurrency expressions: `compare`, `select`, `race`,
//! `parallel`, `async`.

use surge_diagnostic::{Applicability, ErrorCode, FixSuggestion};
use surge_ir::ast::{AttrRange, CompareArm, ExprId, ExprKind, SelectArm};
use surge_ir::{Span, TokenKind};

use crate::recovery::ARM_SYNC;
use crate::Parser;

impl Parser<'_> {
    /// `compare subject { pattern (if guard)? => result; … finally => result }`
    pub(super) fn parse_compare(&mut self) -> Option<ExprId> {
        let start = self.bump().span;
        let subject = self.without_struct_literals(Self::parse_expr)?;
        let open = self.expect(TokenKind::LBrace, ErrorCode::SynUnexpectedToken)?;
        let arms = self.in_delimiters(|p| p.parse_arms(Self::parse_compare_arm));
        self.expect_closing(TokenKind::RBrace, open)?;
        let arms = self.ast.alloc_compare_arms(arms);
        Some(self.ast.new_expr(
            ExprKind::Compare { subject, arms },
            self.span_from(start),
        ))
    }

    fn parse_compare_arm(&mut self) -> Option<(CompareArm, bool)> {
        let start = self.peek_span();
        let (pattern, is_finally) = if self.eat(TokenKind::Finally).is_some() {
            (None, true)
        } else {
            (Some(self.allowing_fat_arrow(Self::parse_expr)?), false)
        };
        let guard = if self.eat(TokenKind::If).is_some() {
            Some(self.allowing_fat_arrow(Self::parse_expr)?)
        } else {
            None
        };
        let (result, braced) = self.parse_arm_result()?;
        let arm = CompareArm {
            pattern,
            is_finally,
            guard,
            result,
            span: self.span_from(start),
        };
        Some((arm, braced))
    }

    /// `select { await_expr => result; default => result }`, same for `race`.
    pub(super) fn parse_select(&mut self) -> Option<ExprId> {
        let start = self.peek_span();
        let is_race = self.bump().kind == TokenKind::Race;
        let open = self.expect(TokenKind::LBrace, ErrorCode::SynUnexpectedToken)?;
        let arms = self.in_delimiters(|p| p.parse_arms(Self::parse_select_arm));
        self.expect_closing(TokenKind::RBrace, open)?;
        let arms = self.ast.alloc_select_arms(arms);
        let kind = if is_race {
            ExprKind::Race(arms)
        } else {
            ExprKind::Select(arms)
        };
        Some(self.ast.new_expr(kind, self.span_from(start)))
    }

    fn parse_select_arm(&mut self) -> Option<(SelectArm, bool)> {
        let start = self.peek_span();
        let (await_expr, is_default) = if self.eat(TokenKind::Default).is_some() {
            (None, true)
        } else {
            (Some(self.allowing_fat_arrow(Self::parse_expr)?), false)
        };
        let (result, braced) = self.parse_arm_result()?;
        let arm = SelectArm {
            await_expr,
            is_default,
            result,
            span: self.span_from(start),
        };
        Some((arm, braced))
    }

    /// `=> Expr` or `=> { … }`. The flag is set for braced results, which
    /// need no `;` after them.
    fn parse_arm_result(&mut self) -> Option<(ExprId, bool)> {
        self.expect(TokenKind::FatArrow, ErrorCode::SynExpectFatArrow)?;
        if self.at(TokenKind::LBrace) {
            Some((self.parse_block_expr()?, true))
        } else {
            Some((self.parse_expr()?, false))
        }
    }

    /// Arms up to the closing `}`. Arms are separated by `;`; a `,` is
    /// reported with a replacement fix and accepted.
    fn parse_arms<A>(&mut self, mut parse_arm: impl FnMut(&mut Self) -> Option<(A, bool)>) -> Vec<A> {
        let mut arms = Vec::new();
        while !self.at(TokenKind::RBrace) && !self.at(TokenKind::Eof) {
            let before = self.stream.position();
            let Some((arm, braced)) = parse_arm(self) else {
                self.resync_until(ARM_SYNC);
                self.eat(TokenKind::Semicolon);
                if self.stream.position() == before && !self.at(TokenKind::Eof) {
                    self.bump();
                }
                continue;
            };
            arms.push(arm);
            match self.peek_kind() {
                TokenKind::Semicolon => {
                    self.bump();
                }
                TokenKind::Comma => {
                    let comma = self.bump().span;
                    self.report(
                        ErrorCode::SynExpectSemicolon,
                        comma,
                        "arms are separated by `;`, not `,`",
                    )
                    .fix(
                        FixSuggestion::replace("use `;`", comma, ";")
                            .with_applicability(Applicability::AlwaysSafe)
                            .preferred(),
                    )
                    .emit();
                }
                TokenKind::RBrace | TokenKind::Eof => {}
                _ if braced => {}
                _ => {
                    self.expect_semicolon("arm");
                }
            }
        }
        arms
    }

    /// `parallel map iter with (args) => body` or
    /// `parallel reduce iter with init, (args) => body`.
    pub(super) fn parse_parallel(&mut self) -> Option<ExprId> {
        let start = self.bump().span;
        let is_reduce = match self.peek_kind() {
            TokenKind::Map => false,
            TokenKind::Reduce => true,
            _ => {
                self.unexpected("`map` or `reduce` after `parallel`");
                return None;
            }
        };
        self.bump();
        let iter = self.without_struct_literals(Self::parse_expr)?;
        self.expect(TokenKind::With, ErrorCode::SynUnexpectedToken)?;
        let init = if is_reduce {
            let init = self.without_struct_literals(Self::parse_expr)?;
            self.expect(TokenKind::Comma, ErrorCode::SynExpectComma)?;
            Some(init)
        } else {
            None
        };

        let open = self.expect(TokenKind::LParen, ErrorCode::SynUnexpectedToken)?;
        let args = self.parse_expr_list(TokenKind::RParen, "arguments");
        self.expect_closing(TokenKind::RParen, open)?;
        let args = self.ast.alloc_exprs(args);
        let (body, _) = self.parse_arm_result()?;

        let kind = match init {
            Some(init) => ExprKind::ParallelReduce {
                iter,
                init,
                args,
                body,
            },
            None => ExprKind::ParallelMap { iter, args, body },
        };
        Some(self.ast.new_expr(kind, self.span_from(start)))
    }

    /// `async { … }`, optionally preceded by `@failfast`.
    pub(super) fn parse_async_block(&mut self, start: Span, attrs: AttrRange) -> Option<ExprId> {
        if !attrs.is_empty() {
            self.restrict_attrs(attrs, "failfast", "async blocks");
        }
        self.bump();
        if !self.at(TokenKind::LBrace) {
            self.unexpected("`{` after `async`");
            return None;
        }
        let body = self.parse_block_expr()?;
        Some(self.ast.new_expr(
            ExprKind::Async { body, attrs },
            self.span_from(start),
        ))
    }
}
