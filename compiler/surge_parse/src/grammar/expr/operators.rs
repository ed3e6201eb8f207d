//! Prefix operators, plus the attributed forms `@attrs spawn` and
//! `@attrs async`.

use surge_ir::ast::{ExprId, ExprKind, UnaryOp};
use surge_ir::{Span, TokenKind};

use crate::Parser;

impl Parser<'_> {
    pub(super) fn parse_unary(&mut self) -> Option<ExprId> {
        let start = self.peek_span();
        let op = match self.peek_kind() {
            TokenKind::Plus => UnaryOp::Plus,
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Star => UnaryOp::Deref,
            TokenKind::Amp if self.peek_nth_kind(1) == TokenKind::Mut => UnaryOp::RefMut,
            TokenKind::Amp => UnaryOp::Ref,
            TokenKind::AndAnd => return self.parse_double_ref(),
            TokenKind::Own => UnaryOp::Own,
            TokenKind::Await => UnaryOp::Await,
            TokenKind::Spawn | TokenKind::At => return self.parse_attributed(),
            _ => {
                let primary = self.parse_primary()?;
                return self.parse_postfix(primary, start);
            }
        };
        self.bump();
        if op == UnaryOp::RefMut {
            self.bump();
        }
        let operand = self.nested(Self::parse_unary)?;
        Some(
            self.ast
                .new_expr(ExprKind::Unary { op, operand }, self.span_from(start)),
        )
    }

    /// `&&x` lexes as one token; it is a reference to a reference.
    fn parse_double_ref(&mut self) -> Option<ExprId> {
        let start = self.bump().span;
        let operand = self.nested(Self::parse_unary)?;
        let span = self.span_from(start);
        let inner_span = Span::new(span.file, span.start + 1, span.end);
        let inner = self.ast.new_expr(
            ExprKind::Unary {
                op: UnaryOp::Ref,
                operand,
            },
            inner_span,
        );
        Some(self.ast.new_expr(
            ExprKind::Unary {
                op: UnaryOp::Ref,
                operand: inner,
            },
            span,
        ))
    }

    /// `@local spawn expr`, `@failfast async { … }`. Attributes in front of
    /// any other expression are reported and the expression is kept.
    fn parse_attributed(&mut self) -> Option<ExprId> {
        let start = self.peek_span();
        let attrs = self.parse_attrs();
        match self.peek_kind() {
            TokenKind::Spawn => {
                self.restrict_attrs(attrs.range, "local", "spawn expressions");
                self.bump();
                let target = self.nested(Self::parse_unary)?;
                Some(self.ast.new_expr(
                    ExprKind::Spawn {
                        target,
                        attrs: attrs.range,
                    },
                    self.span_from(start),
                ))
            }
            TokenKind::Async => self.parse_async_block(start, attrs.range),
            _ => {
                self.reject_attrs(attrs.range, "expressions");
                self.nested(Self::parse_unary)
            }
        }
    }
}
