//! Expressions: precedence climbing over binary operators.
//!
//! Precedence numbers come from [`BinaryOp::precedence`]; a lower number
//! binds tighter. Each level parses its right operand with a ceiling one
//! below its own level, except the right-associative levels (ternary and
//! assignment), which reuse their own level.

mod control;
mod fstring;
mod operators;
mod postfix;
mod primary;

use surge_diagnostic::ErrorCode;
use surge_ir::ast::{BinaryOp, ExprId, ExprKind, TERNARY_PRECEDENCE};
use surge_ir::TokenKind;
use surge_stack::DepthBudget;

use crate::Parser;

/// Loosest level: assignments.
const MAX_PRECEDENCE: u8 = 16;

/// Precedence of `is Type`, shared with the relational operators.
const IS_PRECEDENCE: u8 = 9;

fn binary_op(kind: TokenKind) -> Option<BinaryOp> {
    let op = match kind {
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::Percent => BinaryOp::Mod,
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Shl => BinaryOp::Shl,
        TokenKind::Shr => BinaryOp::Shr,
        TokenKind::Amp => BinaryOp::BitAnd,
        TokenKind::Caret => BinaryOp::BitXor,
        TokenKind::Pipe => BinaryOp::BitOr,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::LtEq => BinaryOp::LtEq,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::GtEq => BinaryOp::GtEq,
        TokenKind::EqEq => BinaryOp::Eq,
        TokenKind::BangEq => BinaryOp::NotEq,
        TokenKind::AndAnd => BinaryOp::And,
        TokenKind::OrOr => BinaryOp::Or,
        TokenKind::QuestionQuestion => BinaryOp::Coalesce,
        TokenKind::DotDot => BinaryOp::Range,
        TokenKind::DotDotEq => BinaryOp::RangeInclusive,
        TokenKind::Eq => BinaryOp::Assign,
        TokenKind::PlusEq => BinaryOp::AddAssign,
        TokenKind::MinusEq => BinaryOp::SubAssign,
        TokenKind::StarEq => BinaryOp::MulAssign,
        TokenKind::SlashEq => BinaryOp::DivAssign,
        TokenKind::PercentEq => BinaryOp::ModAssign,
        TokenKind::AmpEq => BinaryOp::BitAndAssign,
        TokenKind::PipeEq => BinaryOp::BitOrAssign,
        TokenKind::CaretEq => BinaryOp::BitXorAssign,
        TokenKind::ShlEq => BinaryOp::ShlAssign,
        TokenKind::ShrEq => BinaryOp::ShrAssign,
        _ => return None,
    };
    Some(op)
}

/// Tokens after which an open range (`a..`) has no end operand.
fn ends_operand(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::RBracket
            | TokenKind::RParen
            | TokenKind::RBrace
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::FatArrow
            | TokenKind::Eof
    )
}

impl Parser<'_> {
    /// Parse a full expression, assignments included.
    pub(crate) fn parse_expr(&mut self) -> Option<ExprId> {
        self.parse_binary(MAX_PRECEDENCE)
    }

    /// Run `f` one nesting level deeper. Past the configured depth the
    /// input is rejected with a single `SynExpressionTooDeep` per item.
    pub(crate) fn nested<R>(&mut self, f: impl FnOnce(&mut Self) -> Option<R>) -> Option<R> {
        match DepthBudget::scoped(self, |p| &mut p.depth, f) {
            Ok(result) => result,
            Err(exceeded) => {
                if !self.depth_reported {
                    self.depth_reported = true;
                    let span = self.peek_span();
                    self.report(
                        ErrorCode::SynExpressionTooDeep,
                        span,
                        format!("expression nesting exceeds the limit of {}", exceeded.limit),
                    )
                    .emit();
                }
                None
            }
        }
    }

    /// Whether the next token can begin an expression.
    pub(crate) fn at_expr_start(&mut self) -> bool {
        let kind = self.peek_kind();
        kind.is_literal()
            || matches!(
                kind,
                TokenKind::Ident
                    | TokenKind::Underscore
                    | TokenKind::LParen
                    | TokenKind::LBracket
                    | TokenKind::LBrace
                    | TokenKind::Plus
                    | TokenKind::Minus
                    | TokenKind::Bang
                    | TokenKind::Star
                    | TokenKind::Amp
                    | TokenKind::AndAnd
                    | TokenKind::Own
                    | TokenKind::Await
                    | TokenKind::Spawn
                    | TokenKind::Async
                    | TokenKind::At
                    | TokenKind::DotDot
                    | TokenKind::DotDotEq
                    | TokenKind::DotDotDot
                    | TokenKind::Compare
                    | TokenKind::Select
                    | TokenKind::Race
                    | TokenKind::Parallel
            )
    }

    /// Parse an expression whose loosest operator is at most `max_prec`.
    fn parse_binary(&mut self, max_prec: u8) -> Option<ExprId> {
        self.nested(|p| p.parse_binary_inner(max_prec))
    }

    fn parse_binary_inner(&mut self, max_prec: u8) -> Option<ExprId> {
        let start = self.peek_span();
        let mut left = self.parse_unary()?;
        loop {
            let kind = self.peek_kind();
            match kind {
                TokenKind::FatArrow => {
                    if self.ctx.allow_fat_arrow == 0 {
                        let span = self.peek_span();
                        self.report_with_delete(
                            ErrorCode::SynFatArrowOutsideParallel,
                            span,
                            "`=>` is only allowed in compare, select, race and parallel arms",
                            "remove `=>`",
                        );
                        return None;
                    }
                    break;
                }
                TokenKind::Is if IS_PRECEDENCE <= max_prec => {
                    self.bump();
                    let ty = self.parse_type()?;
                    left = self
                        .ast
                        .new_expr(ExprKind::Is { value: left, ty }, self.span_from(start));
                    continue;
                }
                TokenKind::Question if TERNARY_PRECEDENCE <= max_prec => {
                    self.bump();
                    let then_expr =
                        self.suspending_colon_cast(|p| p.parse_binary(TERNARY_PRECEDENCE))?;
                    self.expect(TokenKind::Colon, ErrorCode::SynExpectColon)?;
                    let else_expr = self.parse_binary(TERNARY_PRECEDENCE)?;
                    left = self.ast.new_expr(
                        ExprKind::Ternary {
                            cond: left,
                            then_expr,
                            else_expr,
                        },
                        self.span_from(start),
                    );
                    continue;
                }
                _ => {}
            }

            let Some(op) = binary_op(kind) else {
                break;
            };
            let prec = op.precedence();
            if prec > max_prec {
                break;
            }
            self.bump();

            if matches!(op, BinaryOp::Range | BinaryOp::RangeInclusive)
                && ends_operand(self.peek_kind())
            {
                left = self.ast.new_expr(
                    ExprKind::RangeLit {
                        start: Some(left),
                        end: None,
                        inclusive: op == BinaryOp::RangeInclusive,
                    },
                    self.span_from(start),
                );
                continue;
            }

            let right_max = if op.is_right_assoc() { prec } else { prec - 1 };
            let right = self.parse_binary(right_max)?;
            left = self
                .ast
                .new_expr(ExprKind::Binary { op, left, right }, self.span_from(start));
        }
        Some(left)
    }

    /// Comma separated expressions up to (not including) `close`, each
    /// parsed with the outer restrictions lifted.
    pub(crate) fn parse_expr_list(&mut self, close: TokenKind, what: &str) -> Vec<ExprId> {
        self.in_delimiters(|p| {
            let mut exprs = Vec::new();
            while !p.at(close) && !p.at(TokenKind::Eof) {
                match p.parse_expr() {
                    Some(expr) => exprs.push(expr),
                    None => p.resync_until(crate::recovery::LIST_SYNC),
                }
                if p.eat(TokenKind::Comma).is_none() {
                    if p.at_expr_start() && !p.at(TokenKind::LBrace) {
                        p.missing_comma(what);
                        continue;
                    }
                    break;
                }
            }
            exprs
        })
    }
}
