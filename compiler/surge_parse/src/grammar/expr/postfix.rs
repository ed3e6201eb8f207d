//! Postfix operators: calls, indexing, member access, casts.

use surge_diagnostic::ErrorCode;
use surge_ir::ast::{ExprId, ExprKind, TypeRange};
use surge_ir::{Span, StringId, TokenKind};

use crate::Parser;

impl Parser<'_> {
    pub(super) fn parse_postfix(&mut self, mut expr: ExprId, start: Span) -> Option<ExprId> {
        loop {
            let kind = match self.peek_kind() {
                TokenKind::LParen => self.parse_call_suffix(expr, TypeRange::EMPTY)?,
                TokenKind::LBracket => {
                    let open = self.bump().span;
                    let index = self.in_delimiters(Self::parse_expr)?;
                    self.expect_closing(TokenKind::RBracket, open)?;
                    ExprKind::Index {
                        target: expr,
                        index,
                    }
                }
                TokenKind::Dot => {
                    self.bump();
                    let member = self.parse_member_name()?;
                    ExprKind::Member {
                        target: expr,
                        member,
                        path: false,
                    }
                }
                TokenKind::ColonColon => {
                    self.bump();
                    if self.at(TokenKind::Lt) {
                        let type_args = self.parse_generic_args_opt()?;
                        if !self.at(TokenKind::LParen) {
                            self.unexpected("`(` after explicit type arguments");
                            return None;
                        }
                        self.parse_call_suffix(expr, type_args)?
                    } else {
                        let (member, _) = self.expect_ident("a name after `::`")?;
                        ExprKind::Member {
                            target: expr,
                            member,
                            path: true,
                        }
                    }
                }
                TokenKind::To => {
                    self.bump();
                    self.parse_cast_target(expr)?
                }
                TokenKind::Colon if self.ctx.suspend_colon_cast == 0 && self.at_colon_cast() => {
                    self.bump();
                    let ty = self.parse_type()?;
                    ExprKind::Cast {
                        value: expr,
                        ty: Some(ty),
                        raw: None,
                    }
                }
                _ => return Some(expr),
            };
            expr = self.ast.new_expr(kind, self.span_from(start));
        }
    }

    fn parse_call_suffix(&mut self, callee: ExprId, type_args: TypeRange) -> Option<ExprKind> {
        let open = self.bump().span;
        let args = self.parse_expr_list(TokenKind::RParen, "arguments");
        self.expect_closing(TokenKind::RParen, open)?;
        Some(ExprKind::Call {
            callee,
            args: self.ast.alloc_exprs(args),
            type_args,
        })
    }

    /// Identifiers, keywords used as names and tuple indices are all valid
    /// after `.`.
    fn parse_member_name(&mut self) -> Option<StringId> {
        let kind = self.peek_kind();
        if kind == TokenKind::Ident || kind == TokenKind::IntLit || kind.is_keyword() {
            let token = self.bump();
            return Some(self.intern(token.text));
        }
        self.expect_ident("a member name").map(|(name, _)| name)
    }

    /// `to Type`, or a literal target kept as a raw expression.
    fn parse_cast_target(&mut self, value: ExprId) -> Option<ExprKind> {
        if self.at_type_start() {
            let ty = self.parse_type()?;
            return Some(ExprKind::Cast {
                value,
                ty: Some(ty),
                raw: None,
            });
        }
        if self.peek_kind().is_literal() {
            let raw = self.parse_primary()?;
            return Some(ExprKind::Cast {
                value,
                ty: None,
                raw: Some(raw),
            });
        }
        let span = self.peek_span();
        let found = self.found();
        self.report(
            ErrorCode::SynExpectType,
            span,
            format!("expected a type after `to`, found {found}"),
        )
        .emit();
        None
    }

    /// `expr: Type` is a cast only when a type follows the colon.
    fn at_colon_cast(&mut self) -> bool {
        matches!(
            self.peek_nth_kind(1),
            TokenKind::Ident
                | TokenKind::Nothing
                | TokenKind::Own
                | TokenKind::Amp
                | TokenKind::Star
                | TokenKind::LParen
                | TokenKind::Fn
        )
    }
}
