//! Statements and blocks.

use surge_diagnostic::{Applicability, ErrorCode, FixSuggestion};
use surge_ir::ast::{ExprId, ExprKind, StmtId, StmtKind, StmtRange};
use surge_ir::{Span, TokenKind};

use crate::Parser;

/// What a single statement parse produced.
enum StmtOutcome {
    Parsed(StmtId),
    /// A rejected declaration was reported and skipped; nothing to resync.
    Skipped,
    Failed,
}

impl Parser<'_> {
    /// `{ Stmt* }` as a block statement.
    pub(crate) fn parse_block(&mut self) -> Option<StmtId> {
        let start = self.peek_span();
        let stmts = self.parse_block_contents()?;
        Some(self.ast.new_stmt(StmtKind::Block(stmts), self.span_from(start)))
    }

    /// `{ Stmt* }` as a block expression.
    pub(crate) fn parse_block_expr(&mut self) -> Option<ExprId> {
        let start = self.peek_span();
        let stmts = self.parse_block_contents()?;
        Some(self.ast.new_expr(ExprKind::Block(stmts), self.span_from(start)))
    }

    /// Statements between braces. Broken statements are skipped with
    /// [`Parser::resync_statement`]; a missing `}` is reported but the
    /// block is still returned.
    pub(crate) fn parse_block_contents(&mut self) -> Option<StmtRange> {
        let open = self.expect(TokenKind::LBrace, ErrorCode::SynUnexpectedToken)?;
        let stmts = self.in_delimiters(|p| p.parse_stmts_until_brace(Vec::new()));
        self.expect_closing(TokenKind::RBrace, open);
        Some(self.ast.alloc_stmts(stmts))
    }

    /// Continue a block whose first statement has already been parsed.
    pub(crate) fn parse_stmts_until_brace(&mut self, mut stmts: Vec<StmtId>) -> Vec<StmtId> {
        while !self.at(TokenKind::RBrace) && !self.at(TokenKind::Eof) {
            let before = self.stream.position();
            match self.parse_stmt() {
                StmtOutcome::Parsed(stmt) => stmts.push(stmt),
                StmtOutcome::Skipped => {}
                StmtOutcome::Failed => self.resync_statement(),
            }
            if self.stream.position() == before && !self.at(TokenKind::Eof) {
                self.bump();
            }
        }
        stmts
    }

    fn parse_stmt(&mut self) -> StmtOutcome {
        let start = self.peek_span();
        match self.peek_kind() {
            TokenKind::Pub => {
                while self.at(TokenKind::Pub) {
                    let span = self.bump().span;
                    self.report_with_delete(
                        ErrorCode::SynModifierNotAllowed,
                        span,
                        "`pub` is not allowed inside a block",
                        "remove `pub`",
                    );
                }
                if self.at(TokenKind::RBrace) || self.at(TokenKind::Eof) {
                    return StmtOutcome::Skipped;
                }
                self.parse_stmt()
            }
            TokenKind::Fn => {
                self.report(
                    ErrorCode::FutNestedFnNotSupported,
                    start,
                    "nested functions are not supported yet",
                )
                .emit();
                self.skip_declaration();
                StmtOutcome::Skipped
            }
            TokenKind::Type => {
                self.report(
                    ErrorCode::SynTypeNotAllowed,
                    start,
                    "type declarations are only allowed at the top level",
                )
                .emit();
                self.skip_declaration();
                StmtOutcome::Skipped
            }
            _ => match self.nested(|p| p.parse_stmt_inner(start)) {
                Some(stmt) => StmtOutcome::Parsed(stmt),
                None => StmtOutcome::Failed,
            },
        }
    }

    fn parse_stmt_inner(&mut self, start: Span) -> Option<StmtId> {
        let kind = match self.peek_kind() {
            TokenKind::LBrace => return self.parse_block(),
            TokenKind::At if self.at_drop_attr() => self.parse_drop_stmt()?,
            TokenKind::Let | TokenKind::Const => {
                let is_const = self.at(TokenKind::Const);
                self.bump();
                let binding = self.parse_binding(is_const)?;
                self.expect_semicolon("binding");
                if is_const {
                    StmtKind::Const(binding)
                } else {
                    StmtKind::Let(binding)
                }
            }
            TokenKind::Signal => self.parse_signal_stmt()?,
            TokenKind::Return => {
                self.bump();
                let value = if self.at(TokenKind::Semicolon) || self.at(TokenKind::RBrace) {
                    None
                } else {
                    Some(self.parse_expr()?)
                };
                self.expect_semicolon("`return`");
                StmtKind::Return(value)
            }
            TokenKind::If => return self.parse_if_stmt(),
            TokenKind::While => {
                self.bump();
                let cond = self.without_struct_literals(Self::parse_expr)?;
                let body = self.parse_required_block("`while`")?;
                StmtKind::While { cond, body }
            }
            TokenKind::For => return self.parse_for_stmt(),
            TokenKind::Break | TokenKind::Continue => {
                let kind = if self.bump().kind == TokenKind::Break {
                    StmtKind::Break
                } else {
                    StmtKind::Continue
                };
                self.expect_semicolon(if matches!(kind, StmtKind::Break) {
                    "`break`"
                } else {
                    "`continue`"
                });
                kind
            }
            _ => self.parse_expr_stmt()?,
        };
        Some(self.ast.new_stmt(kind, self.span_from(start)))
    }

    /// An expression statement. Only `compare` may omit the `;`.
    fn parse_expr_stmt(&mut self) -> Option<StmtKind> {
        let expr = self.parse_expr()?;
        let has_semicolon = self.eat(TokenKind::Semicolon).is_some();
        if !has_semicolon && !matches!(self.ast.expr(expr).kind, ExprKind::Compare { .. }) {
            self.expect_semicolon("expression");
        }
        Some(StmtKind::Expr {
            expr,
            missing_semicolon: !has_semicolon,
        })
    }

    fn at_drop_attr(&mut self) -> bool {
        self.peek_nth_kind(1) == TokenKind::Ident && self.stream.peek_nth(1).text == "drop"
    }

    /// `@drop expr;`
    fn parse_drop_stmt(&mut self) -> Option<StmtKind> {
        let attrs = self.parse_attrs();
        self.restrict_attrs(attrs.range, "drop", "statements");
        let value = self.parse_expr()?;
        self.expect_semicolon("`@drop`");
        Some(StmtKind::Drop(value))
    }

    /// `signal name (: T)? = value;`
    fn parse_signal_stmt(&mut self) -> Option<StmtKind> {
        self.bump();
        let (name, name_span) = self.expect_ident("a signal name")?;
        let ty = if self.eat(TokenKind::Colon).is_some() {
            Some(self.parse_type()?)
        } else {
            None
        };
        self.expect(TokenKind::Eq, ErrorCode::SynUnexpectedToken)?;
        let value = self.parse_expr()?;
        self.expect_semicolon("signal");
        Some(StmtKind::Signal {
            name,
            name_span,
            ty,
            value,
        })
    }

    /// `if cond { … } (else if … | else { … })?`
    fn parse_if_stmt(&mut self) -> Option<StmtId> {
        let start = self.bump().span;
        let cond = self.without_struct_literals(Self::parse_expr)?;
        let then_block = self.parse_required_block("`if`")?;
        let else_branch = if self.eat(TokenKind::Else).is_some() {
            if self.at(TokenKind::If) {
                Some(self.nested(Self::parse_if_stmt)?)
            } else {
                Some(self.parse_required_block("`else`")?)
            }
        } else {
            None
        };
        Some(self.ast.new_stmt(
            StmtKind::If {
                cond,
                then_block,
                else_branch,
            },
            self.span_from(start),
        ))
    }

    /// `for (init; cond; post) { … }` or `for name (: T)? in iter { … }`.
    fn parse_for_stmt(&mut self) -> Option<StmtId> {
        let start = self.bump().span;
        let kind = if self.at(TokenKind::LParen) {
            self.parse_classic_for()?
        } else {
            let (name, name_span) = self.expect_ident("a loop variable")?;
            let ty = if self.eat(TokenKind::Colon).is_some() {
                Some(self.parse_type()?)
            } else {
                None
            };
            if self.eat(TokenKind::In).is_none() {
                let at = self.peek_span().zero_at_start();
                let span = self.peek_span();
                let found = self.found();
                self.report(
                    ErrorCode::SynForMissingIn,
                    span,
                    format!("expected `in` after the loop variable, found {found}"),
                )
                .fix(
                    FixSuggestion::insert("insert `in`", at, "in ")
                        .with_applicability(Applicability::SafeWithHeuristics)
                        .preferred(),
                )
                .emit();
                if !self.at_expr_start() {
                    return None;
                }
            }
            let iter = self.without_struct_literals(Self::parse_expr)?;
            let body = self.parse_required_block("`for`")?;
            StmtKind::ForIn {
                name,
                name_span,
                ty,
                iter,
                body,
            }
        };
        Some(self.ast.new_stmt(kind, self.span_from(start)))
    }

    fn parse_classic_for(&mut self) -> Option<StmtKind> {
        let open = self.bump().span;
        let (init, cond, post) = self.in_delimiters(|p| {
            let init = if p.at(TokenKind::Semicolon) {
                None
            } else if p.at(TokenKind::Let) {
                let start = p.bump().span;
                let binding = p.parse_binding(false)?;
                Some(p.ast.new_stmt(StmtKind::Let(binding), p.span_from(start)))
            } else {
                let start = p.peek_span();
                let expr = p.parse_expr()?;
                let kind = StmtKind::Expr {
                    expr,
                    missing_semicolon: false,
                };
                Some(p.ast.new_stmt(kind, p.span_from(start)))
            };
            p.expect(TokenKind::Semicolon, ErrorCode::SynExpectSemicolon)?;
            let cond = if p.at(TokenKind::Semicolon) {
                None
            } else {
                Some(p.parse_expr()?)
            };
            p.expect(TokenKind::Semicolon, ErrorCode::SynExpectSemicolon)?;
            let post = if p.at(TokenKind::RParen) {
                None
            } else {
                Some(p.parse_expr()?)
            };
            Some((init, cond, post))
        })?;
        self.expect_closing(TokenKind::RParen, open)?;
        let body = self.parse_required_block("`for`")?;
        Some(StmtKind::ForClassic {
            init,
            cond,
            post,
            body,
        })
    }

    /// Control-flow bodies must be braced.
    fn parse_required_block(&mut self, what: &str) -> Option<StmtId> {
        if self.at(TokenKind::LBrace) {
            return self.parse_block();
        }
        let span = self.peek_span();
        let found = self.found();
        self.report(
            ErrorCode::SynUnexpectedToken,
            span,
            format!("expected `{{` to start the {what} body, found {found}"),
        )
        .emit();
        None
    }
}
