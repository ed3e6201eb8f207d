//! Diagnostic helpers shared by the grammar.

use surge_diagnostic::{Applicability, DiagnosticBuilder, ErrorCode, FixSuggestion};
use surge_ir::{Span, StringId, TokenKind};
use surge_lexer::LexErrorKind;

use crate::Parser;

impl Parser<'_> {
    /// Start a diagnostic with the code's default severity.
    ///
    /// Scan errors found so far are flushed first so diagnostics stay in
    /// discovery order.
    pub(crate) fn report(
        &mut self,
        code: ErrorCode,
        span: Span,
        message: impl Into<String>,
    ) -> DiagnosticBuilder<'_> {
        self.flush_lex_errors();
        self.bag.build(code, code.default_severity(), span, message)
    }

    pub(crate) fn flush_lex_errors(&mut self) {
        for error in self.stream.take_lex_errors() {
            let (code, message) = match error.kind {
                LexErrorKind::InvalidCharacter => (
                    ErrorCode::LexInvalidCharacter,
                    format!("invalid character `{}`", self.slice(error.span)),
                ),
                LexErrorKind::UnterminatedString => (
                    ErrorCode::LexUnterminatedString,
                    "unterminated string literal".to_string(),
                ),
                LexErrorKind::UnterminatedComment => (
                    ErrorCode::LexUnterminatedComment,
                    "unterminated block comment".to_string(),
                ),
            };
            self.bag
                .build(code, code.default_severity(), error.span, message)
                .emit();
        }
    }

    /// Human description of the next token for "found …" messages.
    pub(crate) fn found(&mut self) -> String {
        let token = self.peek();
        match token.kind {
            TokenKind::Eof => "end of file".to_string(),
            TokenKind::Ident => format!("identifier `{}`", token.text),
            kind if kind.is_literal() => format!("literal `{}`", token.text),
            _ => format!("`{}`", token.text),
        }
    }

    /// Report `SynUnexpectedToken` at the next token.
    pub(crate) fn unexpected(&mut self, expected: &str) {
        let span = self.peek_span();
        let found = self.found();
        self.report(
            ErrorCode::SynUnexpectedToken,
            span,
            format!("expected {expected}, found {found}"),
        )
        .emit();
    }

    /// Consume `kind` or report `code` at the next token.
    pub(crate) fn expect(&mut self, kind: TokenKind, code: ErrorCode) -> Option<Span> {
        if let Some(span) = self.eat(kind) {
            return Some(span);
        }
        let span = self.peek_span();
        let found = self.found();
        self.report(
            code,
            span,
            format!("expected {}, found {found}", kind.display_name()),
        )
        .emit();
        None
    }

    /// Consume an identifier or report `SynExpectIdentifier`.
    pub(crate) fn expect_ident(&mut self, what: &str) -> Option<(StringId, Span)> {
        if self.at(TokenKind::Ident) {
            let token = self.bump();
            return Some((self.intern(token.text), token.span));
        }
        let span = self.peek_span();
        let found = self.found();
        self.report(
            ErrorCode::SynExpectIdentifier,
            span,
            format!("expected {what}, found {found}"),
        )
        .emit();
        None
    }

    /// Consume `;` or report `SynExpectSemicolon` with an insertion fix
    /// anchored right after the last consumed token.
    pub(crate) fn expect_semicolon(&mut self, after: &str) -> bool {
        if self.eat(TokenKind::Semicolon).is_some() {
            return true;
        }
        let at = self.last_span().zero_at_end();
        self.report(
            ErrorCode::SynExpectSemicolon,
            at,
            format!("expected `;` after {after}"),
        )
        .fix(
            FixSuggestion::insert("insert `;`", at, ";")
                .with_applicability(Applicability::AlwaysSafe)
                .preferred(),
        )
        .emit();
        false
    }

    /// Consume the closer matching `open`, or report the matching
    /// `SynUnclosed*` code with a note at the opener and an insertion fix.
    pub(crate) fn expect_closing(&mut self, close: TokenKind, open: Span) -> Option<Span> {
        if close == TokenKind::Gt {
            if let Some(span) = self.stream.eat_gt() {
                return Some(span);
            }
        } else if let Some(span) = self.eat(close) {
            return Some(span);
        }
        let (code, text) = match close {
            TokenKind::RParen => (ErrorCode::SynUnclosedParen, ")"),
            TokenKind::RBracket => (ErrorCode::SynUnclosedSquareBracket, "]"),
            TokenKind::Gt => (ErrorCode::SynUnclosedAngleBracket, ">"),
            _ => (ErrorCode::SynUnclosedBrace, "}"),
        };
        let span = self.peek_span();
        let found = self.found();
        let at = self.last_span().zero_at_end();
        self.report(code, span, format!("expected `{text}`, found {found}"))
            .note(open, "unclosed delimiter opened here")
            .fix(
                FixSuggestion::insert(format!("insert `{text}`"), at, text)
                    .with_applicability(Applicability::SafeWithHeuristics)
                    .preferred(),
            )
            .emit();
        None
    }

    /// Report `SynExpectComma` between two list elements, with an insertion
    /// fix after the previous element.
    pub(crate) fn missing_comma(&mut self, what: &str) {
        let at = self.last_span().zero_at_end();
        let span = self.peek_span();
        self.report(
            ErrorCode::SynExpectComma,
            span,
            format!("expected `,` between {what}"),
        )
        .fix(FixSuggestion::insert("insert `,`", at, ",").preferred())
        .emit();
    }

    /// Report `code` and offer to delete `span`.
    pub(crate) fn report_with_delete(
        &mut self,
        code: ErrorCode,
        span: Span,
        message: impl Into<String>,
        label: &str,
    ) {
        self.report(code, span, message)
            .fix(FixSuggestion::delete(label, span).preferred())
            .emit();
    }
}
