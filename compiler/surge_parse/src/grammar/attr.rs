//! Attributes: `@name` or `@name(args…)`.
//!
//! Attributes are captured exactly as written. Whether a name is allowed is
//! checked by the consumer, which reports the problem and keeps the node.

use surge_diagnostic::{ErrorCode, FixSuggestion};
use surge_ir::ast::{Attr, AttrRange};
use surge_ir::{Span, TokenKind};

use crate::recovery::LIST_SYNC;
use crate::Parser;

/// Attributes consumed in front of a node.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ParsedAttrs {
    pub range: AttrRange,
    /// Cover of all attributes, if any were present.
    pub span: Option<Span>,
}

impl ParsedAttrs {
    pub(crate) const NONE: ParsedAttrs = ParsedAttrs {
        range: AttrRange::EMPTY,
        span: None,
    };
}

/// Attributes that only make sense on one kind of expression or statement.
const POSITIONAL_ATTRS: &[&str] = &["failfast", "local", "drop"];

impl Parser<'_> {
    /// Parse a run of attributes. Never fails: a malformed attribute is
    /// reported and skipped.
    pub(crate) fn parse_attrs(&mut self) -> ParsedAttrs {
        if !self.at(TokenKind::At) {
            return ParsedAttrs::NONE;
        }
        let mut attrs = Vec::new();
        let mut span: Option<Span> = None;
        while self.at(TokenKind::At) {
            if let Some(attr) = self.parse_attr() {
                span = Some(span.map_or(attr.span, |s| s.cover(attr.span)));
                attrs.push(attr);
            }
        }
        ParsedAttrs {
            range: self.ast.alloc_attrs(attrs),
            span,
        }
    }

    fn parse_attr(&mut self) -> Option<Attr> {
        let at = self.bump().span;
        let (name, name_span) = self.expect_ident("attribute name")?;
        let mut args = Vec::new();
        let mut has_parens = false;
        // `@name (…)` with a space is an attribute followed by a group.
        if self.at(TokenKind::LParen) && self.peek_span().start == name_span.end {
            has_parens = true;
            let open = self.bump().span;
            self.in_delimiters(|p| {
                while !p.at(TokenKind::RParen) && !p.at(TokenKind::Eof) {
                    match p.parse_expr() {
                        Some(arg) => args.push(arg),
                        None => {
                            p.resync_until(LIST_SYNC);
                        }
                    }
                    if p.eat(TokenKind::Comma).is_none() {
                        break;
                    }
                }
            });
            self.expect_closing(TokenKind::RParen, open);
        }
        Some(Attr {
            name,
            name_span,
            args: self.ast.alloc_exprs(args),
            has_parens,
            span: self.span_from(at),
        })
    }

    pub(crate) fn attr_named(&self, attr: &Attr, name: &str) -> bool {
        self.interner.lookup(attr.name) == Some(name)
    }

    /// Reject attributes that are only valid on async blocks, spawn
    /// expressions or statements.
    pub(crate) fn reject_positional_attrs(&mut self, attrs: AttrRange, context: &str) {
        let list = self.ast.attrs(attrs).to_vec();
        for attr in list {
            if POSITIONAL_ATTRS.iter().any(|n| self.attr_named(&attr, n)) {
                self.attr_not_allowed(&attr, context);
            }
        }
    }

    pub(crate) fn reject_attrs(&mut self, attrs: AttrRange, context: &str) {
        let list = self.ast.attrs(attrs).to_vec();
        for attr in list {
            self.attr_not_allowed(&attr, context);
        }
    }

    /// Accept only `allowed` (which take no arguments); report anything
    /// else.
    pub(crate) fn restrict_attrs(&mut self, attrs: AttrRange, allowed: &str, context: &str) {
        let list = self.ast.attrs(attrs).to_vec();
        for attr in list {
            if !self.attr_named(&attr, allowed) {
                self.attr_not_allowed(&attr, context);
            } else if attr.has_parens {
                let args = Span::new(attr.span.file, attr.name_span.end, attr.span.end);
                self.report(
                    ErrorCode::SynInvalidAttributeArgs,
                    args,
                    format!("`@{allowed}` takes no arguments"),
                )
                .fix(FixSuggestion::delete("remove the arguments", args).preferred())
                .emit();
            }
        }
    }

    fn attr_not_allowed(&mut self, attr: &Attr, context: &str) {
        let name = self.interner.lookup(attr.name).unwrap_or("?");
        self.report_with_delete(
            ErrorCode::SynAttributeNotAllowed,
            attr.span,
            format!("attribute `@{name}` is not allowed on {context}"),
            "remove the attribute",
        );
    }
}
