//! Top-level driver and item dispatch.

mod binding;
mod contract;
mod extern_def;
mod function;
mod generics;
mod import;
mod tag;
mod type_decl;

use surge_diagnostic::ErrorCode;
use surge_ir::ast::{ItemId, ItemKind, Visibility};
use surge_ir::{Span, TokenKind};
use tracing::debug;

use crate::grammar::{Modifiers, ParsedAttrs};
use crate::Parser;

impl Parser<'_> {
    /// Parse items until the end of input. Returns `true` if the tracer
    /// cancelled the parse.
    pub(crate) fn parse_items(&mut self) -> bool {
        loop {
            if self.tracer.is_some_and(|t| t.is_cancelled()) {
                debug!(items = self.items.len(), "parse cancelled");
                return true;
            }
            self.collect_directives();
            if self.at(TokenKind::Eof) {
                return false;
            }

            let before = self.stream.position();
            self.depth_reported = false;
            if self.at(TokenKind::Pragma) {
                self.parse_pragma();
            } else {
                let start = self.peek_span();
                let attrs = self.parse_attrs();
                let mods = self.parse_modifiers();
                self.seen_item = true;
                match self.parse_item(start, attrs, mods) {
                    Some(item) => self.item_done(item),
                    None => self.resync_top(before),
                }
            }

            // Progress guarantee.
            if self.stream.position() == before && !self.at(TokenKind::Eof) {
                self.bump();
            }
        }
    }

    fn item_done(&mut self, item: ItemId) {
        self.items.push(item);
        self.attach_directives(item);
        let node = self.ast.item(item);
        let (tag, span) = (node.kind.tag(), node.span);
        debug!(?tag, ?span, "item");
        if let Some(tracer) = self.tracer {
            tracer.item_parsed(tag, span);
        }
    }

    fn parse_item(&mut self, start: Span, attrs: ParsedAttrs, mods: Modifiers) -> Option<ItemId> {
        if attrs.span.is_some() {
            self.reject_positional_attrs(attrs.range, "items");
        }
        match self.peek_kind() {
            TokenKind::Import => self.parse_import(start, attrs, mods),
            TokenKind::Let | TokenKind::Const => self.parse_binding_item(start, attrs, mods),
            TokenKind::Fn => self.parse_fn_item(start, attrs, mods),
            TokenKind::Type => self.parse_type_item(start, attrs, mods),
            TokenKind::Enum => self.parse_enum_item(start, attrs, mods),
            TokenKind::Contract => self.parse_contract(start, attrs, mods),
            TokenKind::Tag => self.parse_tag(start, attrs, mods),
            TokenKind::Extern => self.parse_extern(start, attrs, mods),
            _ => {
                let span = self.peek_span();
                let found = self.found();
                if attrs.span.is_some() || !mods.is_empty() {
                    self.report(
                        ErrorCode::SynUnexpectedToken,
                        span,
                        format!("expected an item after attributes or modifiers, found {found}"),
                    )
                    .emit();
                } else {
                    self.report(
                        ErrorCode::SynUnexpectedTopLevel,
                        span,
                        format!("expected an item, found {found}"),
                    )
                    .emit();
                }
                None
            }
        }
    }

    /// Allocate an item spanning from `start` to the last consumed token.
    fn finish_item(
        &mut self,
        kind: ItemKind,
        start: Span,
        keyword: Span,
        visibility: Visibility,
        attrs: ParsedAttrs,
    ) -> ItemId {
        let span = self.span_from(start);
        self.ast.new_item(kind, span, keyword, visibility, attrs.range)
    }
}
