//! Extern blocks: methods and fields attached to an existing type.
//!
//! ```text
//! extern < Type > { Member* }
//! Member := Attr* (Mods? fn … (; | { Block }) | field Ident : Type ;)
//! ```

use surge_diagnostic::ErrorCode;
use surge_ir::ast::{
    ExternItem, ExternMember, ExternMemberKind, ItemId, ItemKind, ModifierFlags, Visibility,
};
use surge_ir::{Span, TokenKind};

use crate::grammar::{Modifiers, ParsedAttrs};
use crate::recovery::TokenSet;
use crate::Parser;

/// Where a broken extern member ends.
const MEMBER_SYNC: TokenSet = TokenSet::from_kinds(&[
    TokenKind::Fn,
    TokenKind::Field,
    TokenKind::Pub,
    TokenKind::Async,
    TokenKind::At,
    TokenKind::RBrace,
]);

impl Parser<'_> {
    pub(super) fn parse_extern(
        &mut self,
        start: Span,
        attrs: ParsedAttrs,
        mods: Modifiers,
    ) -> Option<ItemId> {
        self.check_modifiers(mods, ModifierFlags::empty(), "extern blocks");
        let keyword = self.bump().span;
        let lt = self.expect(TokenKind::Lt, ErrorCode::SynUnexpectedToken)?;
        let target = self.parse_type()?;
        self.expect_closing(TokenKind::Gt, lt)?;
        let open = self.expect(TokenKind::LBrace, ErrorCode::SynUnexpectedToken)?;

        let mut members = Vec::new();
        while !self.at(TokenKind::RBrace) && !self.at(TokenKind::Eof) {
            let before = self.stream.position();
            match self.parse_extern_member() {
                Some(member) => members.push(member),
                None => {
                    self.resync_until(MEMBER_SYNC);
                    if self.stream.position() == before {
                        self.bump();
                    }
                }
            }
        }
        self.expect_closing(TokenKind::RBrace, open)?;

        let item = ExternItem {
            target,
            members: self.ast.alloc_extern_members(members),
        };
        Some(self.finish_item(ItemKind::Extern(item), start, keyword, Visibility::Private, attrs))
    }

    fn parse_extern_member(&mut self) -> Option<ExternMember> {
        let attrs = self.parse_attrs();
        if attrs.span.is_some() {
            self.reject_positional_attrs(attrs.range, "extern members");
        }
        let start = attrs.span.unwrap_or(self.peek_span());

        if self.eat(TokenKind::Field).is_some() {
            let (name, _) = self.expect_ident("a field name")?;
            self.expect(TokenKind::Colon, ErrorCode::SynExpectColon)?;
            let ty = self.parse_type()?;
            self.expect_semicolon("extern field");
            return Some(ExternMember {
                kind: ExternMemberKind::Field { name, ty },
                attrs: attrs.range,
                visibility: Visibility::Private,
                span: self.span_from(start),
            });
        }

        let mods = self.parse_modifiers();
        if !self.at(TokenKind::Fn) {
            let span = self.peek_span();
            let found = self.found();
            self.report(
                ErrorCode::SynIllegalItemInExtern,
                span,
                format!("only `fn` and `field` declarations are allowed in extern blocks, found {found}"),
            )
            .emit();
            return None;
        }
        let flags = self.check_modifiers(mods, ModifierFlags::all(), "extern methods");
        let sig = self.parse_fn_sig(flags)?;
        let body = if self.at(TokenKind::LBrace) {
            Some(self.parse_block()?)
        } else {
            self.expect_semicolon("method signature");
            None
        };

        let visibility = flags.visibility();
        if visibility == Visibility::Private {
            let overrides = self
                .ast
                .attrs(attrs.range)
                .iter()
                .find(|attr| self.attr_named(attr, "override"))
                .map(|attr| attr.span);
            if let Some(span) = overrides {
                self.report(
                    ErrorCode::SynVisibilityReduction,
                    span,
                    "`@override` of a public method must also be `pub`",
                )
                .emit();
            }
        }

        Some(ExternMember {
            kind: ExternMemberKind::Fn { sig, body },
            attrs: attrs.range,
            visibility,
            span: self.span_from(start),
        })
    }
}
