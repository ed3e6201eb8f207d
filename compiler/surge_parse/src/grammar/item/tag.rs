//! `(pub)? tag Ident <TypeParams>? ( TypeList? ,? ) ;`

use surge_diagnostic::ErrorCode;
use surge_ir::ast::{ItemId, ItemKind, ModifierFlags, TagItem};
use surge_ir::{Span, TokenKind};

use crate::grammar::{Modifiers, ParsedAttrs};
use crate::Parser;

impl Parser<'_> {
    pub(super) fn parse_tag(
        &mut self,
        start: Span,
        attrs: ParsedAttrs,
        mods: Modifiers,
    ) -> Option<ItemId> {
        let flags = self.check_modifiers(mods, ModifierFlags::PUBLIC, "tags");
        let keyword = self.bump().span;
        let (name, name_span) = self.expect_ident("a tag name")?;
        let type_params = self.parse_type_params_opt()?;
        let open = self.expect(TokenKind::LParen, ErrorCode::SynUnexpectedToken)?;
        let payload = self.parse_type_list_until(TokenKind::RParen)?;
        self.expect_closing(TokenKind::RParen, open)?;
        self.expect_semicolon("tag declaration");

        let item = TagItem {
            name,
            name_span,
            type_params,
            payload,
        };
        Some(self.finish_item(ItemKind::Tag(item), start, keyword, flags.visibility(), attrs))
    }
}
