//! `type` and `enum` declarations.
//!
//! ```text
//! type Ident <TypeParams>? = TypeBody ;
//! TypeBody := { StructFields }                 (struct)
//!           | Type : { StructFields }          (struct with base)
//!           | Type (| UnionMember)+            (union)
//!           | Type                             (alias)
//! UnionMember := nothing | Type | Ident ( TypeList? ,? )
//!
//! enum Ident <TypeParams>? (: Type)? = { Variant (, Variant)* ,? } ;?
//! ```
//!
//! Enums lower to a type item with an enum body.

use rustc_hash::FxHashMap;
use surge_diagnostic::{Applicability, ErrorCode, FixSuggestion};
use surge_ir::ast::{
    EnumVariant, ItemId, ItemKind, ModifierFlags, StructField, StructFieldRange, TypeBody,
    TypeItem, TypeParamRange, TypeRange, UnionMember, UnionMemberKind,
};
use surge_ir::{Span, StringId, TokenKind};

use crate::grammar::{Modifiers, ParsedAttrs};
use crate::recovery::LIST_SYNC;
use crate::Parser;

impl Parser<'_> {
    pub(super) fn parse_type_item(
        &mut self,
        start: Span,
        attrs: ParsedAttrs,
        mods: Modifiers,
    ) -> Option<ItemId> {
        let flags = self.check_modifiers(mods, ModifierFlags::PUBLIC, "type declarations");
        let keyword = self.bump().span;
        let (name, name_span, type_params) = self.parse_decl_head()?;
        self.expect_decl_equals()?;

        let body = if self.at(TokenKind::LBrace) {
            TypeBody::Struct {
                base: None,
                fields: self.parse_struct_fields()?,
            }
        } else {
            self.parse_type_body()?
        };
        // A struct body already ends in `}`; the `;` is optional there.
        let ends_in_brace = matches!(body, TypeBody::Struct { .. });
        if !(ends_in_brace && !self.at(TokenKind::Semicolon)) {
            self.expect_semicolon("type declaration");
        }

        let item = TypeItem {
            name,
            name_span,
            type_params,
            body,
        };
        Some(self.finish_item(ItemKind::Type(item), start, keyword, flags.visibility(), attrs))
    }

    pub(super) fn parse_enum_item(
        &mut self,
        start: Span,
        attrs: ParsedAttrs,
        mods: Modifiers,
    ) -> Option<ItemId> {
        let flags = self.check_modifiers(mods, ModifierFlags::PUBLIC, "enums");
        let keyword = self.bump().span;
        let (name, name_span, type_params) = self.parse_decl_head()?;
        let base = if self.eat(TokenKind::Colon).is_some() {
            Some(self.parse_type()?)
        } else {
            None
        };
        self.expect_decl_equals()?;
        if !self.at(TokenKind::LBrace) {
            self.expect_body("enum");
            return None;
        }

        let open = self.bump().span;
        let mut variants = Vec::new();
        while !self.at(TokenKind::RBrace) && !self.at(TokenKind::Eof) {
            let Some((name, name_span)) = self.expect_ident("an enum variant") else {
                self.resync_until(LIST_SYNC);
                if self.eat(TokenKind::Comma).is_some() {
                    continue;
                }
                break;
            };
            let value = if self.eat(TokenKind::Eq).is_some() {
                Some(self.parse_expr()?)
            } else {
                None
            };
            variants.push(EnumVariant {
                name,
                value,
                span: self.span_from(name_span),
            });
            if self.eat(TokenKind::Comma).is_none() {
                if self.at(TokenKind::Ident) {
                    self.missing_comma("enum variants");
                    continue;
                }
                break;
            }
        }
        self.expect_closing(TokenKind::RBrace, open)?;
        self.eat(TokenKind::Semicolon);

        let item = TypeItem {
            name,
            name_span,
            type_params,
            body: TypeBody::Enum {
                base,
                variants: self.ast.alloc_enum_variants(variants),
            },
        };
        Some(self.finish_item(ItemKind::Type(item), start, keyword, flags.visibility(), attrs))
    }

    fn parse_decl_head(&mut self) -> Option<(StringId, Span, TypeParamRange)> {
        let (name, name_span) = self.expect_ident("a type name")?;
        let type_params = self.parse_type_params_opt()?;
        Some((name, name_span, type_params))
    }

    /// `=` before a declaration body. A missing `=` is reported with an
    /// insertion fix and parsing continues when a body follows.
    fn expect_decl_equals(&mut self) -> Option<()> {
        if self.eat(TokenKind::Eq).is_some() {
            return Some(());
        }
        let at = self.last_span().zero_at_end();
        let span = self.peek_span();
        let found = self.found();
        self.report(
            ErrorCode::SynTypeExpectEquals,
            span,
            format!("expected `=` before the declaration body, found {found}"),
        )
        .fix(
            FixSuggestion::insert("insert `=`", at, " =")
                .with_applicability(Applicability::AlwaysSafe)
                .preferred(),
        )
        .emit();
        (self.at(TokenKind::LBrace) || self.at_type_start()).then_some(())
    }

    fn expect_body(&mut self, what: &str) {
        let span = self.peek_span();
        let found = self.found();
        self.report(
            ErrorCode::SynTypeExpectBody,
            span,
            format!("expected `{{` to start the {what} body, found {found}"),
        )
        .emit();
    }

    /// Alias, union, or struct with a base type.
    fn parse_type_body(&mut self) -> Option<TypeBody> {
        let first = self.parse_union_member()?;

        if first.kind == UnionMemberKind::Type && self.eat(TokenKind::Colon).is_some() {
            if !self.at(TokenKind::LBrace) {
                self.expect_body("struct");
                return None;
            }
            return Some(TypeBody::Struct {
                base: first.ty,
                fields: self.parse_struct_fields()?,
            });
        }

        if first.kind == UnionMemberKind::Type && !self.at(TokenKind::Pipe) {
            let ty = first.ty?;
            return Some(TypeBody::Alias(ty));
        }

        let mut members = vec![first];
        while self.eat(TokenKind::Pipe).is_some() {
            members.push(self.parse_union_member()?);
        }
        Some(TypeBody::Union(self.ast.alloc_union_members(members)))
    }

    /// `Ident(TypeList)` is a tag member; anything else is a type.
    fn parse_union_member(&mut self) -> Option<UnionMember> {
        let start = self.peek_span();
        if self.at(TokenKind::Ident) && self.peek_nth_kind(1) == TokenKind::LParen {
            let (tag, _) = self.expect_ident("a tag name")?;
            let open = self.bump().span;
            let tag_args = self.parse_type_list_until(TokenKind::RParen)?;
            self.expect_closing(TokenKind::RParen, open)?;
            return Some(UnionMember {
                kind: UnionMemberKind::Tag,
                ty: None,
                tag: Some(tag),
                tag_args,
                span: self.span_from(start),
            });
        }
        let ty = self.parse_type()?;
        Some(UnionMember {
            kind: UnionMemberKind::Type,
            ty: Some(ty),
            tag: None,
            tag_args: TypeRange::EMPTY,
            span: self.span_from(start),
        })
    }

    /// `{ field: Type = default, … }`. Duplicate names are reported with a
    /// note at the earlier declaration; both fields are kept.
    fn parse_struct_fields(&mut self) -> Option<StructFieldRange> {
        let open = self.bump().span;
        let mut fields = Vec::new();
        let mut seen: FxHashMap<StringId, Span> = FxHashMap::default();
        while !self.at(TokenKind::RBrace) && !self.at(TokenKind::Eof) {
            let attrs = self.parse_attrs();
            if attrs.span.is_some() {
                self.reject_positional_attrs(attrs.range, "fields");
            }
            let start = attrs.span.unwrap_or(self.peek_span());
            let (name, name_span) = self.expect_ident("a field name")?;
            self.expect(TokenKind::Colon, ErrorCode::SynExpectColon)?;
            let ty = self.parse_type()?;
            let default = if self.eat(TokenKind::Eq).is_some() {
                Some(self.parse_expr()?)
            } else {
                None
            };

            if let Some(&previous) = seen.get(&name) {
                let text = self.slice(name_span);
                self.report(
                    ErrorCode::SynTypeFieldConflict,
                    name_span,
                    format!("field `{text}` is declared more than once"),
                )
                .note(previous, "previous declaration here")
                .emit();
            } else {
                seen.insert(name, name_span);
            }
            fields.push(StructField {
                name,
                ty,
                default,
                attrs: attrs.range,
                span: self.span_from(start),
            });

            if self.eat(TokenKind::Comma).is_none() {
                if self.at(TokenKind::Ident) || self.at(TokenKind::At) {
                    self.missing_comma("fields");
                    continue;
                }
                break;
            }
        }
        self.expect_closing(TokenKind::RBrace, open)?;
        Some(self.ast.alloc_struct_fields(fields))
    }
}
