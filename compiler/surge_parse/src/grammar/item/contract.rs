//! Contracts: structural interfaces made of fields and signatures.
//!
//! ```text
//! (pub)? contract Ident <TypeParams>? ( Member* ) ;?
//! Member := Attr* (field Ident : Type ; | Mods? fn … ;)
//! ```

use surge_diagnostic::ErrorCode;
use surge_ir::ast::{ContractItem, ContractMember, ContractMemberKind, ItemId, ItemKind, ModifierFlags};
use surge_ir::{Span, TokenKind};

use crate::grammar::{Modifiers, ParsedAttrs};
use crate::Parser;

impl Parser<'_> {
    pub(super) fn parse_contract(
        &mut self,
        start: Span,
        attrs: ParsedAttrs,
        mods: Modifiers,
    ) -> Option<ItemId> {
        let flags = self.check_modifiers(mods, ModifierFlags::PUBLIC, "contracts");
        let keyword = self.bump().span;
        let (name, name_span) = self.expect_ident("a contract name")?;
        let type_params = self.parse_type_params_opt()?;
        let open = self.expect(TokenKind::LParen, ErrorCode::SynUnexpectedToken)?;

        let mut members = Vec::new();
        while !self.at(TokenKind::RParen) && !self.at(TokenKind::Eof) {
            members.push(self.parse_contract_member()?);
        }
        self.expect_closing(TokenKind::RParen, open)?;
        self.eat(TokenKind::Semicolon);

        let item = ContractItem {
            name,
            name_span,
            type_params,
            members: self.ast.alloc_contract_members(members),
        };
        Some(self.finish_item(ItemKind::Contract(item), start, keyword, flags.visibility(), attrs))
    }

    fn parse_contract_member(&mut self) -> Option<ContractMember> {
        let attrs = self.parse_attrs();
        if attrs.span.is_some() {
            self.reject_positional_attrs(attrs.range, "contract members");
        }
        let start = attrs.span.unwrap_or(self.peek_span());

        if self.eat(TokenKind::Field).is_some() {
            let (name, _) = self.expect_ident("a field name")?;
            self.expect(TokenKind::Colon, ErrorCode::SynExpectColon)?;
            let ty = self.parse_type()?;
            if !self.expect_semicolon("contract field") {
                return None;
            }
            return Some(ContractMember {
                kind: ContractMemberKind::Field { name, ty },
                attrs: attrs.range,
                span: self.span_from(start),
            });
        }

        let mods = self.parse_modifiers();
        if !self.at(TokenKind::Fn) {
            self.unexpected("`field` or `fn` in a contract");
            return None;
        }
        let flags = self.check_modifiers(mods, ModifierFlags::all(), "contract methods");
        let sig = self.parse_fn_sig(flags)?;
        if self.at(TokenKind::LBrace) {
            // Default method bodies are not part of the language; the block
            // is consumed so the remaining members still parse.
            let body_start = self.peek_span();
            self.parse_block();
            let body = self.span_from(body_start);
            self.report_with_delete(
                ErrorCode::SynUnexpectedToken,
                body,
                "contract methods cannot have a body",
                "remove the body",
            );
            self.eat(TokenKind::Semicolon);
        } else if !self.expect_semicolon("contract method") {
            return None;
        }
        Some(ContractMember {
            kind: ContractMemberKind::Fn(sig),
            attrs: attrs.range,
            span: self.span_from(start),
        })
    }
}
