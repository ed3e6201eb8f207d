//! `let` / `const` bindings, shared by items and statements.
//!
//! ```text
//! (let | const) mut? Ident (: Type)? (= Expr)? ;
//! ```

use surge_diagnostic::{Applicability, ErrorCode, FixSuggestion};
use surge_ir::ast::{Binding, ItemId, ItemKind, ModifierFlags};
use surge_ir::{Span, TokenKind};

use crate::grammar::{Modifiers, ParsedAttrs};
use crate::Parser;

impl Parser<'_> {
    pub(super) fn parse_binding_item(
        &mut self,
        start: Span,
        attrs: ParsedAttrs,
        mods: Modifiers,
    ) -> Option<ItemId> {
        let is_const = self.at(TokenKind::Const);
        let what = if is_const { "constants" } else { "`let` items" };
        let flags = self.check_modifiers(mods, ModifierFlags::PUBLIC, what);
        let keyword = self.bump().span;
        let binding = self.parse_binding(is_const)?;
        self.expect_semicolon(if is_const { "constant" } else { "`let` binding" });
        let kind = if is_const {
            ItemKind::Const(binding)
        } else {
            ItemKind::Let(binding)
        };
        Some(self.finish_item(kind, start, keyword, flags.visibility(), attrs))
    }

    /// The part after the keyword, without the terminator. A binding that
    /// has neither a type nor a value is reported but still returned.
    pub(crate) fn parse_binding(&mut self, is_const: bool) -> Option<Binding> {
        let mut mutable = false;
        if let Some(span) = self.eat(TokenKind::Mut) {
            if is_const {
                self.report_with_delete(
                    ErrorCode::SynModifierNotAllowed,
                    span,
                    "constants cannot be `mut`",
                    "remove `mut`",
                );
            } else {
                mutable = true;
            }
        }

        let (name, name_span) = self.expect_ident("a binding name")?;
        let ty = if self.eat(TokenKind::Colon).is_some() {
            Some(self.parse_type()?)
        } else {
            None
        };
        let value = if self.eat(TokenKind::Eq).is_some() {
            Some(self.parse_expr()?)
        } else {
            None
        };

        if ty.is_none() && value.is_none() {
            let at = name_span.zero_at_end();
            self.report(
                ErrorCode::SynExpectColon,
                at,
                "expected `:` and a type, or `=` and a value",
            )
            .fix(
                FixSuggestion::insert("add a type annotation", at, ":")
                    .with_applicability(Applicability::ManualReview)
                    .preferred(),
            )
            .fix(
                FixSuggestion::delete("remove the binding name", name_span)
                    .with_applicability(Applicability::ManualReview),
            )
            .emit();
        } else if is_const && value.is_none() {
            let at = self.last_span().zero_at_end();
            self.report(
                ErrorCode::SynConstMissingValue,
                at,
                "constants must be initialised",
            )
            .fix(
                FixSuggestion::insert("add a value", at, " = ")
                    .with_applicability(Applicability::ManualReview),
            )
            .emit();
        }

        Some(Binding {
            name,
            name_span,
            mutable,
            ty,
            value,
        })
    }
}
