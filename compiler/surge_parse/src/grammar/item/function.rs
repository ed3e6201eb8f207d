//! Function items and signatures.
//!
//! ```text
//! Mods? fn <TypeParams>? Ident <TypeParams>? ( Params ,? ) (-> Type)? ({ Block } | ;)
//! Param := Attr* ...? Ident : Type (= Expr)?
//! ```

use surge_diagnostic::{ErrorCode, FixSuggestion};
use surge_ir::ast::{FnItem, FnParam, FnParamRange, FnSig, ItemId, ItemKind, ModifierFlags, TypeId};
use surge_ir::{Span, TokenKind};

use crate::grammar::{Modifiers, ParsedAttrs};
use crate::recovery::LIST_SYNC;
use crate::Parser;

impl Parser<'_> {
    pub(super) fn parse_fn_item(
        &mut self,
        start: Span,
        attrs: ParsedAttrs,
        mods: Modifiers,
    ) -> Option<ItemId> {
        let flags = self.check_modifiers(mods, ModifierFlags::all(), "functions");
        let keyword = self.peek_span();
        let sig = self.parse_fn_sig(flags)?;
        let body = if self.at(TokenKind::LBrace) {
            Some(self.parse_block()?)
        } else {
            self.expect_semicolon("function signature");
            None
        };
        Some(self.finish_item(
            ItemKind::Fn(FnItem { sig, body }),
            start,
            keyword,
            flags.visibility(),
            attrs,
        ))
    }

    /// Signature from `fn` through the return type. A missing return type
    /// becomes the path `nothing`, placed right after the parameter list.
    pub(crate) fn parse_fn_sig(&mut self, modifiers: ModifierFlags) -> Option<FnSig> {
        let start = self.bump().span;
        let before = self.parse_type_params_opt()?;
        let (name, name_span) = self.expect_ident("a function name")?;
        let after_start = self.peek_span();
        let after = self.parse_type_params_opt()?;
        let type_params = match (before.is_empty(), after.is_empty()) {
            (false, false) => {
                let span = self.span_from(after_start);
                self.report_with_delete(
                    ErrorCode::SynDuplicateTypeParams,
                    span,
                    "generic parameters may be declared before or after the name, not both",
                    "remove the second list",
                );
                before
            }
            (true, _) => after,
            (false, true) => before,
        };

        let params = self.parse_fn_params()?;

        let return_type = if let Some(arrow) = self.eat(TokenKind::Arrow) {
            if self.at_type_start() {
                self.parse_type()?
            } else {
                let found = self.found();
                let span = self.peek_span();
                self.report(
                    ErrorCode::SynUnexpectedToken,
                    span,
                    format!("expected a return type after `->`, found {found}"),
                )
                .fix(FixSuggestion::delete("remove `->`", arrow).preferred())
                .emit();
                self.nothing_type(arrow.zero_at_start())
            }
        } else {
            self.nothing_type(self.last_span().zero_at_end())
        };

        Some(FnSig {
            name,
            name_span,
            type_params,
            params,
            return_type,
            modifiers,
            span: self.span_from(start),
        })
    }

    fn parse_fn_params(&mut self) -> Option<FnParamRange> {
        let open = self.expect(TokenKind::LParen, ErrorCode::SynUnexpectedToken)?;
        let mut params: Vec<FnParam> = Vec::new();
        while !self.at(TokenKind::RParen) && !self.at(TokenKind::Eof) {
            match self.parse_fn_param() {
                Some(param) => params.push(param),
                None => self.resync_until(LIST_SYNC),
            }
            if self.eat(TokenKind::Comma).is_none() {
                if self.at(TokenKind::Ident) || self.at(TokenKind::DotDotDot) {
                    self.missing_comma("parameters");
                    continue;
                }
                break;
            }
        }
        self.expect_closing(TokenKind::RParen, open)?;

        let last = params.len().saturating_sub(1);
        for (i, param) in params.iter().enumerate() {
            if param.variadic && i != last {
                self.report(
                    ErrorCode::SynVariadicMustBeLast,
                    param.span,
                    "a variadic parameter must be the last parameter",
                )
                .emit();
            }
        }
        Some(self.ast.alloc_fn_params(params))
    }

    fn parse_fn_param(&mut self) -> Option<FnParam> {
        let attrs = self.parse_attrs();
        if attrs.span.is_some() {
            self.reject_positional_attrs(attrs.range, "parameters");
        }
        let start = attrs.span.unwrap_or(self.peek_span());
        let variadic = self.eat(TokenKind::DotDotDot).is_some();
        let (name, _) = self.expect_ident("a parameter name")?;
        self.expect(TokenKind::Colon, ErrorCode::SynExpectColon)?;
        let ty = self.parse_type()?;
        let default = if self.eat(TokenKind::Eq).is_some() {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Some(FnParam {
            name,
            ty,
            default,
            variadic,
            attrs: attrs.range,
            span: self.span_from(start),
        })
    }

    /// The path type `nothing` at `at`.
    pub(crate) fn nothing_type(&mut self, at: Span) -> TypeId {
        let name = self.intern("nothing");
        self.ast.new_simple_path_type(name, at)
    }
}

