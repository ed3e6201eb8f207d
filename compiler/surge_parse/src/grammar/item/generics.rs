//! Generic parameter lists: `<T: A + B<T>, const N: uint>`.

use smallvec::SmallVec;
use surge_ir::ast::{TypeParam, TypeParamBound, TypeParamRange};
use surge_ir::TokenKind;

use crate::Parser;

impl Parser<'_> {
    /// Parse `<…>` if present. Returns `None` only on a hard failure.
    pub(crate) fn parse_type_params_opt(&mut self) -> Option<TypeParamRange> {
        if self.at(TokenKind::Lt) {
            self.parse_type_params()
        } else {
            Some(TypeParamRange::EMPTY)
        }
    }

    pub(crate) fn parse_type_params(&mut self) -> Option<TypeParamRange> {
        let open = self.bump().span;
        let mut params: SmallVec<[TypeParam; 4]> = SmallVec::new();
        while !self.at_generic_close() && !self.at(TokenKind::Eof) {
            params.push(self.parse_type_param()?);
            if self.eat(TokenKind::Comma).is_none() {
                if self.at(TokenKind::Ident) {
                    self.missing_comma("generic parameters");
                    continue;
                }
                break;
            }
        }
        self.expect_closing(TokenKind::Gt, open)?;
        Some(self.ast.alloc_type_params(params))
    }

    fn parse_type_param(&mut self) -> Option<TypeParam> {
        let start = self.peek_span();
        let is_const = self.eat(TokenKind::Const).is_some();
        let (name, _) = self.expect_ident("a generic parameter name")?;

        let mut const_type = None;
        let mut bounds: SmallVec<[TypeParamBound; 2]> = SmallVec::new();
        if self.eat(TokenKind::Colon).is_some() {
            if is_const {
                const_type = Some(self.parse_type()?);
            } else {
                loop {
                    bounds.push(self.parse_type_param_bound()?);
                    if self.eat(TokenKind::Plus).is_none() {
                        break;
                    }
                }
            }
        }
        Some(TypeParam {
            name,
            is_const,
            const_type,
            bounds: self.ast.alloc_type_param_bounds(bounds),
            span: self.span_from(start),
        })
    }

    /// `Name` or `Name<Type, …>`.
    fn parse_type_param_bound(&mut self) -> Option<TypeParamBound> {
        let (name, start) = self.expect_ident("a bound name")?;
        let type_args = self.parse_generic_args_opt()?;
        Some(TypeParamBound {
            name,
            type_args,
            span: self.span_from(start),
        })
    }

    /// Whether the next token closes a generic list (possibly as the first
    /// half of `>>`, `>=` or `>>=`).
    pub(crate) fn at_generic_close(&mut self) -> bool {
        matches!(
            self.peek_kind(),
            TokenKind::Gt | TokenKind::Shr | TokenKind::GtEq | TokenKind::ShrEq
        )
    }
}
