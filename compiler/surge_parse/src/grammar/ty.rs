//! Type expressions.
//!
//! ```text
//! Type   := Prefix* Base Suffix*
//! Prefix := own | & | &mut | *
//! Base   := Path | ( TypeList ) | fn ( FnTypeParams ) (-> Type)? | nothing
//! Path   := Ident <TypeArgs>? (:: Ident <TypeArgs>?)*
//! Suffix := [] | [ Expr ] | ? | ! Type?
//! ```

use smallvec::SmallVec;
use surge_diagnostic::ErrorCode;
use surge_ir::ast::{
    ArrayKind, FnTypeParam, PathSegment, TypeId, TypeKind, TypeRange, TypeUnaryOp,
};
use surge_ir::{Span, TokenKind};

use crate::Parser;

/// Integer value of a literal such as `16`, `0x10` or `1_000`. Suffixed or
/// overflowing literals have no constant value.
fn const_int_value(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(|&c| c != '_').collect();
    let (radix, body) = match digits.get(..2) {
        Some("0x" | "0X") => (16, &digits[2..]),
        Some("0b" | "0B") => (2, &digits[2..]),
        Some("0o" | "0O") => (8, &digits[2..]),
        _ => (10, digits.as_str()),
    };
    u64::from_str_radix(body, radix).ok()
}

impl Parser<'_> {
    /// Whether the next token can begin a type.
    pub(crate) fn at_type_start(&mut self) -> bool {
        matches!(
            self.peek_kind(),
            TokenKind::Ident
                | TokenKind::Nothing
                | TokenKind::Own
                | TokenKind::Amp
                | TokenKind::Star
                | TokenKind::LParen
                | TokenKind::Fn
        )
    }

    pub(crate) fn parse_type(&mut self) -> Option<TypeId> {
        self.nested(Self::parse_type_inner)
    }

    fn parse_type_inner(&mut self) -> Option<TypeId> {
        let start = self.peek_span();
        let op = match self.peek_kind() {
            TokenKind::Own => Some(TypeUnaryOp::Own),
            TokenKind::Star => Some(TypeUnaryOp::Pointer),
            TokenKind::Amp if self.peek_nth_kind(1) == TokenKind::Mut => Some(TypeUnaryOp::RefMut),
            TokenKind::Amp => Some(TypeUnaryOp::Ref),
            _ => None,
        };
        if let Some(op) = op {
            self.bump();
            if op == TypeUnaryOp::RefMut {
                self.bump();
            }
            let inner = self.parse_type()?;
            return Some(
                self.ast
                    .new_type(TypeKind::Unary { op, inner }, self.span_from(start)),
            );
        }

        let mut ty = self.parse_type_base()?;
        loop {
            match self.peek_kind() {
                TokenKind::LBracket => ty = self.parse_array_suffix(ty, start)?,
                TokenKind::Question => {
                    self.bump();
                    ty = self.ast.new_type(TypeKind::Optional(ty), self.span_from(start));
                }
                TokenKind::Bang => {
                    self.bump();
                    let error = if self.at(TokenKind::Ident) || self.at(TokenKind::Nothing) {
                        Some(self.parse_type()?)
                    } else {
                        None
                    };
                    ty = self.ast.new_type(
                        TypeKind::Errorable { inner: ty, error },
                        self.span_from(start),
                    );
                }
                _ => return Some(ty),
            }
        }
    }

    fn parse_type_base(&mut self) -> Option<TypeId> {
        let start = self.peek_span();
        match self.peek_kind() {
            TokenKind::Ident => self.parse_path_type(),
            TokenKind::Nothing => {
                self.bump();
                Some(self.nothing_type(start))
            }
            TokenKind::LParen => {
                let open = self.bump().span;
                let elems = self.parse_type_list_until(TokenKind::RParen)?;
                self.expect_closing(TokenKind::RParen, open)?;
                Some(self.ast.new_type(TypeKind::Tuple(elems), self.span_from(start)))
            }
            TokenKind::Fn => self.parse_fn_type(),
            _ => {
                let found = self.found();
                self.report(
                    ErrorCode::SynExpectType,
                    start,
                    format!("expected a type, found {found}"),
                )
                .emit();
                None
            }
        }
    }

    fn parse_path_type(&mut self) -> Option<TypeId> {
        let start = self.peek_span();
        let mut segments: SmallVec<[PathSegment; 2]> = SmallVec::new();
        loop {
            let (name, seg_start) = self.expect_ident("a type name")?;
            let generics = self.parse_generic_args_opt()?;
            segments.push(PathSegment {
                name,
                generics,
                span: self.span_from(seg_start),
            });
            if self.at(TokenKind::ColonColon) && self.peek_nth_kind(1) == TokenKind::Ident {
                self.bump();
            } else {
                break;
            }
        }
        let segments = self.ast.alloc_path_segments(segments);
        Some(self.ast.new_type(TypeKind::Path(segments), self.span_from(start)))
    }

    /// `fn(T, ...U) -> R`. A missing return type is `nothing`.
    fn parse_fn_type(&mut self) -> Option<TypeId> {
        let start = self.bump().span;
        let open = self.expect(TokenKind::LParen, ErrorCode::SynUnexpectedToken)?;
        let mut params: SmallVec<[FnTypeParam; 4]> = SmallVec::new();
        while !self.at(TokenKind::RParen) && !self.at(TokenKind::Eof) {
            let variadic = self.eat(TokenKind::DotDotDot).is_some();
            let ty = self.parse_type()?;
            params.push(FnTypeParam { ty, variadic });
            if self.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.expect_closing(TokenKind::RParen, open)?;
        let ret = if self.eat(TokenKind::Arrow).is_some() {
            self.parse_type()?
        } else {
            self.nothing_type(self.last_span().zero_at_end())
        };
        let params = self.ast.alloc_fn_type_params(params);
        Some(self.ast.new_type(TypeKind::Fn { params, ret }, self.span_from(start)))
    }

    /// `T[]` or `T[N]`. The length is an expression; when it is a lone
    /// integer literal its value is recorded as well.
    fn parse_array_suffix(&mut self, elem: TypeId, start: Span) -> Option<TypeId> {
        let open = self.bump().span;
        if self.eat(TokenKind::RBracket).is_some() {
            return Some(self.ast.new_type(
                TypeKind::Array {
                    elem,
                    kind: ArrayKind::Slice,
                    length: None,
                    const_length: None,
                },
                self.span_from(start),
            ));
        }
        let literal = (self.at(TokenKind::IntLit) && self.peek_nth_kind(1) == TokenKind::RBracket)
            .then(|| self.peek().text);
        let length = self.in_type_operand(Self::parse_expr)?;
        self.expect_closing(TokenKind::RBracket, open)?;
        Some(self.ast.new_type(
            TypeKind::Array {
                elem,
                kind: ArrayKind::Sized,
                length: Some(length),
                const_length: literal.and_then(const_int_value),
            },
            self.span_from(start),
        ))
    }

    /// `<T, U>` after a name, if present.
    pub(crate) fn parse_generic_args_opt(&mut self) -> Option<TypeRange> {
        if !self.at(TokenKind::Lt) {
            return Some(TypeRange::EMPTY);
        }
        let open = self.bump().span;
        let mut args: SmallVec<[TypeId; 4]> = SmallVec::new();
        while !self.at_generic_close() && !self.at(TokenKind::Eof) {
            args.push(self.parse_type()?);
            if self.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.expect_closing(TokenKind::Gt, open)?;
        Some(self.ast.alloc_types(args))
    }

    /// Comma separated types up to (not including) `close`; a trailing
    /// comma is allowed.
    pub(crate) fn parse_type_list_until(&mut self, close: TokenKind) -> Option<TypeRange> {
        let mut types: SmallVec<[TypeId; 4]> = SmallVec::new();
        while !self.at(close) && !self.at(TokenKind::Eof) {
            types.push(self.parse_type()?);
            if self.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
        Some(self.ast.alloc_types(types))
    }
}

#[cfg(test)]
mod tests {
    use super::const_int_value;

    #[test]
    fn test_const_int_value_radix_and_separators() {
        assert_eq!(const_int_value("16"), Some(16));
        assert_eq!(const_int_value("1_000"), Some(1000));
        assert_eq!(const_int_value("0x10"), Some(16));
        assert_eq!(const_int_value("0b101"), Some(5));
        assert_eq!(const_int_value("0o17"), Some(15));
    }

    #[test]
    fn test_const_int_value_rejects_overflow_and_junk() {
        assert_eq!(const_int_value("99999999999999999999999"), None);
        assert_eq!(const_int_value("12abc"), None);
    }
}
