//! Primary expressions: names, literals, groups, collection literals.

use surge_diagnostic::{Applicability, ErrorCode, FixSuggestion};
use surge_ir::ast::{
    AttrRange, BinaryOp, ExprId, ExprKind, ExprRange, FieldInit, LiteralKind, MapEntry, StmtKind, TypeId,
};
use surge_ir::{Span, TokenKind};

use super::ends_operand;
use crate::recovery::{BLOCK_START, LIST_SYNC};
use crate::Parser;

/// Precedence ceiling for the end of a prefix range (`..end`): everything
/// tighter than the range operator itself.
const RANGE_OPERAND_PRECEDENCE: u8 = 13;

/// Whether the bytes starting at a `<` look like `<Type, …>(`: an explicit
/// generic call written without `::`.
///
/// The scan stays on one line and only crosses characters that can occur in
/// a type argument list, so `a < b && c > (d)` and `x < y;` are rejected.
/// It may still accept a chained comparison such as `a < b > (c)`; that input
/// gets a diagnostic suggesting `::<`, which the user can act on.
pub(crate) fn bare_generic_call(bytes: &[u8]) -> bool {
    if bytes.first() != Some(&b'<') {
        return false;
    }
    let mut depth = 0u32;
    let mut i = 0;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'<' => depth += 1,
            b'>' => {
                depth -= 1;
                if depth == 0 {
                    let rest = bytes.get(i + 1..).unwrap_or_default();
                    let next = rest.iter().find(|&&c| c != b' ' && c != b'\t');
                    return next == Some(&b'(');
                }
            }
            b'&' | b'|' if bytes.get(i + 1) == Some(&b) => return false,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' => {}
            b' ' | b'\t' | b',' | b':' | b'[' | b']' | b'?' | b'!' | b'&' | b'*' => {}
            _ => return false,
        }
        i += 1;
    }
    false
}

/// Contents of a string literal without its quotes. Escapes are kept as
/// written.
fn unquote(text: &str) -> &str {
    let inner = text.strip_prefix('"').unwrap_or(text);
    match inner.strip_suffix('"') {
        // A quote preceded by an odd run of backslashes is escaped, so the
        // literal is unterminated.
        Some(body) if body.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 0 => body,
        _ => inner,
    }
}

fn starts_upper(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

impl Parser<'_> {
    pub(super) fn parse_primary(&mut self) -> Option<ExprId> {
        let start = self.peek_span();
        match self.peek_kind() {
            TokenKind::Ident => self.parse_ident_primary(),
            TokenKind::IntLit => Some(self.parse_literal(LiteralKind::Int)),
            TokenKind::UintLit => Some(self.parse_literal(LiteralKind::Uint)),
            TokenKind::FloatLit => Some(self.parse_literal(LiteralKind::Float)),
            TokenKind::StringLit => Some(self.parse_literal(LiteralKind::String)),
            TokenKind::True => Some(self.parse_literal(LiteralKind::True)),
            TokenKind::False => Some(self.parse_literal(LiteralKind::False)),
            TokenKind::Nothing => Some(self.parse_literal(LiteralKind::Nothing)),
            TokenKind::FStringLit => self.parse_fstring(),
            TokenKind::Underscore => {
                let token = self.bump();
                let name = self.intern(token.text);
                Some(self.ast.new_expr(ExprKind::Ident(name), token.span))
            }
            TokenKind::LParen => self.parse_paren(),
            TokenKind::LBracket => self.parse_array(),
            TokenKind::LBrace => self.parse_brace(),
            TokenKind::DotDot | TokenKind::DotDotEq => {
                let inclusive = self.bump().kind == TokenKind::DotDotEq;
                let end = if ends_operand(self.peek_kind()) {
                    None
                } else {
                    Some(self.parse_binary(RANGE_OPERAND_PRECEDENCE)?)
                };
                Some(self.ast.new_expr(
                    ExprKind::RangeLit {
                        start: None,
                        end,
                        inclusive,
                    },
                    self.span_from(start),
                ))
            }
            TokenKind::DotDotDot => {
                self.bump();
                let inner = self.nested(Self::parse_unary)?;
                Some(
                    self.ast
                        .new_expr(ExprKind::Spread(inner), self.span_from(start)),
                )
            }
            TokenKind::Compare => self.parse_compare(),
            TokenKind::Select | TokenKind::Race => self.parse_select(),
            TokenKind::Parallel => self.parse_parallel(),
            TokenKind::Async => self.parse_async_block(start, AttrRange::EMPTY),
            _ => {
                let found = self.found();
                self.report(
                    ErrorCode::SynExpectExpression,
                    start,
                    format!("expected an expression, found {found}"),
                )
                .emit();
                None
            }
        }
    }

    fn parse_literal(&mut self, kind: LiteralKind) -> ExprId {
        let token = self.bump();
        let text = if kind == LiteralKind::String {
            unquote(token.text)
        } else {
            token.text
        };
        let value = self.intern(text);
        self.ast
            .new_expr(ExprKind::Literal { kind, value }, token.span)
    }

    /// A name, plus the forms that start with one: `blocking { … }`,
    /// `Type { … }` struct literals and the rejected `f<T>(…)`.
    fn parse_ident_primary(&mut self) -> Option<ExprId> {
        let token = self.bump();
        let (text, span) = (token.text, token.span);
        let next = self.peek_kind();

        if next == TokenKind::LBrace && text == "blocking" {
            let body = self.parse_block_expr()?;
            return Some(
                self.ast
                    .new_expr(ExprKind::Blocking { body }, self.span_from(span)),
            );
        }

        let name = self.intern(text);
        if next == TokenKind::LBrace && starts_upper(text) && self.ctx.allows_struct_literal() {
            let ty = self.ast.new_simple_path_type(name, span);
            return self.parse_struct_literal(Some(ty), span);
        }

        if next == TokenKind::Lt {
            let lt = self.peek_span();
            if bare_generic_call(self.source.bytes_from(lt.start)) {
                self.report(
                    ErrorCode::SynUnexpectedToken,
                    lt,
                    "generic arguments in an expression must be written with `::<`",
                )
                .fix(
                    FixSuggestion::replace("use `::<`", lt, "::<")
                        .with_applicability(Applicability::SafeWithHeuristics)
                        .preferred(),
                )
                .emit();
                return None;
            }
        }

        Some(self.ast.new_expr(ExprKind::Ident(name), span))
    }

    /// `()`, `(e)` or `(a, b, …)`.
    fn parse_paren(&mut self) -> Option<ExprId> {
        let open = self.bump().span;
        if let Some(close) = self.eat(TokenKind::RParen) {
            let kind = ExprKind::Tuple(ExprRange::EMPTY);
            return Some(self.ast.new_expr(kind, open.cover(close)));
        }
        let first = self.in_delimiters(Self::parse_expr)?;
        let kind = if self.eat(TokenKind::Comma).is_some() {
            let mut elems = vec![first];
            elems.extend(self.parse_expr_list(TokenKind::RParen, "tuple elements"));
            ExprKind::Tuple(self.ast.alloc_exprs(elems))
        } else {
            ExprKind::Group(first)
        };
        self.expect_closing(TokenKind::RParen, open)?;
        Some(self.ast.new_expr(kind, self.span_from(open)))
    }

    /// `[a, b]`, or `[start..end]`, which is a range rather than an array
    /// holding one.
    fn parse_array(&mut self) -> Option<ExprId> {
        let open = self.bump().span;
        let elems = self.parse_expr_list(TokenKind::RBracket, "array elements");
        let trailing_comma = self.last_span() != open && self.slice(self.last_span()) == ",";
        self.expect_closing(TokenKind::RBracket, open)?;
        let span = self.span_from(open);

        if let &[only] = elems.as_slice() {
            if !trailing_comma {
                let range = match self.ast.expr(only).kind {
                    ExprKind::Binary { op, left, right }
                        if matches!(op, BinaryOp::Range | BinaryOp::RangeInclusive) =>
                    {
                        Some((Some(left), Some(right), op == BinaryOp::RangeInclusive))
                    }
                    ExprKind::RangeLit {
                        start,
                        end,
                        inclusive,
                    } => Some((start, end, inclusive)),
                    _ => None,
                };
                if let Some((start, end, inclusive)) = range {
                    return Some(self.ast.new_expr(
                        ExprKind::RangeLit {
                            start,
                            end,
                            inclusive,
                        },
                        span,
                    ));
                }
            }
        }
        let elems = self.ast.alloc_exprs(elems);
        Some(self.ast.new_expr(ExprKind::Array(elems), span))
    }

    /// `{` starts a block, a struct literal or a map literal. Statement
    /// keywords mean a block, `name:` a struct literal, and otherwise the
    /// first expression decides: `=>` makes a map, `;` a block.
    fn parse_brace(&mut self) -> Option<ExprId> {
        let next = self.peek_nth_kind(1);
        if BLOCK_START.contains(next) {
            return self.parse_block_expr();
        }
        let start = self.peek_span();
        if next == TokenKind::RBrace
            || (next == TokenKind::Ident && self.peek_nth_kind(2) == TokenKind::Colon)
        {
            return self.parse_struct_literal(None, start);
        }

        let open = self.bump().span;
        self.in_delimiters(|p| {
            let first_start = p.peek_span();
            let first = p.allowing_fat_arrow(Self::parse_expr)?;
            match p.peek_kind() {
                TokenKind::FatArrow => p.parse_map_rest(open, first),
                TokenKind::Semicolon => {
                    p.bump();
                    let kind = StmtKind::Expr {
                        expr: first,
                        missing_semicolon: false,
                    };
                    let stmt = p.ast.new_stmt(kind, p.span_from(first_start));
                    let stmts = p.parse_stmts_until_brace(vec![stmt]);
                    p.expect_closing(TokenKind::RBrace, open);
                    let stmts = p.ast.alloc_stmts(stmts);
                    Some(p.ast.new_expr(ExprKind::Block(stmts), p.span_from(open)))
                }
                _ => {
                    let mut fields = vec![FieldInit {
                        name: None,
                        value: first,
                        span: p.ast.expr(first).span,
                    }];
                    if p.eat(TokenKind::Comma).is_some() {
                        p.parse_field_inits(&mut fields);
                    }
                    p.finish_struct_literal(None, open, open, fields)
                }
            }
        })
    }

    /// Entries of a map literal after the first key.
    fn parse_map_rest(&mut self, open: Span, first_key: ExprId) -> Option<ExprId> {
        let mut entries = Vec::new();
        let mut key = first_key;
        loop {
            self.bump();
            let value = self.parse_expr()?;
            let span = self.ast.expr(key).span.cover(self.last_span());
            entries.push(MapEntry { key, value, span });
            if self.eat(TokenKind::Comma).is_none() || self.at(TokenKind::RBrace) {
                break;
            }
            key = self.allowing_fat_arrow(Self::parse_expr)?;
            if !self.at(TokenKind::FatArrow) {
                self.expect(TokenKind::FatArrow, ErrorCode::SynExpectFatArrow);
                return None;
            }
        }
        self.expect_closing(TokenKind::RBrace, open)?;
        let entries = self.ast.alloc_map_entries(entries);
        Some(self.ast.new_expr(ExprKind::Map(entries), self.span_from(open)))
    }

    /// `{ name: value, … }` or `{ value, … }` after an optional type name.
    fn parse_struct_literal(&mut self, ty: Option<TypeId>, start: Span) -> Option<ExprId> {
        let open = self.bump().span;
        let mut fields = Vec::new();
        self.in_delimiters(|p| p.parse_field_inits(&mut fields));
        let start = if ty.is_some() { start } else { open };
        self.finish_struct_literal(ty, start, open, fields)
    }

    fn parse_field_inits(&mut self, fields: &mut Vec<FieldInit>) {
        while !self.at(TokenKind::RBrace) && !self.at(TokenKind::Eof) {
            let start = self.peek_span();
            let name = if self.at(TokenKind::Ident) && self.peek_nth_kind(1) == TokenKind::Colon {
                let token = self.bump();
                self.bump();
                Some(self.intern(token.text))
            } else {
                None
            };
            match self.parse_expr() {
                Some(value) => fields.push(FieldInit {
                    name,
                    value,
                    span: self.span_from(start),
                }),
                None => self.resync_until(LIST_SYNC),
            }
            if self.eat(TokenKind::Comma).is_none() {
                if self.at(TokenKind::Ident) {
                    self.missing_comma("fields");
                    continue;
                }
                break;
            }
        }
    }

    fn finish_struct_literal(
        &mut self,
        ty: Option<TypeId>,
        start: Span,
        open: Span,
        fields: Vec<FieldInit>,
    ) -> Option<ExprId> {
        let positional = !fields.is_empty() && fields.iter().all(|f| f.name.is_none());
        self.expect_closing(TokenKind::RBrace, open)?;
        let fields = self.ast.alloc_field_inits(fields);
        Some(self.ast.new_expr(
            ExprKind::Struct {
                ty,
                fields,
                positional,
            },
            self.span_from(start),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{bare_generic_call, unquote};

    #[test]
    fn test_bare_generic_call_accepts_type_lists() {
        assert!(bare_generic_call(b"<int>(1)"));
        assert!(bare_generic_call(b"<Map<string, int[]>> ()"));
        assert!(bare_generic_call(b"<T?, &U>(x)"));
    }

    #[test]
    fn test_bare_generic_call_rejects_comparisons() {
        assert!(!bare_generic_call(b"< b && c > (d)"));
        assert!(!bare_generic_call(b"< y;"));
        assert!(!bare_generic_call(b"< y\n> (z)"));
        assert!(!bare_generic_call(b"<int> + 1"));
        assert!(!bare_generic_call(b"< 3"));
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"abc\""), "abc");
        assert_eq!(unquote("\"\""), "");
        assert_eq!(unquote("\"open"), "open");
        assert_eq!(unquote("\"a\\n\""), "a\\n");
        assert_eq!(unquote("\"\\\\\""), "\\\\");
        assert_eq!(unquote("\"\\\""), "\\\"");
    }
}
