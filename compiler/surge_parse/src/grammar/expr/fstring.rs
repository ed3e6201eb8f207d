//! Interpolated strings.
//!
//! `f"a {x} b {y + 1}"` lowers to
//! `format("a {} b {}", fmt_arg(x), fmt_arg(y + 1))`. Each `{…}` segment is
//! lexed by a token stream restricted to that byte range of the file and
//! parsed by this parser. `{{` and `}}` stay in the format string as escaped
//! braces.

use surge_ir::ast::{ExprId, ExprKind, LiteralKind, TypeRange};
use surge_ir::{Span, TokenKind};

use crate::stream::TokenStream;
use crate::Parser;

/// Index of the `}` closing the interpolation that starts at `from`, or
/// `None` if it runs to `end`. Nested braces and string literals are
/// skipped.
fn interpolation_end(bytes: &[u8], from: usize, end: usize) -> Option<usize> {
    let mut depth = 0u32;
    let mut i = from;
    while i < end {
        match bytes.get(i)? {
            b'{' => depth += 1,
            b'}' if depth == 0 => return Some(i),
            b'}' => depth -= 1,
            b'"' => {
                i += 1;
                while i < end {
                    match bytes.get(i)? {
                        b'\\' => i += 1,
                        b'"' => break,
                        _ => {}
                    }
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

impl Parser<'_> {
    pub(super) fn parse_fstring(&mut self) -> Option<ExprId> {
        let token = self.bump();
        let (text, span) = (token.text, token.span);
        let bytes = text.as_bytes();
        let body_end = if text.len() >= 3 && text.ends_with('"') {
            text.len() - 1
        } else {
            text.len()
        };

        let mut format = String::new();
        let mut args = Vec::new();
        let mut literal_start = 2;
        let mut i = 2;
        while i < body_end {
            match bytes.get(i) {
                Some(b'{' | b'}') if bytes.get(i + 1) == bytes.get(i) => i += 2,
                Some(b'{') => {
                    format.push_str(text.get(literal_start..i).unwrap_or(""));
                    format.push_str("{}");
                    let close = interpolation_end(bytes, i + 1, body_end);
                    let open = Self::sub_span(span, i, i + 1);
                    let stop = close.map_or(body_end, |c| c + 1);
                    if let Some(arg) = self.parse_interpolation(open, span.start + offset(stop)) {
                        args.push(self.fmt_arg(arg));
                    }
                    i = stop;
                    literal_start = i;
                }
                Some(b'\\') => i += 2,
                _ => i += 1,
            }
        }
        format.push_str(text.get(literal_start..body_end).unwrap_or(""));

        let callee_name = self.intern("format");
        let callee = self.ast.new_expr(ExprKind::Ident(callee_name), span);
        let value = self.intern(&format);
        let format = self.ast.new_expr(
            ExprKind::Literal {
                kind: LiteralKind::String,
                value,
            },
            span,
        );
        let mut call_args = Vec::with_capacity(args.len() + 1);
        call_args.push(format);
        call_args.extend(args);
        let args = self.ast.alloc_exprs(call_args);
        Some(self.ast.new_expr(
            ExprKind::Call {
                callee,
                args,
                type_args: TypeRange::EMPTY,
            },
            span,
        ))
    }

    /// Parse one `{expr}` from its own token stream. `open` is the span of
    /// the `{`; the stream covers everything up to `end`, closing brace
    /// included.
    fn parse_interpolation(&mut self, open: Span, end: u32) -> Option<ExprId> {
        self.flush_lex_errors();
        let mut sub = TokenStream::new(self.source);
        sub.set_range(open.end, end);
        let outer = std::mem::replace(&mut self.stream, sub);

        let result = self.in_delimiters(|p| {
            let expr = p.parse_expr()?;
            p.expect_closing(TokenKind::RBrace, open)?;
            if !p.at(TokenKind::Eof) {
                p.unexpected("`}` to end the interpolation");
                return None;
            }
            Some(expr)
        });

        let mut sub = std::mem::replace(&mut self.stream, outer);
        self.stream.absorb_errors(&mut sub);
        result
    }

    /// `fmt_arg(arg)`, spanning the argument.
    fn fmt_arg(&mut self, arg: ExprId) -> ExprId {
        let span = self.ast.expr(arg).span;
        let name = self.intern("fmt_arg");
        let callee = self.ast.new_expr(ExprKind::Ident(name), span);
        let args = self.ast.alloc_exprs([arg]);
        self.ast.new_expr(
            ExprKind::Call {
                callee,
                args,
                type_args: TypeRange::EMPTY,
            },
            span,
        )
    }

    fn sub_span(token: Span, from: usize, to: usize) -> Span {
        Span::new(token.file, token.start + offset(from), token.start + offset(to))
    }
}

/// Byte offset within a token. Tokens are shorter than the file, whose
/// length fits in `u32`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "offsets inside a token are bounded by the u32 file length"
)]
fn offset(index: usize) -> u32 {
    index as u32
}
