//! Token stream adapter between the lexer and the parser.
//!
//! The stream buffers lookahead, hides [`TokenKind::Invalid`] tokens from the
//! grammar (their scan errors are queued for the parser to report), and
//! remembers the span of the last consumed token, which is where insertion
//! fix-its are anchored.

#[cfg(test)]
mod tests;

use std::collections::VecDeque;

use surge_ir::{FileId, SourceFile, Span, Token, TokenKind, Trivia};
use surge_lexer::{LexError, Lexer};
use tracing::trace;

pub struct TokenStream<'src> {
    lexer: Lexer<'src>,
    buffer: VecDeque<Token<'src>>,
    file: FileId,
    last_span: Span,
    consumed: u32,
    lex_errors: Vec<LexError>,
}

impl<'src> TokenStream<'src> {
    pub fn new(source: &'src SourceFile) -> Self {
        let file = source.id();
        TokenStream {
            lexer: Lexer::new(source),
            buffer: VecDeque::new(),
            file,
            last_span: Span::new(file, 0, 0),
            consumed: 0,
            lex_errors: Vec::new(),
        }
    }

    /// Restrict the stream to `[start, end)` of the file, dropping any
    /// buffered lookahead. Used to lex f-string interpolations.
    pub fn set_range(&mut self, start: u32, end: u32) {
        self.buffer.clear();
        self.lexer.set_range(start, end);
        self.last_span = Span::new(self.file, start, start);
    }

    /// Empty span at offset 0 of the file.
    pub fn empty_span(&self) -> Span {
        Span::new(self.file, 0, 0)
    }

    /// Span of the last consumed token.
    pub fn last_span(&self) -> Span {
        self.last_span
    }

    /// Number of tokens consumed so far. Recovery loops compare positions to
    /// guarantee progress.
    pub fn position(&self) -> u32 {
        self.consumed
    }

    pub fn peek(&mut self) -> &Token<'src> {
        self.peek_nth(0)
    }

    /// The `n`-th token ahead (0 = next).
    pub fn peek_nth(&mut self, n: usize) -> &Token<'src> {
        while self.buffer.len() <= n {
            let token = self.lex_valid();
            self.buffer.push_back(token);
        }
        &self.buffer[n]
    }

    pub fn peek_kind(&mut self) -> TokenKind {
        self.peek().kind
    }

    /// Consume and return the next token. At the end of input this keeps
    /// returning `Eof` without advancing.
    pub fn next(&mut self) -> Token<'src> {
        self.peek();
        let token = match self.buffer.pop_front() {
            Some(token) => token,
            None => return self.lex_valid(),
        };
        if token.kind == TokenKind::Eof {
            // Keep Eof observable for the next peek.
            self.buffer.push_front(token.clone());
            return token;
        }
        trace!(kind = ?token.kind, span = ?token.span, "next");
        self.consumed += 1;
        self.last_span = token.span;
        token
    }

    /// Consume the first character of a `>`-prefixed token (`>`, `>>`, `>=`,
    /// `>>=`) and leave the rest as the next token. Closes generic lists
    /// such as `Vec<Vec<int>>`.
    pub fn eat_gt(&mut self) -> Option<Span> {
        let rest = match self.peek_kind() {
            TokenKind::Gt => return Some(self.next().span),
            TokenKind::Shr => TokenKind::Gt,
            TokenKind::GtEq => TokenKind::Eq,
            TokenKind::ShrEq => TokenKind::GtEq,
            _ => return None,
        };
        let front = self.buffer.front_mut()?;
        let gt = Span::new(front.span.file, front.span.start, front.span.start + 1);
        front.kind = rest;
        front.span = Span::new(front.span.file, gt.end, front.span.end);
        front.text = front.text.get(1..).unwrap_or("");
        front.leading = Vec::new();
        trace!(span = ?gt, "split `>`");
        self.consumed += 1;
        self.last_span = gt;
        Some(gt)
    }

    /// Scan errors found so far, in discovery order.
    pub fn take_lex_errors(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.lex_errors)
    }

    /// Carry over the scan errors of a sub-stream.
    pub fn absorb_errors(&mut self, other: &mut TokenStream<'src>) {
        self.lex_errors.append(&mut other.lex_errors);
    }

    /// Lex the next token that is not `Invalid`. Trivia in front of skipped
    /// tokens is kept on the token that is returned.
    fn lex_valid(&mut self) -> Token<'src> {
        let mut carried: Vec<Trivia<'src>> = Vec::new();
        loop {
            let mut token = self.lexer.next_token();
            self.lex_errors.extend(self.lexer.take_errors());
            if token.kind != TokenKind::Invalid {
                if !carried.is_empty() {
                    carried.append(&mut token.leading);
                    token.leading = carried;
                }
                return token;
            }
            carried.append(&mut token.leading);
        }
    }
}
