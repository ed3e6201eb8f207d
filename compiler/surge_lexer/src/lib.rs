//! Hand-written lexer for Surge source.
//!
//! The lexer turns a window of a [`SourceFile`] into [`Token`]s. Whitespace,
//! line breaks, comments and `///` doc lines are not tokens: they are
//! collected as [`Trivia`] and attached to the token that follows them.
//!
//! Lexing never fails. Bytes that start no token, unterminated strings and
//! unterminated block comments produce a [`LexError`] (drained with
//! [`Lexer::take_errors`]); the offending bytes come out as a
//! [`TokenKind::Invalid`] token, or as block-comment trivia for an
//! unterminated comment.
//!
//! Punctuation is longest-match. In particular `>>`, `>=` and `>>=` are
//! single tokens; the parser splits them when it closes a generic argument
//! list.

mod cursor;
mod keywords;

use cursor::Cursor;
use surge_ir::{FileId, SourceFile, Span, Token, TokenKind, Trivia, TriviaKind};
use tracing::trace;

/// What went wrong while scanning.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LexErrorKind {
    /// A byte (or character) that starts no token.
    InvalidCharacter,
    /// A string or f-string literal that reaches the end of input.
    UnterminatedString,
    /// A `/*` comment without `*/`.
    UnterminatedComment,
}

/// A scanning problem, reported in the order it was found.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// Lexer over a byte window of one source file.
pub struct Lexer<'src> {
    file: FileId,
    src: &'src str,
    cursor: Cursor<'src>,
    errors: Vec<LexError>,
}

impl<'src> Lexer<'src> {
    /// Lexer over the whole file.
    pub fn new(file: &'src SourceFile) -> Self {
        Self::with_range(file, 0, file.len())
    }

    /// Lexer restricted to `[start, end)` of the file. Spans stay
    /// file-absolute.
    pub fn with_range(file: &'src SourceFile, start: u32, end: u32) -> Self {
        let src = file.content();
        Lexer {
            file: file.id(),
            src,
            cursor: Cursor::new(src.as_bytes(), start, end),
            errors: Vec::new(),
        }
    }

    /// Restart scanning in `[start, end)` of the same file.
    pub fn set_range(&mut self, start: u32, end: u32) {
        self.cursor = Cursor::new(self.src.as_bytes(), start, end);
    }

    /// Current byte position.
    pub fn position(&self) -> u32 {
        self.cursor.pos()
    }

    pub fn file(&self) -> FileId {
        self.file
    }

    /// Errors found since the last call, in discovery order.
    pub fn take_errors(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.errors)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Scan the next token with its leading trivia. At the end of the window
    /// this keeps returning a zero-width [`TokenKind::Eof`].
    pub fn next_token(&mut self) -> Token<'src> {
        let leading = self.scan_trivia();
        let start = self.cursor.pos();
        let kind = if self.cursor.is_eof() {
            TokenKind::Eof
        } else {
            self.scan_token()
        };
        let end = self.cursor.pos();
        let mut token = Token::new(kind, self.span(start, end), self.text(start, end));
        token.leading = leading;
        token
    }

    fn span(&self, start: u32, end: u32) -> Span {
        Span::new(self.file, start, end)
    }

    /// Window text; empty if the bounds split a character.
    fn text(&self, start: u32, end: u32) -> &'src str {
        self.src.get(start as usize..end as usize).unwrap_or("")
    }

    fn error(&mut self, kind: LexErrorKind, start: u32, end: u32) {
        let span = self.span(start, end);
        trace!(?kind, ?span, "lex error");
        self.errors.push(LexError { kind, span });
    }

    fn scan_trivia(&mut self) -> Vec<Trivia<'src>> {
        let mut trivia = Vec::new();
        loop {
            let start = self.cursor.pos();
            let kind = match (self.cursor.current(), self.cursor.peek(1)) {
                _ if self.cursor.is_eof() => break,
                (b' ' | b'\t', _) => {
                    self.cursor.eat_while(|b| b == b' ' || b == b'\t');
                    TriviaKind::Whitespace
                }
                (b'\n', _) => {
                    self.cursor.advance();
                    TriviaKind::Newline
                }
                (b'\r', b'\n') => {
                    self.cursor.advance_n(2);
                    TriviaKind::Newline
                }
                (b'\r', _) => {
                    self.cursor.advance();
                    TriviaKind::Whitespace
                }
                (b'/', b'/') => {
                    let doc = self.cursor.peek(2) == b'/' && self.cursor.peek(3) != b'/';
                    self.cursor.eat_until_newline();
                    if doc {
                        TriviaKind::DocLine
                    } else {
                        TriviaKind::LineComment
                    }
                }
                (b'/', b'*') => {
                    self.cursor.advance_n(2);
                    if !self.cursor.eat_block_comment_body() {
                        self.error(LexErrorKind::UnterminatedComment, start, self.cursor.pos());
                    }
                    TriviaKind::BlockComment
                }
                _ => break,
            };
            let end = self.cursor.pos();
            trivia.push(Trivia {
                kind,
                span: self.span(start, end),
                text: self.text(start, end),
            });
        }
        trivia
    }

    fn scan_token(&mut self) -> TokenKind {
        let start = self.cursor.pos();
        let c = self.cursor.current();
        match c {
            b'f' if self.cursor.peek(1) == b'"' => self.scan_fstring(start),
            b'"' => self.scan_string(start),
            b'0'..=b'9' => self.scan_number(),
            b'_' if !is_ident_continue(self.cursor.peek(1)) => {
                self.cursor.advance();
                TokenKind::Underscore
            }
            c if is_ident_start(c) => {
                self.cursor.eat_while(is_ident_continue);
                let text = self.text(start, self.cursor.pos());
                keywords::lookup(text).unwrap_or(TokenKind::Ident)
            }
            _ => match self.scan_punct() {
                Some(kind) => kind,
                None => {
                    self.cursor.advance_char();
                    self.error(LexErrorKind::InvalidCharacter, start, self.cursor.pos());
                    TokenKind::Invalid
                }
            },
        }
    }

    fn scan_punct(&mut self) -> Option<TokenKind> {
        let c0 = self.cursor.current();
        let c1 = self.cursor.peek(1);
        let c2 = self.cursor.peek(2);
        let (kind, len) = match (c0, c1, c2) {
            (b'.', b'.', b'.') => (TokenKind::DotDotDot, 3),
            (b'.', b'.', b'=') => (TokenKind::DotDotEq, 3),
            (b'<', b'<', b'=') => (TokenKind::ShlEq, 3),
            (b'>', b'>', b'=') => (TokenKind::ShrEq, 3),
            (b'.', b'.', _) => (TokenKind::DotDot, 2),
            (b':', b':', _) => (TokenKind::ColonColon, 2),
            (b'?', b'?', _) => (TokenKind::QuestionQuestion, 2),
            (b'-', b'>', _) => (TokenKind::Arrow, 2),
            (b'=', b'>', _) => (TokenKind::FatArrow, 2),
            (b'=', b'=', _) => (TokenKind::EqEq, 2),
            (b'!', b'=', _) => (TokenKind::BangEq, 2),
            (b'<', b'=', _) => (TokenKind::LtEq, 2),
            (b'>', b'=', _) => (TokenKind::GtEq, 2),
            (b'<', b'<', _) => (TokenKind::Shl, 2),
            (b'>', b'>', _) => (TokenKind::Shr, 2),
            (b'&', b'&', _) => (TokenKind::AndAnd, 2),
            (b'|', b'|', _) => (TokenKind::OrOr, 2),
            (b'+', b'=', _) => (TokenKind::PlusEq, 2),
            (b'-', b'=', _) => (TokenKind::MinusEq, 2),
            (b'*', b'=', _) => (TokenKind::StarEq, 2),
            (b'/', b'=', _) => (TokenKind::SlashEq, 2),
            (b'%', b'=', _) => (TokenKind::PercentEq, 2),
            (b'&', b'=', _) => (TokenKind::AmpEq, 2),
            (b'|', b'=', _) => (TokenKind::PipeEq, 2),
            (b'^', b'=', _) => (TokenKind::CaretEq, 2),
            (b'(', _, _) => (TokenKind::LParen, 1),
            (b')', _, _) => (TokenKind::RParen, 1),
            (b'{', _, _) => (TokenKind::LBrace, 1),
            (b'}', _, _) => (TokenKind::RBrace, 1),
            (b'[', _, _) => (TokenKind::LBracket, 1),
            (b']', _, _) => (TokenKind::RBracket, 1),
            (b',', _, _) => (TokenKind::Comma, 1),
            (b';', _, _) => (TokenKind::Semicolon, 1),
            (b':', _, _) => (TokenKind::Colon, 1),
            (b'.', _, _) => (TokenKind::Dot, 1),
            (b'@', _, _) => (TokenKind::At, 1),
            (b'?', _, _) => (TokenKind::Question, 1),
            (b'!', _, _) => (TokenKind::Bang, 1),
            (b'=', _, _) => (TokenKind::Eq, 1),
            (b'+', _, _) => (TokenKind::Plus, 1),
            (b'-', _, _) => (TokenKind::Minus, 1),
            (b'*', _, _) => (TokenKind::Star, 1),
            (b'/', _, _) => (TokenKind::Slash, 1),
            (b'%', _, _) => (TokenKind::Percent, 1),
            (b'&', _, _) => (TokenKind::Amp, 1),
            (b'|', _, _) => (TokenKind::Pipe, 1),
            (b'^', _, _) => (TokenKind::Caret, 1),
            (b'<', _, _) => (TokenKind::Lt, 1),
            (b'>', _, _) => (TokenKind::Gt, 1),
            _ => return None,
        };
        self.cursor.advance_n(len);
        Some(kind)
    }

    /// Numbers: decimal with optional fraction and exponent, or `0x`/`0b`/`0o`
    /// radix integers. `_` separates digits. An alphabetic suffix is part of
    /// the literal: `u…` makes it unsigned, `f…` makes it a float.
    fn scan_number(&mut self) -> TokenKind {
        let mut kind = TokenKind::IntLit;
        let radix = self.cursor.current() == b'0'
            && matches!(self.cursor.peek(1), b'x' | b'X' | b'b' | b'B' | b'o' | b'O');
        if radix {
            self.cursor.advance_n(2);
            self.cursor.eat_while(|b| b.is_ascii_hexdigit() || b == b'_');
        } else {
            self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
            if self.cursor.current() == b'.' && self.cursor.peek(1).is_ascii_digit() {
                kind = TokenKind::FloatLit;
                self.cursor.advance();
                self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
            }
            if matches!(self.cursor.current(), b'e' | b'E') {
                let digits_at = if matches!(self.cursor.peek(1), b'+' | b'-') { 2 } else { 1 };
                if self.cursor.peek(digits_at).is_ascii_digit() {
                    kind = TokenKind::FloatLit;
                    self.cursor.advance_n(digits_at);
                    self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
                }
            }
        }
        match self.cursor.current() {
            b'u' => kind = TokenKind::UintLit,
            b'f' if !radix => kind = TokenKind::FloatLit,
            _ => {}
        }
        self.cursor.eat_while(is_ident_continue);
        kind
    }

    fn scan_string(&mut self, start: u32) -> TokenKind {
        self.cursor.advance();
        loop {
            match self.cursor.skip_to_string_delim() {
                Some(b'"') => {
                    self.cursor.advance();
                    return TokenKind::StringLit;
                }
                Some(_) => self.cursor.advance_n(2),
                None => {
                    self.error(LexErrorKind::UnterminatedString, start, self.cursor.pos());
                    return TokenKind::Invalid;
                }
            }
        }
    }

    /// `f"…{expr}…"`. Braces nest inside interpolations, and string literals
    /// inside an interpolation are skipped whole. `{{` is a literal brace in
    /// the text part.
    fn scan_fstring(&mut self, start: u32) -> TokenKind {
        self.cursor.advance_n(2);
        let mut depth = 0u32;
        loop {
            let found = if depth == 0 {
                self.cursor.skip_to_fstring_delim()
            } else {
                self.skip_in_interpolation()
            };
            match found {
                Some(b'"') if depth == 0 => {
                    self.cursor.advance();
                    return TokenKind::FStringLit;
                }
                Some(b'"') => {
                    let inner = self.cursor.pos();
                    if self.scan_string(inner) == TokenKind::Invalid {
                        // the inner error already covers the tail
                        self.errors.pop();
                        self.error(LexErrorKind::UnterminatedString, start, self.cursor.pos());
                        return TokenKind::Invalid;
                    }
                }
                Some(b'\\') => self.cursor.advance_n(2),
                Some(b'{') if depth == 0 && self.cursor.peek(1) == b'{' => self.cursor.advance_n(2),
                Some(b'}') if depth == 0 => {
                    let width = if self.cursor.peek(1) == b'}' { 2 } else { 1 };
                    self.cursor.advance_n(width);
                }
                Some(b'{') => {
                    depth += 1;
                    self.cursor.advance();
                }
                Some(b'}') => {
                    depth -= 1;
                    self.cursor.advance();
                }
                Some(_) => self.cursor.advance(),
                None => {
                    self.error(LexErrorKind::UnterminatedString, start, self.cursor.pos());
                    return TokenKind::Invalid;
                }
            }
        }
    }

    fn skip_in_interpolation(&mut self) -> Option<u8> {
        self.cursor
            .eat_while(|b| !matches!(b, b'"' | b'\\' | b'{' | b'}'));
        if self.cursor.is_eof() {
            None
        } else {
            Some(self.cursor.current())
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    /// Tokens up to, not including, [`TokenKind::Eof`].
    fn next(&mut self) -> Option<Token<'src>> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Lex a whole file, returning tokens (without `Eof`) and scan errors.
pub fn lex_all(file: &SourceFile) -> (Vec<Token<'_>>, Vec<LexError>) {
    let mut lexer = Lexer::new(file);
    let tokens: Vec<_> = lexer.by_ref().collect();
    (tokens, lexer.take_errors())
}

#[cfg(test)]
mod tests;
