//! Token model shared by the lexer and the parser.
//!
//! A [`Token`] borrows its text from the source buffer and carries the trivia
//! (whitespace, comments, doc lines) that preceded it. The parser never
//! consumes trivia; it only inspects [`Token::leading`] when it needs to, for
//! example to collect directive blocks from doc lines.

mod kind;

pub use kind::TokenKind;

use std::fmt;

use crate::Span;

/// Kind of a piece of trivia.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TriviaKind {
    /// Horizontal whitespace.
    Whitespace,
    /// A single line break (`\n` or `\r\n`).
    Newline,
    /// `// …` up to, not including, the line break.
    LineComment,
    /// `/* … */`.
    BlockComment,
    /// `/// …` up to, not including, the line break.
    DocLine,
}

/// Trivia attached to the token that follows it.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Trivia<'src> {
    pub kind: TriviaKind,
    pub span: Span,
    pub text: &'src str,
}

impl<'src> Trivia<'src> {
    /// Text of a doc line after the `///` marker, trimmed.
    pub fn doc_text(&self) -> Option<&'src str> {
        match self.kind {
            TriviaKind::DocLine => Some(self.text.trim_start_matches("///").trim()),
            _ => None,
        }
    }
}

/// A lexed token.
#[derive(Clone, Eq, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub span: Span,
    pub text: &'src str,
    pub leading: Vec<Trivia<'src>>,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, span: Span, text: &'src str) -> Self {
        Token {
            kind,
            span,
            text,
            leading: Vec::new(),
        }
    }

    /// Whether a line break separates this token from the previous one.
    pub fn has_leading_newline(&self) -> bool {
        self.leading.iter().any(|t| t.kind == TriviaKind::Newline)
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {:?}", self.kind, self.text, self.span)
    }
}
