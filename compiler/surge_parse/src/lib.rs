//! Recursive descent parser for Surge.
//!
//! [`parse_file`] drives a [`stream::TokenStream`] over one source file and
//! appends the resulting nodes to a caller-owned [`AstArena`]. Problems are
//! reported into a [`DiagnosticBag`]; the parser recovers and keeps going,
//! so a file always yields an [`AstFile`](surge_ir::ast::AstFile) plus
//! diagnostics.
//!
//! # Module Structure
//!
//! - `stream`: lookahead buffer over the lexer
//! - `recovery`: token sets and resynchronisation
//! - `context`: context counters (`:` casts, `=>`, struct literals)
//! - `report`: diagnostic helpers shared by the grammar
//! - `grammar`: items, statements, expressions, types, attributes, pragma

mod context;
mod grammar;
mod options;
mod recovery;
mod report;
pub mod stream;
pub mod tracing_setup;

#[cfg(test)]
mod tests;

use std::fmt;

use surge_diagnostic::DiagnosticBag;
use surge_ir::ast::{AstArena, AstFile, DirectiveBlock, FileNodeId, ItemId, Pragma};
use surge_ir::{FileId, FileSet, SourceFile, Span, StringId, StringInterner, Token, TokenKind};
use surge_stack::DepthBudget;
use tracing::debug_span;

use context::ParseContext;
use stream::TokenStream;

pub use options::{Cancellation, ParseOptions, ProgressTracer};
pub use recovery::TokenSet;

/// Result of parsing one file.
#[derive(Debug)]
pub struct ParseOutput {
    pub file: FileNodeId,
    pub diagnostics: DiagnosticBag,
    /// The tracer asked to stop; `file` holds the items parsed until then.
    pub cancelled: bool,
}

/// `parse_file` was given an id the file set does not know.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct UnknownFile(pub FileId);

impl fmt::Display for UnknownFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file {:?} is not registered in the file set", self.0)
    }
}

impl std::error::Error for UnknownFile {}

/// Parse `file` from `files` into `ast`.
pub fn parse_file(
    files: &FileSet,
    file: FileId,
    interner: &StringInterner,
    ast: &mut AstArena,
    options: &ParseOptions<'_>,
) -> Result<ParseOutput, UnknownFile> {
    let source = files.get(file).ok_or(UnknownFile(file))?;
    Ok(parse_source(source, interner, ast, options))
}

/// Parse an already resolved source file into `ast`.
pub fn parse_source(
    source: &SourceFile,
    interner: &StringInterner,
    ast: &mut AstArena,
    options: &ParseOptions<'_>,
) -> ParseOutput {
    let span = debug_span!("parse_file", path = source.path());
    let _guard = span.enter();
    Parser::new(source, interner, ast, options).parse()
}

/// Single-file, single-use parser state.
pub(crate) struct Parser<'a> {
    source: &'a SourceFile,
    stream: TokenStream<'a>,
    interner: &'a StringInterner,
    ast: &'a mut AstArena,
    bag: DiagnosticBag,
    file: FileId,
    ctx: ParseContext,
    depth: DepthBudget,
    depth_reported: bool,
    pragma: Option<Pragma>,
    seen_item: bool,
    pending_directives: Vec<DirectiveBlock>,
    directives: Vec<DirectiveBlock>,
    items: Vec<ItemId>,
    tracer: Option<&'a dyn ProgressTracer>,
}

impl<'a> Parser<'a> {
    fn new(
        source: &'a SourceFile,
        interner: &'a StringInterner,
        ast: &'a mut AstArena,
        options: &ParseOptions<'a>,
    ) -> Self {
        Parser {
            source,
            stream: TokenStream::new(source),
            interner,
            ast,
            bag: DiagnosticBag::new(options.max_errors),
            file: source.id(),
            ctx: ParseContext::default(),
            depth: DepthBudget::new(options.max_expr_depth),
            depth_reported: false,
            pragma: None,
            seen_item: false,
            pending_directives: Vec::new(),
            directives: Vec::new(),
            items: Vec::new(),
            tracer: options.tracer,
        }
    }

    fn parse(mut self) -> ParseOutput {
        let cancelled = self.parse_items();
        self.flush_lex_errors();

        let mut directives = std::mem::take(&mut self.directives);
        directives.append(&mut self.pending_directives);
        let file = self.ast.new_file(AstFile {
            file: self.file,
            span: self.source.full_span(),
            items: std::mem::take(&mut self.items),
            pragma: self.pragma.take(),
            directives,
        });
        ParseOutput {
            file,
            diagnostics: self.bag,
            cancelled,
        }
    }

    // Token access

    #[inline]
    fn peek(&mut self) -> &Token<'a> {
        self.stream.peek()
    }

    #[inline]
    fn peek_kind(&mut self) -> TokenKind {
        self.stream.peek_kind()
    }

    #[inline]
    fn peek_nth_kind(&mut self, n: usize) -> TokenKind {
        self.stream.peek_nth(n).kind
    }

    #[inline]
    fn peek_span(&mut self) -> Span {
        self.stream.peek().span
    }

    #[inline]
    fn at(&mut self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    #[inline]
    fn bump(&mut self) -> Token<'a> {
        self.stream.next()
    }

    /// Consume the next token if it is `kind`.
    fn eat(&mut self, kind: TokenKind) -> Option<Span> {
        if self.at(kind) {
            Some(self.bump().span)
        } else {
            None
        }
    }

    #[inline]
    fn last_span(&self) -> Span {
        self.stream.last_span()
    }

    /// Span from `start` to the end of the last consumed token.
    fn span_from(&self, start: Span) -> Span {
        start.cover(self.last_span())
    }

    fn intern(&self, text: &str) -> StringId {
        self.interner.intern(text)
    }

    /// Whether the next token is on a new line.
    fn at_line_start(&mut self) -> bool {
        self.peek().has_leading_newline()
    }

    /// Source text of `span`, or `""` if it does not address this file.
    fn slice(&self, span: Span) -> &'a str {
        self.source.slice(span).unwrap_or("")
    }
}
