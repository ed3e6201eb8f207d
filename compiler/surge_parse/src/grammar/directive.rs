//! Module pragma and doc-line directive blocks.

use smallvec::SmallVec;
use surge_diagnostic::ErrorCode;
use surge_ir::ast::{DirectiveBlock, DirectiveLine, ItemId, Pragma, PragmaEntry, PragmaFlags};
use surge_ir::{TokenKind, Trivia, TriviaKind};
use tracing::debug;

use crate::Parser;

/// `Name:` heading of a directive block.
fn directive_header(text: &str) -> Option<&str> {
    let name = text.strip_suffix(':')?.trim_end();
    let mut chars = name.chars();
    let first = chars.next()?;
    (first.is_ascii_alphabetic() && chars.all(|c| c.is_ascii_alphanumeric() || c == '_'))
        .then_some(name)
}

/// Whether a directive line belongs to `namespace` (`Ns.x` or `Ns::x`).
fn belongs_to(text: &str, namespace: &str) -> bool {
    text.strip_prefix(namespace)
        .is_some_and(|rest| rest.starts_with('.') || rest.starts_with("::"))
}

impl Parser<'_> {
    /// `pragma flag, flag(args), …` terminated by `;`, a line break or the
    /// end of the file. Only the first pragma before any item is kept.
    pub(crate) fn parse_pragma(&mut self) {
        let keyword = self.bump().span;
        let misplaced = self.seen_item || self.pragma.is_some();
        if misplaced {
            self.report(
                ErrorCode::SynPragmaPosition,
                keyword,
                "`pragma` must appear once, before any item",
            )
            .emit();
        }

        let mut flags = PragmaFlags::empty();
        let mut entries = Vec::new();
        loop {
            if self.at(TokenKind::Eof) || self.at(TokenKind::Semicolon) || self.at_line_start() {
                break;
            }
            let Some((name, name_span)) = self.expect_ident("pragma flag") else {
                break;
            };
            if self.at(TokenKind::LParen) {
                self.skip_balanced();
            }
            let entry_span = self.span_from(name_span);
            let text = self.slice(name_span);
            match PragmaFlags::from_pragma_name(text) {
                Some(flag) => flags |= flag,
                None => {
                    self.report(
                        ErrorCode::SynPragmaUnknownFlag,
                        name_span,
                        format!("unknown pragma flag `{text}`"),
                    )
                    .emit();
                }
            }
            let raw = self.intern(self.slice(entry_span));
            entries.push(PragmaEntry {
                name,
                raw,
                span: entry_span,
            });
            if self.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
        if !self.at(TokenKind::Eof) && !self.at_line_start() {
            self.expect_semicolon("pragma");
        }

        let span = self.span_from(keyword);
        debug!(?span, entries = entries.len(), misplaced, "pragma");
        if !misplaced {
            self.pragma = Some(Pragma {
                flags,
                entries,
                span,
            });
        }
    }

    /// Skip a parenthesised group, including nested groups.
    fn skip_balanced(&mut self) {
        let open = self.bump().span;
        let mut depth = 1u32;
        while depth > 0 {
            match self.peek_kind() {
                TokenKind::Eof => {
                    self.expect_closing(TokenKind::RParen, open);
                    return;
                }
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => depth -= 1,
                _ => {}
            }
            self.bump();
        }
    }

    /// Turn the doc lines in front of the next token into directive blocks.
    /// Blocks wait in `pending_directives` until an item is parsed.
    pub(crate) fn collect_directives(&mut self) {
        let trivia: SmallVec<[Trivia<'_>; 8]> = self.peek().leading.iter().copied().collect();
        if !trivia.iter().any(|t| t.kind == TriviaKind::DocLine) {
            return;
        }

        let mut current: Option<DirectiveBlock> = None;
        let mut newlines = 0;
        for piece in trivia {
            match piece.kind {
                TriviaKind::Newline => {
                    newlines += 1;
                    if newlines >= 2 {
                        self.finish_directive(current.take());
                    }
                }
                TriviaKind::DocLine => {
                    newlines = 0;
                    let text = piece.doc_text().unwrap_or("");
                    if let Some(name) = directive_header(text) {
                        self.finish_directive(current.take());
                        current = Some(DirectiveBlock {
                            namespace: self.intern(name),
                            lines: Vec::new(),
                            span: piece.span,
                            owner: None,
                        });
                        continue;
                    }
                    let namespace = current
                        .as_ref()
                        .and_then(|block| self.interner.lookup(block.namespace));
                    match (current.as_mut(), namespace) {
                        (Some(block), Some(ns)) if belongs_to(text, ns) => {
                            block.lines.push(DirectiveLine {
                                text: self.interner.intern(text),
                                span: piece.span,
                            });
                            block.span = block.span.cover(piece.span);
                        }
                        _ => self.finish_directive(current.take()),
                    }
                }
                TriviaKind::Whitespace | TriviaKind::LineComment | TriviaKind::BlockComment => {}
            }
        }
        self.finish_directive(current);
    }

    fn finish_directive(&mut self, block: Option<DirectiveBlock>) {
        if let Some(block) = block {
            self.pending_directives.push(block);
        }
    }

    /// Hand pending directive blocks to `item`.
    pub(crate) fn attach_directives(&mut self, item: ItemId) {
        for mut block in self.pending_directives.drain(..) {
            block.owner = Some(item);
            self.directives.push(block);
        }
    }
}
