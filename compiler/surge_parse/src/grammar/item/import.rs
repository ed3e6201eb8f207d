//! `import` items.
//!
//! ```text
//! import Segs (::Ident (as Ident)? | ::{ Ident (as Ident)?, … } | as Ident)? ;
//! Segs := (Ident | . | ..) (/ (Ident | . | ..))*
//! ```

use surge_diagnostic::{Applicability, ErrorCode, FixKind, FixSuggestion};
use surge_ir::ast::{
    ImportItem, ImportOne, ImportPair, ImportSegment, ImportSegmentKind, ItemId, ItemKind,
    ModifierFlags,
};
use surge_ir::{Span, StringId, TokenKind};

use crate::grammar::{Modifiers, ParsedAttrs};
use crate::Parser;

impl Parser<'_> {
    pub(super) fn parse_import(
        &mut self,
        start: Span,
        attrs: ParsedAttrs,
        mods: Modifiers,
    ) -> Option<ItemId> {
        let flags = self.check_modifiers(mods, ModifierFlags::PUBLIC, "imports");
        let keyword = self.bump().span;

        let mut path = vec![self.parse_import_segment()?];
        while self.eat(TokenKind::Slash).is_some() {
            path.push(self.parse_import_segment()?);
        }

        let mut import = ImportItem {
            path,
            module_alias: None,
            one: None,
            group: None,
        };
        if let Some(colons) = self.eat(TokenKind::ColonColon) {
            match self.peek_kind() {
                TokenKind::Ident => {
                    let (name, name_span) = self.expect_ident("imported name")?;
                    let alias = self.parse_import_alias()?;
                    import.one = Some(ImportOne {
                        name,
                        alias,
                        span: self.span_from(name_span),
                    });
                }
                TokenKind::LBrace => {
                    let pairs = self.parse_import_group(colons)?;
                    import.group = Some(self.ast.alloc_import_pairs(pairs));
                }
                _ => {
                    let span = self.peek_span();
                    let found = self.found();
                    self.report(
                        ErrorCode::SynExpectItemAfterDbl,
                        span,
                        format!("expected a name or `{{` after `::`, found {found}"),
                    )
                    .emit();
                    return None;
                }
            }
        } else if self.at(TokenKind::As) {
            import.module_alias = self.parse_import_alias()?;
        }

        self.expect_semicolon("import");
        Some(self.finish_item(
            ItemKind::Import(import),
            start,
            keyword,
            flags.visibility(),
            attrs,
        ))
    }

    fn parse_import_segment(&mut self) -> Option<ImportSegment> {
        let kind = match self.peek_kind() {
            // Module names may collide with contextual keywords (`std/map`).
            kind if kind == TokenKind::Ident || kind.is_keyword() => {
                let text = self.peek().text;
                ImportSegmentKind::Name(self.intern(text))
            }
            TokenKind::Dot => ImportSegmentKind::Current,
            TokenKind::DotDot => ImportSegmentKind::Parent,
            _ => {
                let span = self.peek_span();
                let found = self.found();
                self.report(
                    ErrorCode::SynExpectModuleSeg,
                    span,
                    format!("expected a module path segment, found {found}"),
                )
                .emit();
                return None;
            }
        };
        let span = self.bump().span;
        Some(ImportSegment { kind, span })
    }

    /// Optional `as Ident`. Fails only when `as` is not followed by a name.
    fn parse_import_alias(&mut self) -> Option<Option<StringId>> {
        if self.eat(TokenKind::As).is_none() {
            return Some(None);
        }
        if self.at(TokenKind::Ident) {
            let text = self.bump().text;
            return Some(Some(self.intern(text)));
        }
        let span = self.peek_span();
        let found = self.found();
        self.report(
            ErrorCode::SynExpectIdentAfterAs,
            span,
            format!("expected an identifier after `as`, found {found}"),
        )
        .emit();
        None
    }

    /// `{ a, b as c, }` after `::`. Reports empty and single-entry groups.
    fn parse_import_group(&mut self, colons: Span) -> Option<Vec<ImportPair>> {
        let open = self.bump().span;
        let mut pairs = Vec::new();
        let mut trailing_comma = None;
        while !self.at(TokenKind::RBrace) && !self.at(TokenKind::Eof) {
            let (name, name_span) = self.expect_ident("imported name")?;
            let alias = self.parse_import_alias()?;
            pairs.push(ImportPair {
                name,
                alias,
                span: self.span_from(name_span),
            });
            trailing_comma = self.eat(TokenKind::Comma);
            if trailing_comma.is_none() {
                break;
            }
        }

        let Some(close) = self.expect_closing(TokenKind::RBrace, open) else {
            return Some(pairs);
        };
        match pairs.len() {
            0 => {
                let group = colons.cover(close);
                self.report(
                    ErrorCode::SynEmptyImportGroup,
                    group,
                    "empty import group imports nothing",
                )
                .fix(
                    FixSuggestion::delete("remove `::{}`", group)
                        .with_kind(FixKind::Cleanup)
                        .with_applicability(Applicability::AlwaysSafe)
                        .preferred(),
                )
                .emit();
            }
            1 => {
                let mut spans = vec![open];
                spans.extend(trailing_comma);
                spans.push(close);
                self.report(
                    ErrorCode::SynInfoImportGroup,
                    open.cover(close),
                    "import group with a single entry does not need braces",
                )
                .fix(
                    FixSuggestion::delete_many("remove the braces", spans)
                        .with_kind(FixKind::Cleanup)
                        .with_applicability(Applicability::AlwaysSafe)
                        .preferred(),
                )
                .emit();
            }
            _ => {}
        }
        Some(pairs)
    }
}
