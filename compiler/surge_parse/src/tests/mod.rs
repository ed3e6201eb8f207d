//! Parser tests.
//!
//! Tests are organized into modules by category:
//! - `scenarios`: the end-to-end examples the parser is specified against
//! - `items`: imports, bindings, functions, types, contracts, tags, externs,
//!   pragma and directive blocks
//! - `exprs`: precedence, postfix forms, literals, control expressions,
//!   f-strings
//! - `stmts`: blocks and statements
//! - `recovery`: error limits, cancellation, fix-its and resynchronisation
//! - `properties`: termination, span nesting and re-parse laws

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod exprs;
mod properties;
mod recovery;

use surge_diagnostic::{Diagnostic, ErrorCode};
use surge_ir::ast::{AstArena, ExprId, ExprKind, ItemId, ItemTag, TypeId, TypeKind};
use surge_ir::{FileSet, StringId, StringInterner};

use crate::{parse_file, tracing_setup, ParseOptions, ParseOutput};

/// Everything a test needs to inspect one parse.
pub(super) struct Parsed {
    pub files: FileSet,
    pub interner: StringInterner,
    pub ast: AstArena,
    pub output: ParseOutput,
}

impl Parsed {
    pub fn items(&self) -> &[ItemId] {
        &self.ast.file(self.output.file).items
    }

    pub fn tags(&self) -> Vec<ItemTag> {
        self.items()
            .iter()
            .map(|&id| self.ast.item(id).kind.tag())
            .collect()
    }

    /// The single item of the file.
    pub fn only_item(&self) -> ItemId {
        assert_eq!(self.items().len(), 1, "items: {:?}", self.tags());
        self.items()[0]
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.output.diagnostics.as_slice()
    }

    pub fn codes(&self) -> Vec<ErrorCode> {
        self.diagnostics().iter().map(|d| d.code).collect()
    }

    /// The only diagnostic with `code`.
    pub fn single(&self, code: ErrorCode) -> &Diagnostic {
        let found: Vec<_> = self.output.diagnostics.with_code(code).collect();
        assert_eq!(found.len(), 1, "diagnostics: {:?}", self.codes());
        found[0]
    }

    #[track_caller]
    pub fn assert_clean(&self) {
        assert!(
            self.output.diagnostics.is_empty(),
            "unexpected diagnostics: {:#?}",
            self.diagnostics()
        );
    }

    pub fn name(&self, id: StringId) -> &'static str {
        self.interner.must_lookup(id)
    }

    pub fn source(&self) -> &str {
        self.files.iter().next().unwrap().content()
    }

    pub fn text(&self, span: surge_ir::Span) -> &str {
        self.files.slice(span).unwrap()
    }

    /// Name of a single-segment path type.
    pub fn path_name(&self, ty: TypeId) -> &'static str {
        match self.ast.ty(ty).kind {
            TypeKind::Path(segments) => {
                let segments = self.ast.path_segments(segments);
                assert_eq!(segments.len(), 1);
                self.name(segments[0].name)
            }
            other => panic!("expected a path type, found {other:?}"),
        }
    }

    pub fn ident(&self, expr: ExprId) -> &'static str {
        match self.ast.expr(expr).kind {
            ExprKind::Ident(name) => self.name(name),
            other => panic!("expected an identifier, found {other:?}"),
        }
    }

    /// Value of the `let`/`const` item at `index`.
    pub fn item_value(&self, index: usize) -> ExprId {
        let id = self.items()[index];
        let binding = self
            .ast
            .let_item(id)
            .or_else(|| self.ast.const_item(id))
            .unwrap();
        binding.value.unwrap()
    }
}

pub(super) fn parse(src: &str) -> Parsed {
    parse_with(src, &ParseOptions::default())
}

pub(super) fn parse_with(src: &str, options: &ParseOptions<'_>) -> Parsed {
    tracing_setup::init_tracing();
    let mut files = FileSet::new();
    let file = files.add_virtual("test.sg", src).unwrap();
    let interner = StringInterner::new();
    let mut ast = AstArena::new();
    let output = parse_file(&files, file, &interner, &mut ast, options).unwrap();
    Parsed {
        files,
        interner,
        ast,
        output,
    }
}

/// Parse `let x = <src>;` and return the value expression.
pub(super) fn parse_expr(src: &str) -> (Parsed, ExprId) {
    let parsed = parse(&format!("let x = {src};"));
    let value = parsed.item_value(0);
    (parsed, value)
}
