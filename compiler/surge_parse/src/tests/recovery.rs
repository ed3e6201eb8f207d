//! Error limits, cancellation, nesting limits, lexer error ordering and
//! recovery to the next item.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::{Cell, RefCell};

use pretty_assertions::assert_eq;
use surge_diagnostic::ErrorCode;
use surge_ir::ast::ItemTag;
use surge_ir::Span;

use super::{parse, parse_with};
use crate::{Cancellation, ParseOptions, ProgressTracer};

const FIVE_BAD_ITEMS: &str = "1; 2; 3; 4; 5;\nfn ok();";

#[test]
fn test_error_cap_drops_later_reports() {
    let options = ParseOptions::new().with_max_errors(3);
    let parsed = parse_with(FIVE_BAD_ITEMS, &options);

    assert_eq!(parsed.output.diagnostics.len(), 3);
    assert_eq!(parsed.output.diagnostics.dropped_count(), 2);
    assert_eq!(parsed.tags(), vec![ItemTag::Fn]);
}

#[test]
fn test_zero_cap_is_unlimited() {
    let options = ParseOptions::new().with_max_errors(0);
    let parsed = parse_with(FIVE_BAD_ITEMS, &options);

    assert_eq!(parsed.codes(), vec![ErrorCode::SynUnexpectedTopLevel; 5]);
    assert_eq!(parsed.output.diagnostics.dropped_count(), 0);
}

/// Records every parsed item and stops after `limit` of them.
struct StopAfter {
    limit: usize,
    seen: RefCell<Vec<ItemTag>>,
    polls: Cell<usize>,
}

impl StopAfter {
    fn new(limit: usize) -> Self {
        StopAfter {
            limit,
            seen: RefCell::new(Vec::new()),
            polls: Cell::new(0),
        }
    }
}

impl ProgressTracer for StopAfter {
    fn item_parsed(&self, kind: ItemTag, _span: Span) {
        self.seen.borrow_mut().push(kind);
    }

    fn is_cancelled(&self) -> bool {
        self.polls.set(self.polls.get() + 1);
        self.seen.borrow().len() >= self.limit
    }
}

#[test]
fn test_tracer_sees_items_and_cancels() {
    let tracer = StopAfter::new(2);
    let options = ParseOptions::new().with_tracer(&tracer);
    let parsed = parse_with("import a; fn b(); let c = 1; fn d();", &options);

    assert!(parsed.output.cancelled);
    assert_eq!(parsed.tags(), vec![ItemTag::Import, ItemTag::Fn]);
    assert_eq!(*tracer.seen.borrow(), parsed.tags());
    assert_eq!(tracer.polls.get(), 3);
    parsed.assert_clean();
}

#[test]
fn test_cancelled_before_start() {
    let cancel = Cancellation::new();
    cancel.cancel();
    let options = ParseOptions::new().with_tracer(&cancel);
    let parsed = parse_with("fn a(); fn b();", &options);

    assert!(parsed.output.cancelled);
    assert!(parsed.items().is_empty());
}

#[test]
fn test_uncancelled_parse_completes() {
    let cancel = Cancellation::new();
    let options = ParseOptions::new().with_tracer(&cancel);
    let parsed = parse_with("fn a(); fn b();", &options);

    assert!(!parsed.output.cancelled);
    assert_eq!(parsed.items().len(), 2);
}

#[test]
fn test_expression_depth_limit() {
    let nested = format!("let x = {}1{};\nfn ok();", "(".repeat(40), ")".repeat(40));

    let options = ParseOptions::new().with_max_expr_depth(8);
    let parsed = parse_with(&nested, &options);
    assert_eq!(parsed.codes(), vec![ErrorCode::SynExpressionTooDeep]);
    assert_eq!(parsed.tags(), vec![ItemTag::Fn]);

    // The same input is fine under the default limit.
    parse(&nested).assert_clean();
}

#[test]
fn test_depth_limit_is_reported_per_item() {
    let deep = format!("let x = {}1;", "- ".repeat(30));
    let src = format!("{deep}\n{deep}");
    let options = ParseOptions::new().with_max_expr_depth(8);
    let parsed = parse_with(&src, &options);

    assert_eq!(parsed.codes(), vec![ErrorCode::SynExpressionTooDeep; 2]);
}

#[test]
fn test_lexer_errors_in_discovery_order() {
    let parsed = parse("let a = $ 1;\nlet b = ;");
    assert_eq!(
        parsed.codes(),
        vec![ErrorCode::LexInvalidCharacter, ErrorCode::SynExpectExpression]
    );
    assert_eq!(parsed.tags(), vec![ItemTag::Let]);

    let parsed = parse("let b = ;\nlet a = $ 1;");
    assert_eq!(
        parsed.codes(),
        vec![ErrorCode::SynExpectExpression, ErrorCode::LexInvalidCharacter]
    );
    assert_eq!(parsed.text(parsed.diagnostics()[1].primary_span), "$");
}

#[test]
fn test_unclosed_paren() {
    let parsed = parse("let x = (1 + 2;\nfn f();");

    let diagnostic = parsed.single(ErrorCode::SynUnclosedParen);
    assert_eq!(parsed.codes().len(), 1);
    assert_eq!(parsed.text(diagnostic.notes[0].span), "(");
    assert_eq!(parsed.tags(), vec![ItemTag::Fn]);

    let fixed = diagnostic
        .preferred_fix()
        .unwrap()
        .apply(parsed.source())
        .unwrap();
    assert_eq!(fixed, "let x = (1 + 2);\nfn f();");
    parse(&fixed).assert_clean();
}

#[test]
fn test_stray_tokens_resync_to_next_item() {
    let parsed = parse("} ) fn ok();");
    assert_eq!(parsed.codes()[0], ErrorCode::SynUnexpectedTopLevel);
    assert_eq!(parsed.tags(), vec![ItemTag::Fn]);

    let parsed = parse("pub 42;\nlet y = 2;");
    assert_eq!(parsed.codes(), vec![ErrorCode::SynUnexpectedToken]);
    assert_eq!(parsed.tags(), vec![ItemTag::Let]);
}

#[test]
fn test_errors_are_spread_across_items() {
    let parsed = parse("let = 3;\nfn b() -> int;\nconst C = ;\nconst D = 1;");

    assert_eq!(parsed.tags(), vec![ItemTag::Fn, ItemTag::Const]);
    assert_eq!(parsed.codes().len(), 2);
    assert!(parsed.output.diagnostics.has_errors());
}

#[test]
fn test_long_pub_run_in_block_is_flat() {
    let src = format!("fn f() {{ {}let y = 1; }}\nfn g();", "pub ".repeat(50_000));
    let (codes, dropped, tags) = std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(move || {
            let parsed = parse(&src);
            (
                parsed.codes(),
                parsed.output.diagnostics.dropped_count(),
                parsed.tags(),
            )
        })
        .unwrap()
        .join()
        .unwrap();

    assert_eq!(codes, vec![ErrorCode::SynModifierNotAllowed; 100]);
    assert_eq!(dropped, 49_900);
    assert_eq!(tags, vec![ItemTag::Fn, ItemTag::Fn]);
}
