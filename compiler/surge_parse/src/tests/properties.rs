//! Property tests: the parser terminates on any input, node spans nest, and
//! each item's text parses back to the same kind of item.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use surge_ir::ast::{StmtId, StmtKind};
use surge_ir::Span;

use super::{parse, Parsed};

/// Well-formed files covering every item kind.
const CORPUS: &[&str] = &[
    "import std/time;\nfn main() { let x = 1; }",
    "pub const LIMIT: int = 10;\nlet mut total = LIMIT * 2;",
    "fn sum(a: int, b: int = 0, ...rest: int) -> int {\n    let acc = a + b;\n    for r in rest { acc = acc + r; }\n    return acc;\n}",
    "type Point = { x: float, y: float };\ntype Shape = Circle(float) | Square(float) | nothing;",
    "enum Color = { Red, Green = 2, Blue };\ntag Some<T>(T);",
    "contract Named( field name: string; fn greet(self: Named) -> string; )",
    "extern<Point> { pub fn norm(self: Point) -> float { return self.x * self.x; } }",
    "fn pick(v: int) -> string {\n    compare v { 0 => \"zero\"; _ if v > 0 => \"pos\"; finally => \"neg\" }\n}",
    "fn loops() {\n    while ready() { if done { break; } else { continue; } }\n    for (let mut i = 0; i < 3; i = i + 1) { tick(i); }\n}",
    "let greeting = f\"hello {name}!\";\nlet cast = value to int to float;",
];

fn arb_ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}".prop_filter("keywords are not identifiers", |s| {
        !matches!(
            s.as_str(),
            "fn" | "let" | "mut" | "own" | "pub" | "as" | "is" | "to" | "if" | "in" | "for"
                | "map" | "tag" | "type" | "enum" | "else" | "race" | "with" | "true"
                | "false" | "field" | "await" | "async" | "break" | "const" | "spawn"
                | "while" | "import" | "extern" | "return" | "select" | "reduce" | "signal"
                | "pragma" | "compare" | "finally" | "default" | "nothing" | "contract"
                | "continue" | "parallel"
        )
    })
}

fn arb_binop() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("+"),
        Just("-"),
        Just("*"),
        Just("/"),
        Just("%"),
        Just("=="),
        Just("!="),
        Just("<="),
        Just(">="),
        Just("&&"),
        Just("||"),
    ]
}

fn arb_operand() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..10_000).prop_map(|n| n.to_string()),
        "[a-zA-Z0-9 ]{0,12}".prop_map(|s| format!("\"{s}\"")),
        arb_ident(),
        arb_ident().prop_map(|name| format!("{name}()")),
    ]
}

/// Fragments that are each a valid token or short token run.
fn arb_fragment() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("fn"),
        Just("let"),
        Just("type"),
        Just("import"),
        Just("contract"),
        Just("extern"),
        Just("compare"),
        Just("x"),
        Just("1"),
        Just("\"s\""),
        Just("("),
        Just(")"),
        Just("{"),
        Just("}"),
        Just("["),
        Just("]"),
        Just("<"),
        Just(">"),
        Just(">>"),
        Just(";"),
        Just(","),
        Just(":"),
        Just("::"),
        Just("="),
        Just("=>"),
        Just("->"),
        Just("@"),
        Just("|"),
        Just(".."),
        Just("to"),
    ]
}

/// Every span in the tree lies inside `outer`.
fn check_stmt(parsed: &Parsed, stmt: StmtId, outer: Span) {
    let node = parsed.ast.stmt(stmt);
    assert!(
        outer.contains_span(node.span),
        "{:?} escapes {:?}",
        parsed.text(node.span),
        parsed.text(outer)
    );
    match node.kind {
        StmtKind::Block(range) => {
            for &inner in parsed.ast.stmt_list(range) {
                check_stmt(parsed, inner, node.span);
            }
        }
        StmtKind::Let(binding) | StmtKind::Const(binding) => {
            if let Some(value) = binding.value {
                assert!(node.span.contains_span(parsed.ast.expr(value).span));
            }
        }
        StmtKind::Expr { expr, .. } | StmtKind::Drop(expr) | StmtKind::Return(Some(expr)) => {
            assert!(node.span.contains_span(parsed.ast.expr(expr).span));
        }
        StmtKind::If {
            cond,
            then_block,
            else_branch,
        } => {
            assert!(node.span.contains_span(parsed.ast.expr(cond).span));
            check_stmt(parsed, then_block, node.span);
            if let Some(branch) = else_branch {
                check_stmt(parsed, branch, node.span);
            }
        }
        StmtKind::While { body, .. }
        | StmtKind::ForIn { body, .. }
        | StmtKind::ForClassic { body, .. } => check_stmt(parsed, body, node.span),
        StmtKind::Return(None) | StmtKind::Break | StmtKind::Continue | StmtKind::Signal { .. } => {}
    }
}

#[test]
fn test_corpus_parses_clean() {
    for src in CORPUS {
        parse(src).assert_clean();
    }
}

#[test]
fn test_spans_nest() {
    for src in CORPUS {
        let parsed = parse(src);
        let file = parsed.files.iter().next().unwrap().full_span();

        let mut previous_end = 0;
        for &id in parsed.items() {
            let item = parsed.ast.item(id);
            assert!(file.contains_span(item.span));
            assert!(item.span.contains_span(item.keyword_span));
            assert!(item.span.start >= previous_end, "items overlap in {src:?}");
            previous_end = item.span.end;

            if let Some(body) = parsed.ast.fn_item(id).and_then(|f| f.body) {
                check_stmt(&parsed, body, item.span);
            }
        }
    }
}

#[test]
fn test_item_text_reparses_to_same_item() {
    for src in CORPUS {
        let parsed = parse(src);
        for &id in parsed.items() {
            let item = parsed.ast.item(id);
            let text = parsed.text(item.span);
            let again = parse(text);
            again.assert_clean();
            assert_eq!(again.tags(), vec![item.kind.tag()], "reparsing {text:?}");
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn arbitrary_text_terminates(src in "\\PC{0,120}") {
        let parsed = parse(&src);
        let len = u32::try_from(src.len()).unwrap();
        for diagnostic in parsed.diagnostics() {
            prop_assert!(diagnostic.primary_span.end <= len);
        }
        for &id in parsed.items() {
            prop_assert!(parsed.ast.item(id).span.end <= len);
        }
    }

    #[test]
    fn token_soup_terminates(fragments in proptest::collection::vec(arb_fragment(), 0..48)) {
        let src = fragments.join(" ");
        let parsed = parse(&src);
        prop_assert!(parsed.output.diagnostics.len() <= 100);
    }

    #[test]
    fn binary_expressions_parse_clean(
        left in arb_operand(),
        op in arb_binop(),
        right in arb_operand(),
    ) {
        let src = format!("let v = {left} {op} {right};");
        let parsed = parse(&src);
        prop_assert!(parsed.output.diagnostics.is_empty(), "{src}: {:?}", parsed.codes());
        prop_assert_eq!(parsed.items().len(), 1);
    }
}
