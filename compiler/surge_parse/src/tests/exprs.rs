//! Expression tests: precedence, postfix forms, literals, collection
//! literals, arm-based expressions and f-strings.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use surge_diagnostic::{ErrorCode, TextEdit};
use surge_ir::ast::{BinaryOp, ExprId, ExprKind, LiteralKind, StmtKind, UnaryOp};

use super::{parse, parse_expr, Parsed};

fn binary(parsed: &Parsed, expr: ExprId) -> (BinaryOp, ExprId, ExprId) {
    match parsed.ast.expr(expr).kind {
        ExprKind::Binary { op, left, right } => (op, left, right),
        other => panic!("expected a binary expression, found {other:?}"),
    }
}

fn literal(parsed: &Parsed, expr: ExprId) -> (LiteralKind, &'static str) {
    match parsed.ast.expr(expr).kind {
        ExprKind::Literal { kind, value } => (kind, parsed.name(value)),
        other => panic!("expected a literal, found {other:?}"),
    }
}

fn unary(parsed: &Parsed, expr: ExprId) -> (UnaryOp, ExprId) {
    match parsed.ast.expr(expr).kind {
        ExprKind::Unary { op, operand } => (op, operand),
        other => panic!("expected a unary expression, found {other:?}"),
    }
}

// Operators

#[test]
fn test_multiplication_binds_tighter() {
    let (parsed, value) = parse_expr("1 + 2 * 3");
    parsed.assert_clean();

    let (op, left, right) = binary(&parsed, value);
    assert_eq!(op, BinaryOp::Add);
    assert_eq!(literal(&parsed, left), (LiteralKind::Int, "1"));
    let (op, left, right) = binary(&parsed, right);
    assert_eq!(op, BinaryOp::Mul);
    assert_eq!(literal(&parsed, left), (LiteralKind::Int, "2"));
    assert_eq!(literal(&parsed, right), (LiteralKind::Int, "3"));
}

#[test]
fn test_subtraction_is_left_associative() {
    let (parsed, value) = parse_expr("a - b - c");
    parsed.assert_clean();

    let (op, left, right) = binary(&parsed, value);
    assert_eq!(op, BinaryOp::Sub);
    assert_eq!(parsed.ident(right), "c");
    let (op, left, right) = binary(&parsed, left);
    assert_eq!(op, BinaryOp::Sub);
    assert_eq!((parsed.ident(left), parsed.ident(right)), ("a", "b"));
}

#[test]
fn test_assignment_is_right_associative() {
    let parsed = parse("fn f() { a = b = c; }");
    parsed.assert_clean();

    let f = parsed.ast.fn_item(parsed.only_item()).unwrap();
    let stmts = parsed.ast.block_stmts(f.body.unwrap()).unwrap();
    let StmtKind::Expr {
        expr,
        missing_semicolon: false,
    } = parsed.ast.stmt(stmts[0]).kind
    else {
        panic!("expected an expression statement");
    };
    let (op, left, right) = binary(&parsed, expr);
    assert_eq!(op, BinaryOp::Assign);
    assert_eq!(parsed.ident(left), "a");
    let (op, left, right) = binary(&parsed, right);
    assert_eq!(op, BinaryOp::Assign);
    assert_eq!((parsed.ident(left), parsed.ident(right)), ("b", "c"));
}

#[test]
fn test_logical_and_of_comparisons() {
    let (parsed, value) = parse_expr("a < b && c > (d)");
    parsed.assert_clean();

    let (op, left, right) = binary(&parsed, value);
    assert_eq!(op, BinaryOp::And);
    assert_eq!(binary(&parsed, left).0, BinaryOp::Lt);
    let (op, _, group) = binary(&parsed, right);
    assert_eq!(op, BinaryOp::Gt);
    assert!(matches!(parsed.ast.expr(group).kind, ExprKind::Group(_)));
}

#[test]
fn test_ternary_does_not_read_colon_as_cast() {
    let (parsed, value) = parse_expr("c ? x : y");
    parsed.assert_clean();

    let ExprKind::Ternary {
        cond,
        then_expr,
        else_expr,
    } = parsed.ast.expr(value).kind
    else {
        panic!("expected a ternary");
    };
    assert_eq!(parsed.ident(cond), "c");
    assert_eq!(parsed.ident(then_expr), "x");
    assert_eq!(parsed.ident(else_expr), "y");
}

#[test]
fn test_is_and_colon_cast() {
    let (parsed, value) = parse_expr("x is int");
    parsed.assert_clean();
    let ExprKind::Is { value, ty } = parsed.ast.expr(value).kind else {
        panic!("expected an `is` test");
    };
    assert_eq!(parsed.ident(value), "x");
    assert_eq!(parsed.path_name(ty), "int");

    let (parsed, value) = parse_expr("x: int");
    parsed.assert_clean();
    assert!(matches!(
        parsed.ast.expr(value).kind,
        ExprKind::Cast { ty: Some(_), raw: None, .. }
    ));
}

#[test]
fn test_cast_to_literal_keeps_raw_target() {
    let (parsed, value) = parse_expr("code to \"hex\"");
    parsed.assert_clean();
    let ExprKind::Cast {
        ty: None,
        raw: Some(raw),
        ..
    } = parsed.ast.expr(value).kind
    else {
        panic!("expected a raw cast");
    };
    assert_eq!(literal(&parsed, raw), (LiteralKind::String, "hex"));
}

#[test]
fn test_prefix_operators() {
    let cases = [
        ("-x", UnaryOp::Neg),
        ("!x", UnaryOp::Not),
        ("*x", UnaryOp::Deref),
        ("&x", UnaryOp::Ref),
        ("&mut x", UnaryOp::RefMut),
        ("own x", UnaryOp::Own),
        ("await x", UnaryOp::Await),
    ];
    for (src, expected) in cases {
        let (parsed, value) = parse_expr(src);
        parsed.assert_clean();
        let (op, operand) = unary(&parsed, value);
        assert_eq!(op, expected, "{src}");
        assert_eq!(parsed.ident(operand), "x");
    }
}

#[test]
fn test_double_reference_splits_token() {
    let (parsed, value) = parse_expr("&&x");
    parsed.assert_clean();

    let (op, inner) = unary(&parsed, value);
    assert_eq!(op, UnaryOp::Ref);
    let (op, operand) = unary(&parsed, inner);
    assert_eq!(op, UnaryOp::Ref);
    assert_eq!(parsed.ident(operand), "x");
    assert_eq!(parsed.text(parsed.ast.expr(inner).span), "&x");
}

#[test]
fn test_fat_arrow_outside_arms() {
    let parsed = parse("let x = a => b;");

    assert!(parsed.items().is_empty());
    let diagnostic = parsed.single(ErrorCode::SynFatArrowOutsideParallel);
    assert_eq!(parsed.codes().len(), 1);
    let fix = diagnostic.preferred_fix().unwrap();
    let [TextEdit::Delete { span }] = fix.edits.as_slice() else {
        panic!("expected a delete fix");
    };
    assert_eq!(parsed.text(*span), "=>");
}

// Postfix forms

#[test]
fn test_calls_with_explicit_type_arguments() {
    let (parsed, value) = parse_expr("f::<int>(1, 2)");
    parsed.assert_clean();

    let ExprKind::Call {
        callee,
        args,
        type_args,
    } = parsed.ast.expr(value).kind
    else {
        panic!("expected a call");
    };
    assert_eq!(parsed.ident(callee), "f");
    assert_eq!(parsed.ast.expr_list(args).len(), 2);
    let type_args = parsed.ast.type_list(type_args);
    assert_eq!(type_args.len(), 1);
    assert_eq!(parsed.path_name(type_args[0]), "int");
}

#[test]
fn test_bare_generic_call_suggests_turbofish() {
    let parsed = parse("let v = f<int>(1);");

    assert!(parsed.items().is_empty());
    assert_eq!(parsed.codes(), vec![ErrorCode::SynUnexpectedToken]);
    let fix = parsed.diagnostics()[0].preferred_fix().unwrap();
    let [TextEdit::Replace { span, text }] = fix.edits.as_slice() else {
        panic!("expected a replacement fix");
    };
    assert_eq!(parsed.text(*span), "<");
    assert_eq!(text, "::<");

    let fixed = fix.apply(parsed.source()).unwrap();
    assert_eq!(fixed, "let v = f::<int>(1);");
    parse(&fixed).assert_clean();
}

#[test]
fn test_member_index_and_static_access() {
    let (parsed, value) = parse_expr("a.b::c[0]");
    parsed.assert_clean();

    let ExprKind::Index { target, index } = parsed.ast.expr(value).kind else {
        panic!("expected an index");
    };
    assert_eq!(literal(&parsed, index), (LiteralKind::Int, "0"));
    let ExprKind::Member {
        target,
        member,
        path: true,
    } = parsed.ast.expr(target).kind
    else {
        panic!("expected a static member");
    };
    assert_eq!(parsed.name(member), "c");
    let ExprKind::Member {
        target,
        member,
        path: false,
    } = parsed.ast.expr(target).kind
    else {
        panic!("expected a field access");
    };
    assert_eq!(parsed.name(member), "b");
    assert_eq!(parsed.ident(target), "a");
}

#[test]
fn test_keyword_as_member_name() {
    let (parsed, value) = parse_expr("task.await");
    parsed.assert_clean();
    let ExprKind::Member { member, .. } = parsed.ast.expr(value).kind else {
        panic!("expected a member");
    };
    assert_eq!(parsed.name(member), "await");
}

// Literals

#[test]
fn test_literal_kinds() {
    let cases = [
        ("42", LiteralKind::Int, "42"),
        ("0x1F", LiteralKind::Int, "0x1F"),
        ("7u8", LiteralKind::Uint, "7u8"),
        ("2.5", LiteralKind::Float, "2.5"),
        ("\"hi\"", LiteralKind::String, "hi"),
        ("true", LiteralKind::True, "true"),
        ("false", LiteralKind::False, "false"),
        ("nothing", LiteralKind::Nothing, "nothing"),
    ];
    for (src, kind, text) in cases {
        let (parsed, value) = parse_expr(src);
        parsed.assert_clean();
        assert_eq!(literal(&parsed, value), (kind, text), "{src}");
    }
}

#[test]
fn test_tuples_groups_and_unit() {
    let (parsed, value) = parse_expr("(1, 2)");
    parsed.assert_clean();
    let ExprKind::Tuple(elems) = parsed.ast.expr(value).kind else {
        panic!("expected a tuple");
    };
    assert_eq!(parsed.ast.expr_list(elems).len(), 2);

    let (parsed, value) = parse_expr("(1)");
    assert!(matches!(parsed.ast.expr(value).kind, ExprKind::Group(_)));

    let (parsed, value) = parse_expr("()");
    let ExprKind::Tuple(elems) = parsed.ast.expr(value).kind else {
        panic!("expected the unit tuple");
    };
    assert!(elems.is_empty());
}

#[test]
fn test_single_range_in_brackets_is_a_range() {
    let (parsed, value) = parse_expr("[0..10]");
    parsed.assert_clean();
    let ExprKind::RangeLit {
        start: Some(start),
        end: Some(end),
        inclusive: false,
    } = parsed.ast.expr(value).kind
    else {
        panic!("expected a range literal");
    };
    assert_eq!(literal(&parsed, start).1, "0");
    assert_eq!(literal(&parsed, end).1, "10");

    let (parsed, value) = parse_expr("[0..10,]");
    parsed.assert_clean();
    let ExprKind::Array(elems) = parsed.ast.expr(value).kind else {
        panic!("a trailing comma makes an array");
    };
    assert_eq!(parsed.ast.expr_list(elems).len(), 1);
}

#[test]
fn test_open_ranges() {
    let (parsed, value) = parse_expr("f(a.., ..=b)");
    parsed.assert_clean();
    let ExprKind::Call { args, .. } = parsed.ast.expr(value).kind else {
        panic!("expected a call");
    };
    let args = parsed.ast.expr_list(args);
    assert!(matches!(
        parsed.ast.expr(args[0]).kind,
        ExprKind::RangeLit {
            start: Some(_),
            end: None,
            inclusive: false,
        }
    ));
    assert!(matches!(
        parsed.ast.expr(args[1]).kind,
        ExprKind::RangeLit {
            start: None,
            end: Some(_),
            inclusive: true,
        }
    ));
}

#[test]
fn test_spread_in_array() {
    let (parsed, value) = parse_expr("[...xs, 1]");
    parsed.assert_clean();
    let ExprKind::Array(elems) = parsed.ast.expr(value).kind else {
        panic!("expected an array");
    };
    let elems = parsed.ast.expr_list(elems);
    let ExprKind::Spread(inner) = parsed.ast.expr(elems[0]).kind else {
        panic!("expected a spread");
    };
    assert_eq!(parsed.ident(inner), "xs");
}

// Brace forms

#[test]
fn test_named_struct_literal() {
    let (parsed, value) = parse_expr("Point { x: 1, y: 2 }");
    parsed.assert_clean();

    let ExprKind::Struct {
        ty: Some(ty),
        fields,
        positional: false,
    } = parsed.ast.expr(value).kind
    else {
        panic!("expected a struct literal");
    };
    assert_eq!(parsed.path_name(ty), "Point");
    let names: Vec<_> = parsed
        .ast
        .field_inits(fields)
        .iter()
        .map(|f| parsed.name(f.name.unwrap()))
        .collect();
    assert_eq!(names, vec!["x", "y"]);
}

#[test]
fn test_positional_struct_literal() {
    let (parsed, value) = parse_expr("{1, 2}");
    parsed.assert_clean();
    let ExprKind::Struct {
        ty: None,
        fields,
        positional: true,
    } = parsed.ast.expr(value).kind
    else {
        panic!("expected a positional struct literal");
    };
    assert_eq!(parsed.ast.field_inits(fields).len(), 2);
}

#[test]
fn test_map_literal() {
    let (parsed, value) = parse_expr("{\"a\" => 1, \"b\" => 2}");
    parsed.assert_clean();
    let ExprKind::Map(entries) = parsed.ast.expr(value).kind else {
        panic!("expected a map literal");
    };
    let keys: Vec<_> = parsed
        .ast
        .map_entries(entries)
        .iter()
        .map(|e| literal(&parsed, e.key).1)
        .collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn test_block_expression() {
    let (parsed, value) = parse_expr("{ load(); store(); }");
    parsed.assert_clean();
    let ExprKind::Block(stmts) = parsed.ast.expr(value).kind else {
        panic!("expected a block");
    };
    assert_eq!(parsed.ast.stmt_list(stmts).len(), 2);
}

#[test]
fn test_blocking_block() {
    let (parsed, value) = parse_expr("blocking { read(); }");
    parsed.assert_clean();
    let ExprKind::Blocking { body } = parsed.ast.expr(value).kind else {
        panic!("expected a blocking expression");
    };
    assert!(matches!(parsed.ast.expr(body).kind, ExprKind::Block(_)));
}

// Arm-based and concurrency forms

#[test]
fn test_compare_arms() {
    let (parsed, value) =
        parse_expr("compare x { 1 => \"one\"; _ if big => \"many\"; finally => \"other\" }");
    parsed.assert_clean();

    let ExprKind::Compare { subject, arms } = parsed.ast.expr(value).kind else {
        panic!("expected compare");
    };
    assert_eq!(parsed.ident(subject), "x");
    let arms = parsed.ast.compare_arms(arms);
    assert_eq!(arms.len(), 3);
    assert!(arms[0].guard.is_none());
    assert_eq!(parsed.ident(arms[1].pattern.unwrap()), "_");
    assert_eq!(parsed.ident(arms[1].guard.unwrap()), "big");
    assert!(arms[2].is_finally);
    assert_eq!(arms[2].pattern, None);
}

#[test]
fn test_compare_arms_separated_by_commas() {
    let (parsed, value) = parse_expr("compare x { 1 => a, 2 => b }");

    let ExprKind::Compare { arms, .. } = parsed.ast.expr(value).kind else {
        panic!("expected compare");
    };
    assert_eq!(parsed.ast.compare_arms(arms).len(), 2);
    let diagnostic = parsed.single(ErrorCode::SynExpectSemicolon);
    let fix = diagnostic.preferred_fix().unwrap();
    assert!(matches!(fix.edits.as_slice(), [TextEdit::Replace { text, .. }] if text == ";"));
}

#[test]
fn test_select_and_race() {
    let (parsed, value) = parse_expr("select { await a => 1; default => 2 }");
    parsed.assert_clean();
    let ExprKind::Select(arms) = parsed.ast.expr(value).kind else {
        panic!("expected select");
    };
    let arms = parsed.ast.select_arms(arms);
    assert_eq!(arms.len(), 2);
    assert!(arms[0].await_expr.is_some());
    assert!(arms[1].is_default);

    let (parsed, value) = parse_expr("race { await a => 1; await b => 2; }");
    parsed.assert_clean();
    let ExprKind::Race(arms) = parsed.ast.expr(value).kind else {
        panic!("expected race");
    };
    assert_eq!(parsed.ast.select_arms(arms).len(), 2);
}

#[test]
fn test_parallel_map_and_reduce() {
    let (parsed, value) = parse_expr("parallel map xs with (x) => x * 2");
    parsed.assert_clean();
    let ExprKind::ParallelMap { iter, args, body } = parsed.ast.expr(value).kind else {
        panic!("expected parallel map");
    };
    assert_eq!(parsed.ident(iter), "xs");
    assert_eq!(parsed.ast.expr_list(args).len(), 1);
    assert_eq!(binary(&parsed, body).0, BinaryOp::Mul);

    let (parsed, value) = parse_expr("parallel reduce xs with 0, (acc, x) => acc + x");
    parsed.assert_clean();
    let ExprKind::ParallelReduce { init, args, .. } = parsed.ast.expr(value).kind else {
        panic!("expected parallel reduce");
    };
    assert_eq!(literal(&parsed, init).1, "0");
    assert_eq!(parsed.ast.expr_list(args).len(), 2);
}

#[test]
fn test_async_block_attributes() {
    let (parsed, value) = parse_expr("@failfast async { work(); }");
    parsed.assert_clean();
    let ExprKind::Async { attrs, .. } = parsed.ast.expr(value).kind else {
        panic!("expected an async block");
    };
    assert_eq!(parsed.ast.attrs(attrs).len(), 1);

    let (parsed, value) = parse_expr("@local async { work(); }");
    assert!(matches!(parsed.ast.expr(value).kind, ExprKind::Async { .. }));
    parsed.single(ErrorCode::SynAttributeNotAllowed);
}

#[test]
fn test_spawn_attributes() {
    let (parsed, value) = parse_expr("@local spawn work()");
    parsed.assert_clean();
    let ExprKind::Spawn { target, attrs } = parsed.ast.expr(value).kind else {
        panic!("expected spawn");
    };
    assert_eq!(parsed.ast.attrs(attrs).len(), 1);
    assert!(matches!(parsed.ast.expr(target).kind, ExprKind::Call { .. }));

    let (parsed, _) = parse_expr("@failfast spawn work()");
    parsed.single(ErrorCode::SynAttributeNotAllowed);
}

#[test]
fn test_attribute_on_plain_expression_is_rejected() {
    let (parsed, value) = parse_expr("@local 1");
    assert_eq!(literal(&parsed, value).1, "1");
    let diagnostic = parsed.single(ErrorCode::SynAttributeNotAllowed);
    let fix = diagnostic.preferred_fix().unwrap();
    let [TextEdit::Delete { span }] = fix.edits.as_slice() else {
        panic!("expected a delete fix");
    };
    assert_eq!(parsed.text(*span), "@local");
}

// F-strings

#[test]
fn test_fstring_lowers_to_format_call() {
    let (parsed, value) = parse_expr("f\"a {x} b {y + 1}\"");
    parsed.assert_clean();

    let ExprKind::Call { callee, args, .. } = parsed.ast.expr(value).kind else {
        panic!("expected a format call");
    };
    assert_eq!(parsed.ident(callee), "format");
    let args = parsed.ast.expr_list(args);
    assert_eq!(args.len(), 3);
    assert_eq!(literal(&parsed, args[0]), (LiteralKind::String, "a {} b {}"));

    let ExprKind::Call { callee, args: inner, .. } = parsed.ast.expr(args[1]).kind else {
        panic!("expected fmt_arg");
    };
    assert_eq!(parsed.ident(callee), "fmt_arg");
    let inner = parsed.ast.expr_list(inner);
    assert_eq!(parsed.ident(inner[0]), "x");
    assert_eq!(parsed.text(parsed.ast.expr(inner[0]).span), "x");

    let ExprKind::Call { args: inner, .. } = parsed.ast.expr(args[2]).kind else {
        panic!("expected fmt_arg");
    };
    let inner = parsed.ast.expr_list(inner);
    assert_eq!(binary(&parsed, inner[0]).0, BinaryOp::Add);
}

#[test]
fn test_fstring_escaped_braces() {
    let (parsed, value) = parse_expr("f\"{{literal}} {x}\"");
    parsed.assert_clean();
    let ExprKind::Call { args, .. } = parsed.ast.expr(value).kind else {
        panic!("expected a format call");
    };
    let args = parsed.ast.expr_list(args);
    assert_eq!(args.len(), 2);
    assert_eq!(literal(&parsed, args[0]).1, "{{literal}} {}");
}

#[test]
fn test_fstring_interpolation_error() {
    let (parsed, value) = parse_expr("f\"{1 +}\"");
    assert_eq!(parsed.codes(), vec![ErrorCode::SynExpectExpression]);
    let ExprKind::Call { args, .. } = parsed.ast.expr(value).kind else {
        panic!("expected a format call");
    };
    assert_eq!(parsed.ast.expr_list(args).len(), 1);
}
