use super::*;
use crate::ast::{LiteralKind, TypeBody};
use crate::{FileId, StringInterner};
use pretty_assertions::assert_eq;

fn span(start: u32, end: u32) -> Span {
    Span::new(FileId::from_raw(1), start, end)
}

#[test]
fn test_ids_are_one_based_and_stable() {
    let interner = StringInterner::new();
    let mut arena = AstArena::new();
    let one = interner.intern("1");
    let a = arena.new_expr(
        ExprKind::Literal {
            kind: LiteralKind::Int,
            value: one,
        },
        span(0, 1),
    );
    let b = arena.new_expr(ExprKind::Group(a), span(0, 3));
    assert_eq!(a.raw(), 1);
    assert_eq!(b.raw(), 2);
    assert_eq!(arena.expr(b).kind, ExprKind::Group(a));
    assert_eq!(arena.expr(a).span, span(0, 1));
    assert_eq!(arena.get_expr(ExprId::NONE), None);
}

#[test]
fn test_bulk_lists_are_contiguous() {
    let interner = StringInterner::new();
    let mut arena = AstArena::new();
    let x = arena.new_expr(ExprKind::Ident(interner.intern("x")), span(0, 1));
    let y = arena.new_expr(ExprKind::Ident(interner.intern("y")), span(2, 3));
    let first = arena.alloc_exprs([x, y]);
    let second = arena.alloc_exprs([y]);
    let empty = arena.alloc_exprs([]);
    assert_eq!(first, ExprRange::new(0, 2));
    assert_eq!(second, ExprRange::new(2, 1));
    assert!(empty.is_empty());
    assert_eq!(arena.expr_list(first), &[x, y]);
    assert_eq!(arena.expr_list(second), &[y]);
    assert_eq!(arena.expr_list(empty), &[] as &[ExprId]);
}

#[test]
fn test_item_downcasts() {
    let interner = StringInterner::new();
    let mut arena = AstArena::new();
    let int = arena.new_simple_path_type(interner.intern("int"), span(9, 12));
    let id = arena.new_item(
        ItemKind::Type(TypeItem {
            name: interner.intern("Id"),
            name_span: span(5, 7),
            type_params: TypeParamRange::EMPTY,
            body: TypeBody::Alias(int),
        }),
        span(0, 13),
        span(0, 4),
        Visibility::Private,
        AttrRange::EMPTY,
    );
    assert!(arena.type_item(id).is_some());
    assert!(arena.fn_item(id).is_none());
    assert!(arena.let_item(id).is_none());
    let segments = match arena.ty(int).kind {
        TypeKind::Path(segments) => arena.path_segments(segments),
        other => panic!("expected path type, got {other:?}"),
    };
    assert_eq!(segments.len(), 1);
    assert_eq!(interner.must_lookup(segments[0].name), "int");
}
