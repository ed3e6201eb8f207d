#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use surge_ir::ast::AstArena;
use surge_ir::{FileSet, StringInterner, TokenKind};

use super::{TokenSet, LIST_SYNC, STMT_START, TOP_LEVEL_SYNC};
use crate::{ParseOptions, Parser};

fn with_parser<R>(src: &str, f: impl FnOnce(&mut Parser<'_>) -> R) -> R {
    let mut files = FileSet::new();
    let id = files.add_virtual("recovery.sg", src).unwrap();
    let interner = StringInterner::new();
    let mut ast = AstArena::new();
    let options = ParseOptions::default();
    let mut parser = Parser::new(files.get(id).unwrap(), &interner, &mut ast, &options);
    f(&mut parser)
}

#[test]
fn token_set_membership() {
    let set = TokenSet::from_kinds(&[TokenKind::Comma, TokenKind::Semicolon]);
    assert!(set.contains(TokenKind::Comma));
    assert!(set.contains(TokenKind::Semicolon));
    assert!(!set.contains(TokenKind::Colon));
    assert!(!TokenSet::EMPTY.contains(TokenKind::Comma));

    let both = set.union(TokenSet::EMPTY.with(TokenKind::Invalid));
    assert!(both.contains(TokenKind::Invalid));
    assert!(both.contains(TokenKind::Comma));
}

#[test]
fn sync_sets_cover_item_heads() {
    for kind in [TokenKind::Fn, TokenKind::Import, TokenKind::Extern, TokenKind::Eof] {
        assert!(TOP_LEVEL_SYNC.contains(kind), "{kind:?}");
    }
    assert!(!TOP_LEVEL_SYNC.contains(TokenKind::Ident));
    assert!(STMT_START.contains(TokenKind::Return));
    assert!(!STMT_START.contains(TokenKind::RBrace));
}

#[test]
fn resync_top_consumes_semicolon() {
    with_parser("1 2 3 ; fn f();", |p| {
        p.resync_top(0);
        assert_eq!(p.peek_kind(), TokenKind::Fn);
    });
}

#[test]
fn resync_top_stops_at_item_keyword() {
    with_parser("x y let z = 1;", |p| {
        p.resync_top(0);
        assert_eq!(p.peek_kind(), TokenKind::Let);
    });
}

#[test]
fn resync_top_forces_progress() {
    with_parser("let x", |p| {
        p.resync_top(p.stream.position());
        assert_eq!(p.peek_kind(), TokenKind::Ident);
    });
}

#[test]
fn resync_statement_skips_nested_groups() {
    with_parser("foo(a; b) bar; let", |p| {
        p.resync_statement();
        assert_eq!(p.peek_kind(), TokenKind::Let);
    });
}

#[test]
fn resync_statement_stops_at_closing_brace() {
    with_parser("a b } c", |p| {
        p.resync_statement();
        assert_eq!(p.peek_kind(), TokenKind::RBrace);
    });
}

#[test]
fn skip_declaration_through_brace_group() {
    with_parser("fn g() { a; { b } } rest", |p| {
        p.skip_declaration();
        assert_eq!(p.peek().text, "rest");
    });
}

#[test]
fn skip_declaration_through_semicolon() {
    with_parser("type T = int; next", |p| {
        p.skip_declaration();
        assert_eq!(p.peek().text, "next");
    });
}

#[test]
fn resync_until_leaves_stop_token() {
    with_parser("a b , c", |p| {
        p.resync_until(LIST_SYNC);
        assert_eq!(p.peek_kind(), TokenKind::Comma);
    });
}
