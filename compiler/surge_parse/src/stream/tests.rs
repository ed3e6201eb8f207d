#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use surge_ir::{FileSet, Span, TokenKind};
use surge_lexer::LexErrorKind;

use super::TokenStream;

fn files(src: &str) -> FileSet {
    let mut files = FileSet::new();
    files.add_virtual("stream.sg", src).unwrap();
    files
}

fn drain(stream: &mut TokenStream<'_>) -> Vec<TokenKind> {
    let mut kinds = Vec::new();
    loop {
        let token = stream.next();
        if token.kind == TokenKind::Eof {
            return kinds;
        }
        kinds.push(token.kind);
    }
}

#[test]
fn peek_does_not_consume() {
    let files = files("let x");
    let source = files.iter().next().unwrap();
    let mut stream = TokenStream::new(source);

    assert_eq!(stream.peek_kind(), TokenKind::Let);
    assert_eq!(stream.peek_nth(1).kind, TokenKind::Ident);
    assert_eq!(stream.position(), 0);

    assert_eq!(stream.next().kind, TokenKind::Let);
    assert_eq!(stream.position(), 1);
    assert_eq!(stream.last_span(), Span::new(source.id(), 0, 3));
}

#[test]
fn eof_is_sticky() {
    let files = files("x");
    let source = files.iter().next().unwrap();
    let mut stream = TokenStream::new(source);

    stream.next();
    let before = stream.position();
    assert_eq!(stream.next().kind, TokenKind::Eof);
    assert_eq!(stream.next().kind, TokenKind::Eof);
    assert_eq!(stream.peek_kind(), TokenKind::Eof);
    assert_eq!(stream.position(), before);
}

#[test]
fn eat_gt_splits_compound_tokens() {
    let files = files(">> >= >>=");
    let source = files.iter().next().unwrap();
    let id = source.id();
    let mut stream = TokenStream::new(source);

    assert_eq!(stream.eat_gt(), Some(Span::new(id, 0, 1)));
    assert_eq!(stream.peek_kind(), TokenKind::Gt);
    assert_eq!(stream.peek().span, Span::new(id, 1, 2));
    assert_eq!(stream.eat_gt(), Some(Span::new(id, 1, 2)));

    assert_eq!(stream.eat_gt(), Some(Span::new(id, 3, 4)));
    assert_eq!(stream.peek_kind(), TokenKind::Eq);
    stream.next();

    assert_eq!(stream.eat_gt(), Some(Span::new(id, 6, 7)));
    assert_eq!(stream.peek_kind(), TokenKind::GtEq);
    assert_eq!(stream.peek().text, ">=");
}

#[test]
fn eat_gt_rejects_other_tokens() {
    let files = files("<");
    let mut stream = TokenStream::new(files.iter().next().unwrap());
    assert_eq!(stream.eat_gt(), None);
    assert_eq!(stream.position(), 0);
}

#[test]
fn invalid_tokens_are_hidden_and_queued() {
    let files = files("a $ b");
    let mut stream = TokenStream::new(files.iter().next().unwrap());

    assert_eq!(drain(&mut stream), vec![TokenKind::Ident, TokenKind::Ident]);
    let errors = stream.take_lex_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LexErrorKind::InvalidCharacter);
    assert!(stream.take_lex_errors().is_empty());
}

#[test]
fn set_range_restricts_lexing() {
    let files = files("let value = 42;");
    let source = files.iter().next().unwrap();
    let mut stream = TokenStream::new(source);
    stream.peek();

    stream.set_range(4, 9);
    assert_eq!(stream.last_span(), Span::new(source.id(), 4, 4));
    let token = stream.next();
    assert_eq!(token.kind, TokenKind::Ident);
    assert_eq!(token.text, "value");
    assert_eq!(stream.next().kind, TokenKind::Eof);
}

#[test]
fn absorb_errors_moves_sub_stream_errors() {
    let files = files("$ x");
    let source = files.iter().next().unwrap();
    let mut outer = TokenStream::new(source);
    let mut inner = TokenStream::new(source);
    drain(&mut inner);

    outer.absorb_errors(&mut inner);
    assert_eq!(outer.take_lex_errors().len(), 1);
    assert!(inner.take_lex_errors().is_empty());
}

#[test]
fn empty_span_is_at_file_start() {
    let files = files("abc");
    let source = files.iter().next().unwrap();
    let stream = TokenStream::new(source);
    assert_eq!(stream.empty_span(), Span::new(source.id(), 0, 0));
}
