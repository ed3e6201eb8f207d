use pretty_assertions::assert_eq;
use proptest::prelude::*;
use surge_ir::{FileSet, SourceFile, TokenKind, TriviaKind};

use crate::{lex_all, LexErrorKind, Lexer};

fn file(src: &str) -> FileSet {
    let mut files = FileSet::new();
    files
        .add_virtual("test.sg", src)
        .unwrap_or_else(|e| panic!("add_virtual: {e}"));
    files
}

fn first(files: &FileSet) -> &SourceFile {
    files.iter().next().unwrap_or_else(|| panic!("no file"))
}

fn kinds(src: &str) -> Vec<TokenKind> {
    let files = file(src);
    let (tokens, _) = lex_all(first(&files));
    tokens.iter().map(|t| t.kind).collect()
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(
        kinds("fn main let mut x _ _y"),
        vec![
            TokenKind::Fn,
            TokenKind::Ident,
            TokenKind::Let,
            TokenKind::Mut,
            TokenKind::Ident,
            TokenKind::Underscore,
            TokenKind::Ident,
        ]
    );
}

#[test]
fn longest_match_punctuation() {
    assert_eq!(
        kinds("... ..= .. :: -> => >>= >> >= ?? <<="),
        vec![
            TokenKind::DotDotDot,
            TokenKind::DotDotEq,
            TokenKind::DotDot,
            TokenKind::ColonColon,
            TokenKind::Arrow,
            TokenKind::FatArrow,
            TokenKind::ShrEq,
            TokenKind::Shr,
            TokenKind::GtEq,
            TokenKind::QuestionQuestion,
            TokenKind::ShlEq,
        ]
    );
}

#[test]
fn numeric_literals() {
    assert_eq!(
        kinds("1 1_000 2u 3u8 4.5 6e3 7f32 0xff 0b1010u 1..2"),
        vec![
            TokenKind::IntLit,
            TokenKind::IntLit,
            TokenKind::UintLit,
            TokenKind::UintLit,
            TokenKind::FloatLit,
            TokenKind::FloatLit,
            TokenKind::FloatLit,
            TokenKind::IntLit,
            TokenKind::UintLit,
            TokenKind::IntLit,
            TokenKind::DotDot,
            TokenKind::IntLit,
        ]
    );
}

#[test]
fn member_access_on_integer_is_not_a_float() {
    assert_eq!(
        kinds("1.len"),
        vec![TokenKind::IntLit, TokenKind::Dot, TokenKind::Ident]
    );
}

#[test]
fn strings_with_escapes() {
    let files = file(r#""a\"b" "c""#);
    let (tokens, errors) = lex_all(first(&files));
    assert!(errors.is_empty());
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::StringLit);
    assert_eq!(tokens[0].text, r#""a\"b""#);
}

#[test]
fn fstring_with_nested_braces_and_strings() {
    let src = r#"f"x={ {a: 1}.a } y={ "}" } {{lit}}" z"#;
    let files = file(src);
    let (tokens, errors) = lex_all(first(&files));
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(tokens[0].kind, TokenKind::FStringLit);
    assert_eq!(tokens[1].text, "z");
}

#[test]
fn unterminated_string_is_invalid() {
    let files = file("let s = \"open");
    let (tokens, errors) = lex_all(first(&files));
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Invalid));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LexErrorKind::UnterminatedString);
    assert_eq!(errors[0].span.start, 8);
}

#[test]
fn unterminated_comment_is_reported() {
    let files = file("x /* never");
    let (tokens, errors) = lex_all(first(&files));
    assert_eq!(tokens.len(), 1);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LexErrorKind::UnterminatedComment);
}

#[test]
fn invalid_characters() {
    let files = file("a $ é b");
    let (tokens, errors) = lex_all(first(&files));
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident,
            TokenKind::Invalid,
            TokenKind::Invalid,
            TokenKind::Ident,
        ]
    );
    assert_eq!(tokens[2].text, "é");
    assert!(errors
        .iter()
        .all(|e| e.kind == LexErrorKind::InvalidCharacter));
}

#[test]
fn trivia_attaches_to_following_token() {
    let files = file("/// Doc:\n// plain\n/* block */ fn");
    let (tokens, _) = lex_all(first(&files));
    assert_eq!(tokens.len(), 1);
    let trivia: Vec<_> = tokens[0].leading.iter().map(|t| t.kind).collect();
    assert_eq!(
        trivia,
        vec![
            TriviaKind::DocLine,
            TriviaKind::Newline,
            TriviaKind::LineComment,
            TriviaKind::Newline,
            TriviaKind::BlockComment,
            TriviaKind::Whitespace,
        ]
    );
    assert_eq!(tokens[0].leading[0].doc_text(), Some("Doc:"));
    assert!(tokens[0].has_leading_newline());
}

#[test]
fn four_slashes_is_a_plain_comment() {
    let files = file("//// not doc\nx");
    let (tokens, _) = lex_all(first(&files));
    assert_eq!(tokens[0].leading[0].kind, TriviaKind::LineComment);
}

#[test]
fn crlf_is_one_newline() {
    let files = file("a\r\nb");
    let (tokens, _) = lex_all(first(&files));
    assert_eq!(tokens[1].leading.len(), 1);
    assert_eq!(tokens[1].leading[0].kind, TriviaKind::Newline);
    assert_eq!(tokens[1].leading[0].text, "\r\n");
}

#[test]
fn range_restricted_lexing() {
    let files = file("skip { a + b } skip");
    let src = first(&files);
    let mut lexer = Lexer::with_range(src, 7, 12);
    let a = lexer.next_token();
    assert_eq!((a.kind, a.span.start), (TokenKind::Ident, 7));
    assert_eq!(lexer.next_token().kind, TokenKind::Plus);
    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    let eof = lexer.next_token();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.span.start, 12);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);

    lexer.set_range(0, 4);
    assert_eq!(lexer.next_token().text, "skip");
}

#[test]
fn spans_are_file_scoped() {
    let files = file("fn");
    let src = first(&files);
    let token = Lexer::new(src).next_token();
    assert_eq!(token.span.file, src.id());
    assert_eq!(token.span.to_range(), 0..2);
}

proptest! {
    #[test]
    fn tokens_and_trivia_tile_the_input(src in "\\PC{0,64}") {
        let files = file(&src);
        let source = first(&files);
        let mut lexer = Lexer::new(source);
        let mut pos = 0u32;
        loop {
            let token = lexer.next_token();
            for trivia in &token.leading {
                prop_assert_eq!(trivia.span.start, pos);
                prop_assert!(trivia.span.end > trivia.span.start);
                pos = trivia.span.end;
            }
            prop_assert_eq!(token.span.start, pos);
            pos = token.span.end;
            if token.kind == TokenKind::Eof {
                break;
            }
            prop_assert!(token.span.end > token.span.start);
        }
        prop_assert_eq!(pos, source.len());
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        let src = String::from_utf8_lossy(&bytes).into_owned();
        let files = file(&src);
        let _ = lex_all(first(&files));
    }
}
