use super::Cursor;

#[test]
fn reads_zero_past_window() {
    let src = b"abc";
    let mut cursor = Cursor::new(src, 1, 2);
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.peek(1), 0);
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
    cursor.advance_n(10);
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn window_is_clamped_to_buffer() {
    let cursor = Cursor::new(b"ab", 5, 9);
    assert_eq!(cursor.pos(), 2);
    assert!(cursor.is_eof());
}

#[test]
fn interior_nul_is_not_eof() {
    let cursor = Cursor::new(b"a\0b", 1, 3);
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

#[test]
fn line_scan_stops_before_crlf() {
    let src = b"// hi\r\nx";
    let mut cursor = Cursor::new(src, 0, 8);
    cursor.eat_until_newline();
    assert_eq!(cursor.pos(), 5);
}

#[test]
fn line_scan_runs_to_end_without_newline() {
    let mut cursor = Cursor::new(b"// tail", 0, 7);
    cursor.eat_until_newline();
    assert!(cursor.is_eof());
}

#[test]
fn block_comment_body() {
    let src = b"/* a */ b";
    let mut cursor = Cursor::new(src, 2, 9);
    assert!(cursor.eat_block_comment_body());
    assert_eq!(cursor.pos(), 7);

    let mut open = Cursor::new(b"/* never", 2, 8);
    assert!(!open.eat_block_comment_body());
    assert!(open.is_eof());
}

#[test]
fn string_delims() {
    let src = br#"ab\"c" x"#;
    let mut cursor = Cursor::new(src, 0, 8);
    assert_eq!(cursor.skip_to_string_delim(), Some(b'\\'));
    cursor.advance_n(2);
    assert_eq!(cursor.skip_to_string_delim(), Some(b'"'));
    assert_eq!(cursor.pos(), 5);
}

#[test]
fn fstring_delims_include_braces() {
    let src = b"a {b} \"";
    let mut cursor = Cursor::new(src, 0, 7);
    assert_eq!(cursor.skip_to_fstring_delim(), Some(b'{'));
    cursor.advance();
    assert_eq!(cursor.skip_to_fstring_delim(), Some(b'}'));
    cursor.advance();
    assert_eq!(cursor.skip_to_fstring_delim(), Some(b'"'));
}

#[test]
fn advance_char_skips_multibyte() {
    let src = "é!".as_bytes();
    let mut cursor = Cursor::new(src, 0, 3);
    cursor.advance_char();
    assert_eq!(cursor.current(), b'!');
}
