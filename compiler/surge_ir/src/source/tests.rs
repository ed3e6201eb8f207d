use super::*;
use pretty_assertions::assert_eq;

fn one_file(text: &str) -> (FileSet, FileId) {
    let mut files = FileSet::new();
    let id = files
        .add_virtual("main.sg", text)
        .unwrap_or_else(|e| panic!("{e}"));
    (files, id)
}

#[test]
fn test_ids_start_at_one() {
    let mut files = FileSet::new();
    let a = files.add_virtual("a.sg", "").unwrap_or_else(|e| panic!("{e}"));
    let b = files.add_virtual("b.sg", "x").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(a.raw(), 1);
    assert_eq!(b.raw(), 2);
    assert!(files.get(FileId::NONE).is_none());
    assert_eq!(files.get(b).map(SourceFile::path), Some("b.sg"));
}

#[test]
fn test_slice_resolves_span() {
    let (files, id) = one_file("let x = 1;");
    assert_eq!(files.slice(Span::new(id, 4, 5)), Some("x"));
    assert_eq!(files.slice(Span::new(id, 4, 50)), None);
    assert_eq!(files.slice(Span::new(FileId::from_raw(9), 0, 1)), None);
}

#[test]
fn test_line_col() {
    let (files, id) = one_file("ab\ncd\n\nef");
    let file = files.get(id).unwrap_or_else(|| panic!("file missing"));
    assert_eq!(file.line_col(0), (1, 1));
    assert_eq!(file.line_col(1), (1, 2));
    assert_eq!(file.line_col(3), (2, 1));
    assert_eq!(file.line_col(6), (3, 1));
    assert_eq!(file.line_col(8), (4, 2));
}

#[test]
fn test_line_text() {
    let (files, id) = one_file("first\r\nsecond\nthird");
    let file = files.get(id).unwrap_or_else(|| panic!("file missing"));
    assert_eq!(file.line_text(1), Some("first"));
    assert_eq!(file.line_text(2), Some("second"));
    assert_eq!(file.line_text(3), Some("third"));
    assert_eq!(file.line_text(4), None);
    assert_eq!(file.line_text(0), None);
}

#[test]
fn test_full_span_and_bytes_from() {
    let (files, id) = one_file("abc");
    let file = files.get(id).unwrap_or_else(|| panic!("file missing"));
    assert_eq!(file.full_span(), Span::new(id, 0, 3));
    assert_eq!(file.bytes_from(1), b"bc");
    assert_eq!(file.bytes_from(10), b"");
}
