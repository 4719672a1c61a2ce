use super::*;

#[test]
fn test_line_offset_table_single_line() {
    let source = "hello world";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_count(), 1);
    assert_eq!(table.line_from_offset(0), 1);
    assert_eq!(table.line_from_offset(10), 1);
}

#[test]
fn test_line_offset_table_multiple_lines() {
    let source = "line1\nline2\nline3";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_count(), 3);
    assert_eq!(table.line_from_offset(5), 1); // '\n' after line1
    assert_eq!(table.line_from_offset(6), 2); // 'l' of line2
    assert_eq!(table.line_from_offset(12), 3); // 'l' of line3
}

#[test]
fn test_offset_to_line_col() {
    let source = "abc\ndefgh\nij";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
    assert_eq!(table.offset_to_line_col(source, 2), (1, 3));
    assert_eq!(table.offset_to_line_col(source, 4), (2, 1));
    assert_eq!(table.offset_to_line_col(source, 7), (2, 4));
    assert_eq!(table.offset_to_line_col(source, 10), (3, 1));
}

#[test]
fn test_offset_to_line_col_empty() {
    let source = "";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
}

#[test]
fn test_offset_to_line_col_unicode() {
    let source = "αβγ\nδε";
    let table = LineOffsetTable::build(source);
    // Greek letters are 2 bytes each
    assert_eq!(table.offset_to_line_col(source, 2), (1, 2));
    assert_eq!(table.offset_to_line_col(source, 7), (2, 1));
    assert_eq!(table.offset_to_line_col(source, 9), (2, 2));
}

#[test]
fn test_offset_past_end_is_clamped() {
    let source = "ab";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 99), (1, 3));
}

#[test]
fn test_span_start() {
    let source = "xquery\n  map {}";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.span_start(source, Span::new(9, 12)), (2, 3));
}

#[test]
fn test_line_start_offset() {
    let table = LineOffsetTable::build("a\nb\nc");
    assert_eq!(table.line_start_offset(0), None);
    assert_eq!(table.line_start_offset(1), Some(0));
    assert_eq!(table.line_start_offset(3), Some(4));
    assert_eq!(table.line_start_offset(4), None);
}

#[test]
fn test_line_text() {
    let source = "first\r\nsecond\nthird";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), Some("first"));
    assert_eq!(table.line_text(source, 2), Some("second"));
    assert_eq!(table.line_text(source, 3), Some("third"));
    assert_eq!(table.line_text(source, 4), None);
}
