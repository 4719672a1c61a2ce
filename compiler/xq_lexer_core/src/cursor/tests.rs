use super::*;

// === Basic Navigation ===

#[test]
fn current_returns_first_char() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), 'a');
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.token_start(), 0);
}

#[test]
fn advance_moves_one_code_point() {
    let mut cursor = Cursor::new("abc");
    cursor.advance();
    assert_eq!(cursor.current(), 'b');
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.text(), "a");
}

#[test]
fn advance_steps_over_multibyte_chars() {
    let mut cursor = Cursor::new("é𝔸x");
    cursor.advance();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), '𝔸');
    cursor.advance();
    assert_eq!(cursor.pos(), 6);
    assert_eq!(cursor.current(), 'x');
    assert_eq!(cursor.text(), "é𝔸");
}

#[test]
fn advance_through_entire_source() {
    let mut cursor = Cursor::new("hi");
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), '\0');
}

// === End of Region ===

#[test]
fn advance_at_end_is_noop() {
    let mut cursor = Cursor::new("a");
    cursor.advance();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.buffer_end(), 1);
}

#[test]
fn empty_buffer_is_eof() {
    let mut cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), '\0');
    cursor.advance();
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn interior_nul_is_not_eof() {
    let mut cursor = Cursor::new("a\0b");
    cursor.advance();
    assert_eq!(cursor.current(), '\0');
    assert!(!cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.current(), 'b');
}

// === Scan Region ===

#[test]
fn start_restricts_region() {
    let mut cursor = Cursor::new("");
    cursor.start("hello world", 6, 9);
    assert_eq!(cursor.current(), 'w');
    cursor.eat_while(|c| c.is_ascii_alphabetic());
    assert_eq!(cursor.pos(), 9);
    assert_eq!(cursor.text(), "wor");
    assert!(cursor.is_eof());
}

#[test]
fn start_resets_saved_mark() {
    let mut cursor = Cursor::new("abcdef");
    cursor.advance();
    cursor.advance();
    cursor.save();
    cursor.start("abcdef", 4, 6);
    cursor.advance();
    cursor.restore();
    assert_eq!(cursor.pos(), 4);
}

#[test]
fn start_clamps_out_of_range_end() {
    let mut cursor = Cursor::new("");
    cursor.start("abc", 0, 100);
    assert_eq!(cursor.buffer_end(), 3);
}

// === Flush ===

#[test]
fn flush_commits_token_boundary() {
    let mut cursor = Cursor::new("abc");
    cursor.advance();
    cursor.advance();
    cursor.flush();
    assert_eq!(cursor.token_start(), 2);
    assert_eq!(cursor.text(), "");
    cursor.advance();
    assert_eq!(cursor.text(), "c");
}

// === Backtracking ===

#[test]
fn restore_returns_to_saved_position() {
    let mut cursor = Cursor::new("1e+x");
    cursor.advance();
    cursor.save();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.pos(), 3);
    cursor.restore();
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.current(), 'e');
    assert_eq!(cursor.text(), "1");
}

#[test]
fn second_save_overwrites_first() {
    let mut cursor = Cursor::new("abcd");
    cursor.save();
    cursor.advance();
    cursor.advance();
    cursor.save();
    cursor.advance();
    cursor.restore();
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn restore_without_save_returns_to_region_start() {
    let mut cursor = Cursor::new("");
    cursor.start("abcd", 1, 4);
    cursor.advance();
    cursor.advance();
    cursor.restore();
    assert_eq!(cursor.pos(), 1);
}

// === Bulk Scanning ===

#[test]
fn eat_while_stops_at_predicate_failure() {
    let mut cursor = Cursor::new("123abc");
    cursor.eat_while(|c| c.is_ascii_digit());
    assert_eq!(cursor.text(), "123");
    assert_eq!(cursor.current(), 'a');
}

#[test]
fn eat_while_stops_at_end_even_if_predicate_accepts_nul() {
    let mut cursor = Cursor::new("aaa");
    cursor.eat_while(|_| true);
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn skip_to_string_delim_finds_quote() {
    let mut cursor = Cursor::new("hello\" rest");
    let found = cursor.skip_to_string_delim(b'"');
    assert_eq!(found, '"');
    assert_eq!(cursor.text(), "hello");
}

#[test]
fn skip_to_string_delim_finds_ampersand() {
    let mut cursor = Cursor::new("a&amp;'");
    let found = cursor.skip_to_string_delim(b'\'');
    assert_eq!(found, '&');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn skip_to_string_delim_ignores_other_quote() {
    let mut cursor = Cursor::new("it's\"");
    let found = cursor.skip_to_string_delim(b'"');
    assert_eq!(found, '"');
    assert_eq!(cursor.text(), "it's");
}

#[test]
fn skip_to_string_delim_runs_to_end() {
    let mut cursor = Cursor::new("ünterminated");
    let found = cursor.skip_to_string_delim(b'"');
    assert_eq!(found, '\0');
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_string_delim_respects_region_end() {
    let mut cursor = Cursor::new("");
    cursor.start("abc\"def", 0, 2);
    let found = cursor.skip_to_string_delim(b'"');
    assert_eq!(found, '\0');
    assert_eq!(cursor.pos(), 2);
}
