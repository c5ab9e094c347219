use super::*;

#[test]
fn test_text_buffer_basic() {
    let mut buffer = TextBuffer::from_text("hello\nworld");

    assert_eq!(buffer.len_lines(), 2);
    assert_eq!(buffer.cursor(), (0, 0));

    buffer.set_cursor(1, 2);
    assert_eq!(buffer.cursor(), (1, 2));
}

#[test]
fn test_set_cursor_clamps() {
    let mut buffer = TextBuffer::from_text("hi\nthere");
    buffer.set_cursor(9, 9);
    assert_eq!(buffer.cursor(), (1, 5));
}

#[test]
fn test_pos_to_char() {
    let buffer = TextBuffer::from_text("hello\nworld");

    assert_eq!(buffer.pos_to_char((0, 0)), 0);
    assert_eq!(buffer.pos_to_char((1, 0)), 6);
}

#[test]
fn test_insert_char_and_newline() {
    let mut buffer = TextBuffer::new();
    buffer.insert_char('a');
    buffer.insert_char('\n');
    buffer.insert_char('b');

    assert_eq!(buffer.text(), "a\nb");
    assert_eq!(buffer.cursor(), (1, 1));
}

#[test]
fn test_insert_str_moves_cursor_past_text() {
    let mut buffer = TextBuffer::from_text("end");
    buffer.insert_str("one\ntwo ");

    assert_eq!(buffer.text(), "one\ntwo end");
    assert_eq!(buffer.cursor(), (1, 4));
}

#[test]
fn test_delete_backward_joins_lines() {
    let mut buffer = TextBuffer::from_text("ab\ncd");
    buffer.set_cursor(1, 0);

    assert!(buffer.delete_backward());
    assert_eq!(buffer.text(), "abcd");
    assert_eq!(buffer.cursor(), (0, 2));

    buffer.set_cursor(0, 0);
    assert!(!buffer.delete_backward());
}

#[test]
fn test_delete_forward_keeps_cursor() {
    let mut buffer = TextBuffer::from_text("ab\ncd");
    buffer.set_cursor(0, 2);

    assert!(buffer.delete_forward());
    assert_eq!(buffer.text(), "abcd");
    assert_eq!(buffer.cursor(), (0, 2));

    buffer.set_cursor(0, 4);
    assert!(!buffer.delete_forward());
}

#[test]
fn test_graphemes_count_as_one_column() {
    let mut buffer = TextBuffer::from_text("e\u{301}x");
    assert_eq!(buffer.line_grapheme_len(0), 2);

    buffer.set_cursor(0, 1);
    assert!(buffer.delete_backward());
    assert_eq!(buffer.text(), "x");
}

#[test]
fn test_cursor_movement_wraps_lines() {
    let mut buffer = TextBuffer::from_text("abc\nde");
    buffer.move_line_end();
    assert_eq!(buffer.cursor(), (0, 3));
    buffer.move_right();
    assert_eq!(buffer.cursor(), (1, 0));
    buffer.move_left();
    assert_eq!(buffer.cursor(), (0, 3));
    buffer.move_down();
    assert_eq!(buffer.cursor(), (1, 2));
    buffer.move_up();
    assert_eq!(buffer.cursor(), (0, 2));
    buffer.move_line_start();
    assert_eq!(buffer.cursor(), (0, 0));
}

#[test]
fn test_line_strips_newline() {
    let buffer = TextBuffer::from_text("one\r\ntwo\n");
    assert_eq!(buffer.line(0).as_deref(), Some("one"));
    assert_eq!(buffer.line(1).as_deref(), Some("two"));
    assert_eq!(buffer.line(2).as_deref(), Some(""));
    assert_eq!(buffer.line(3), None);
}
