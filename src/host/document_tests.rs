//! Tests for NoteBuffer and position handling

use super::*;

#[test]
fn test_new_splits_lines() {
    let buf = NoteBuffer::new("a\nb\nc");
    assert_eq!(buf.line_count(), 3);
    assert_eq!(buf.line(1), Some("b"));
    assert_eq!(buf.line(3), None);
}

#[test]
fn test_empty_text_has_one_empty_line() {
    let buf = NoteBuffer::new("");
    assert_eq!(buf.line_count(), 1);
    assert_eq!(buf.line(0), Some(""));
}

#[test]
fn test_text_round_trips() {
    let text = "---\ntags: a\n---\n\nbody\n";
    assert_eq!(NoteBuffer::new(text).text(), text);
}

#[test]
fn test_byte_at_multibyte() {
    assert_eq!(byte_at("café x", 3), 3);
    assert_eq!(byte_at("café x", 4), 5); // 'é' is two bytes
    assert_eq!(byte_at("café x", 99), 7);
}

mod replace_range_tests {
    use super::*;

    #[test]
    fn test_replace_within_line() {
        let mut buf = NoteBuffer::new("tags: wo\n---");
        buf.replace_range(Position::new(0, 6), Position::new(0, 8), "work, ");
        assert_eq!(buf.text(), "tags: work, \n---");
    }

    #[test]
    fn test_replacement_with_newline_splits_line() {
        let mut buf = NoteBuffer::new("tags:\n  - ho");
        buf.replace_range(Position::new(1, 4), Position::new(1, 6), "home\n  - ");
        assert_eq!(buf.text(), "tags:\n  - home\n  - ");
    }

    #[test]
    fn test_replace_across_lines() {
        let mut buf = NoteBuffer::new("abc\ndef");
        buf.replace_range(Position::new(0, 2), Position::new(1, 1), "X");
        assert_eq!(buf.text(), "abXef");
    }

    #[test]
    fn test_out_of_range_positions_clamp() {
        let mut buf = NoteBuffer::new("ab");
        buf.replace_range(Position::new(5, 5), Position::new(9, 9), "!");
        assert_eq!(buf.text(), "ab!");
    }

    #[test]
    fn test_inverted_range_is_normalized() {
        let mut buf = NoteBuffer::new("abcd");
        buf.replace_range(Position::new(0, 3), Position::new(0, 1), "X");
        assert_eq!(buf.text(), "aXd");
    }

    #[test]
    fn test_multibyte_replacement_boundaries() {
        let mut buf = NoteBuffer::new("tags: café");
        buf.replace_range(Position::new(0, 6), Position::new(0, 10), "café, ");
        assert_eq!(buf.text(), "tags: café, ");
    }
}
