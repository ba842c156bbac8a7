//! Text buffer and cursor model behind every editable control.
//!
//! The cursor is stored as an offset *backward from the end* of the content:
//! `0` is the end, `-len` is the start. Every edit computes its split point
//! as `len + cursor_offset`, so an insertion leaves the offset untouched and
//! the cursor ends up directly after the inserted character.
//!
//! Lengths, offsets and split points all count `char`s, not bytes.

/// Editable text with an end-relative cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    /// Current text.
    content: String,
    /// Cursor offset from the end, always in `[-len, 0]`.
    cursor_offset: isize,
}

impl TextBuffer {
    /// An empty buffer with the cursor at the end.
    pub const fn new() -> Self {
        Self {
            content: String::new(),
            cursor_offset: 0,
        }
    }

    /// A buffer holding `value`, cursor at the end.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            content: value.into(),
            cursor_offset: 0,
        }
    }

    /// The current text.
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Replace the text and move the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.content = value.into();
        self.cursor_offset = 0;
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Whether the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Cursor offset from the end (`0` = end, `-len` = start).
    pub const fn cursor_offset(&self) -> isize {
        self.cursor_offset
    }

    /// Char index dividing the text before and after the cursor.
    pub fn split_point(&self) -> usize {
        let split = self.len().checked_add_signed(self.cursor_offset);
        debug_assert!(split.is_some(), "cursor offset {} past start", self.cursor_offset);
        split.unwrap_or(0)
    }

    /// Text left of the cursor.
    pub fn before_cursor(&self) -> &str {
        &self.content[..self.byte_index(self.split_point())]
    }

    /// Text from the cursor to the end (including the char under the cursor).
    pub fn after_cursor(&self) -> &str {
        &self.content[self.byte_index(self.split_point())..]
    }

    /// The char under the cursor, `None` when the cursor is at the end.
    pub fn char_at_cursor(&self) -> Option<char> {
        self.after_cursor().chars().next()
    }

    /// Insert `ch` at the cursor.
    ///
    /// The offset from the end is unchanged, so the cursor stays directly
    /// after the inserted char.
    pub fn insert(&mut self, ch: char) {
        let at = self.byte_index(self.split_point());
        self.content.insert(at, ch);
        self.check_invariant();
    }

    /// Insert every char of `text` at the cursor.
    pub fn insert_str(&mut self, text: &str) {
        let at = self.byte_index(self.split_point());
        self.content.insert_str(at, text);
        self.check_invariant();
    }

    /// Remove the char left of the cursor.
    ///
    /// Returns `false` (and does nothing) when the cursor is at the start.
    pub fn backspace(&mut self) -> bool {
        let split = self.split_point();
        if split == 0 {
            return false;
        }
        let at = self.byte_index(split - 1);
        self.content.remove(at);
        self.check_invariant();
        true
    }

    /// Remove the char under the cursor.
    ///
    /// Returns `false` when the cursor is at the end.
    pub fn delete(&mut self) -> bool {
        if self.cursor_offset == 0 {
            return false;
        }
        let at = self.byte_index(self.split_point());
        self.content.remove(at);
        self.cursor_offset += 1;
        self.check_invariant();
        true
    }

    /// Move the cursor one char left, saturating at the start.
    pub fn move_left(&mut self) -> bool {
        if self.split_point() == 0 {
            return false;
        }
        self.cursor_offset -= 1;
        true
    }

    /// Move the cursor one char right, saturating at the end.
    pub fn move_right(&mut self) -> bool {
        if self.cursor_offset >= 0 {
            return false;
        }
        self.cursor_offset += 1;
        true
    }

    /// Move the cursor to the start of the text.
    pub fn move_home(&mut self) -> bool {
        let start = -isize::try_from(self.len()).unwrap_or(isize::MAX);
        let moved = self.cursor_offset != start;
        self.cursor_offset = start;
        moved
    }

    /// Move the cursor to the end of the text.
    pub fn move_end(&mut self) -> bool {
        let moved = self.cursor_offset != 0;
        self.cursor_offset = 0;
        moved
    }

    /// Delete everything left of the cursor (Ctrl+U).
    ///
    /// The cursor ends up at the start of what remains.
    pub fn clear_before_cursor(&mut self) -> bool {
        let at = self.byte_index(self.split_point());
        if at == 0 {
            return false;
        }
        self.content.drain(..at);
        self.check_invariant();
        true
    }

    /// Empty the buffer and reset the cursor.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor_offset = 0;
    }

    /// Byte index of char index `idx` (the content length when `idx == len`).
    fn byte_index(&self, idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(idx)
            .map_or(self.content.len(), |(byte, _)| byte)
    }

    fn check_invariant(&self) {
        debug_assert!(
            self.cursor_offset <= 0
                && self.cursor_offset.unsigned_abs() <= self.len(),
            "cursor offset {} outside [-{}, 0]",
            self.cursor_offset,
            self.len()
        );
    }
}

impl From<&str> for TextBuffer {
    fn from(value: &str) -> Self {
        Self::with_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_at(value: &str, offset: isize) -> TextBuffer {
        let mut buf = TextBuffer::with_value(value);
        for _ in 0..offset.unsigned_abs() {
            buf.move_left();
        }
        assert_eq!(buf.cursor_offset(), offset);
        buf
    }

    #[test]
    fn test_insert_appends_at_end() {
        let mut buf = TextBuffer::new();
        buf.insert('H');
        buf.insert('i');
        assert_eq!(buf.value(), "Hi");
        assert_eq!(buf.cursor_offset(), 0);
    }

    #[test]
    fn test_insert_prepends_at_start() {
        let mut buf = buffer_at("bc", -2);
        buf.insert('a');
        assert_eq!(buf.value(), "abc");
        assert_eq!(buf.cursor_offset(), -2);
        assert_eq!(buf.split_point(), 1);
    }

    #[test]
    fn test_insert_mid_keeps_offset() {
        let mut buf = TextBuffer::with_value("hello");
        assert!(buf.backspace());
        assert!(buf.backspace());
        assert_eq!(buf.value(), "hel");

        buf.move_left();
        buf.move_left();
        assert_eq!(buf.cursor_offset(), -2);

        buf.insert('X');
        assert_eq!(buf.value(), "hXel");
        assert_eq!(buf.cursor_offset(), -2);
        assert_eq!(buf.before_cursor(), "hX");
    }

    #[test]
    fn test_backspace_removes_before_cursor() {
        let mut buf = buffer_at("abcd", -1);
        assert!(buf.backspace());
        assert_eq!(buf.value(), "abd");
        assert_eq!(buf.char_at_cursor(), Some('d'));
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut buf = buffer_at("abc", -3);
        assert!(!buf.backspace());
        assert_eq!(buf.value(), "abc");

        let mut empty = TextBuffer::new();
        assert!(!empty.backspace());
        assert_eq!(empty.cursor_offset(), 0);
    }

    #[test]
    fn test_delete_removes_under_cursor() {
        let mut buf = buffer_at("abcd", -2);
        assert!(buf.delete());
        assert_eq!(buf.value(), "abd");
        assert_eq!(buf.cursor_offset(), -1);
        assert_eq!(buf.char_at_cursor(), Some('d'));

        let mut at_end = TextBuffer::with_value("ab");
        assert!(!at_end.delete());
    }

    #[test]
    fn test_movement_saturates() {
        let mut buf = TextBuffer::with_value("ab");
        assert!(!buf.move_right());
        assert!(buf.move_left());
        assert!(buf.move_left());
        assert!(!buf.move_left());
        assert_eq!(buf.cursor_offset(), -2);
        assert!(buf.move_right());
        assert_eq!(buf.cursor_offset(), -1);

        let mut empty = TextBuffer::new();
        assert!(!empty.move_left());
        assert!(!empty.move_right());
    }

    #[test]
    fn test_home_end() {
        let mut buf = TextBuffer::with_value("abc");
        assert!(buf.move_home());
        assert_eq!(buf.split_point(), 0);
        assert!(!buf.move_home());
        assert!(buf.move_end());
        assert_eq!(buf.cursor_offset(), 0);
    }

    #[test]
    fn test_clear_before_cursor() {
        let mut buf = buffer_at("hello world", -5);
        assert!(buf.clear_before_cursor());
        assert_eq!(buf.value(), "world");
        assert_eq!(buf.split_point(), 0);
        assert_eq!(buf.cursor_offset(), -5);

        assert!(!buf.clear_before_cursor());
    }

    #[test]
    fn test_clear_before_cursor_at_end_empties() {
        let mut buf = TextBuffer::with_value("abc");
        assert!(buf.clear_before_cursor());
        assert!(buf.is_empty());
        assert_eq!(buf.cursor_offset(), 0);
    }

    #[test]
    fn test_clear_resets() {
        let mut buf = buffer_at("abc", -1);
        buf.clear();
        assert_eq!(buf.value(), "");
        assert_eq!(buf.cursor_offset(), 0);
    }

    #[test]
    fn test_set_value_moves_cursor_to_end() {
        let mut buf = buffer_at("abcdef", -6);
        buf.set_value("xy");
        assert_eq!(buf.cursor_offset(), 0);
        assert_eq!(buf.split_point(), 2);
    }

    #[test]
    fn test_multibyte_chars_split_on_boundaries() {
        let mut buf = buffer_at("héllo", -4);
        assert_eq!(buf.before_cursor(), "h");
        assert_eq!(buf.char_at_cursor(), Some('é'));
        buf.insert('ü');
        assert_eq!(buf.value(), "hüéllo");
        assert!(buf.delete());
        assert_eq!(buf.value(), "hüllo");
        assert!(buf.backspace());
        assert_eq!(buf.value(), "hllo");
    }

    #[test]
    fn test_insert_str() {
        let mut buf = buffer_at("ad", -1);
        buf.insert_str("bc");
        assert_eq!(buf.value(), "abcd");
        assert_eq!(buf.cursor_offset(), -1);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_buffer() -> impl Strategy<Value = TextBuffer> {
            ("[a-zé ]{0,24}", 0usize..32).prop_map(|(text, left)| {
                let mut buf = TextBuffer::with_value(text);
                for _ in 0..left {
                    buf.move_left();
                }
                buf
            })
        }

        proptest! {
            #[test]
            fn cursor_stays_in_range(mut buf in arb_buffer(), moves in proptest::collection::vec(any::<bool>(), 0..64)) {
                for left in moves {
                    if left { buf.move_left(); } else { buf.move_right(); }
                    let offset = buf.cursor_offset();
                    prop_assert!(offset <= 0);
                    prop_assert!(offset.unsigned_abs() <= buf.len());
                }
            }

            #[test]
            fn insert_then_backspace_restores(mut buf in arb_buffer(), ch in proptest::char::range('!', '~')) {
                let before = buf.clone();
                buf.insert(ch);
                prop_assert!(buf.backspace());
                prop_assert_eq!(buf, before);
            }

            #[test]
            fn clear_before_cursor_keeps_tail(mut buf in arb_buffer()) {
                let tail = buf.after_cursor().to_string();
                buf.clear_before_cursor();
                prop_assert_eq!(buf.value(), tail.as_str());
                prop_assert_eq!(buf.split_point(), 0);
            }
        }
    }
}
