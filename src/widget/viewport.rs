//! Viewport layout for editable text.
//!
//! Given a [`TextBuffer`] and the drawable area, decide which part of the
//! text is visible, where lines break, and where the block cursor lands. The
//! result is a flat list of placed glyphs relative to the content origin;
//! drawing them is left to the control.
//!
//! Two modes:
//!
//! - **Clipped** (no wrap): a single row. Characters are trimmed one at a time
//!   from whichever side of the cursor is longer until the row fits, so the
//!   cursor is always visible.
//! - **Wrapped**: rows of `width` glyphs; a newline forces a break. When a
//!   height is given and the cursor row falls below it, the rows scroll up so
//!   the cursor row is the last visible one.

use super::text_buffer::TextBuffer;
use crate::draw::printable_glyph;

/// The text around the cursor, split for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorSplit<'a> {
    /// Text left of the cursor.
    pub before: &'a str,
    /// Char under the cursor (`' '` at the end of the text).
    pub cursor: char,
    /// Text right of the cursor glyph.
    pub after: &'a str,
}

impl<'a> CursorSplit<'a> {
    /// Split `buffer` at its cursor.
    pub fn of(buffer: &'a TextBuffer) -> Self {
        let before = buffer.before_cursor();
        let rest = buffer.after_cursor();
        match rest.chars().next() {
            Some(cursor) => Self {
                before,
                cursor,
                after: &rest[cursor.len_utf8()..],
            },
            None => Self {
                before,
                cursor: ' ',
                after: "",
            },
        }
    }

    /// Trim the split until `before + cursor + after` fits in `width` cells.
    ///
    /// Each step drops the first char of `before` when it is at least as long
    /// as `after`, otherwise the last char of `after`. Text that already fits
    /// is returned untouched.
    #[must_use]
    pub fn clip_to_width(self, width: usize) -> Self {
        let Self {
            mut before,
            cursor,
            mut after,
        } = self;
        let mut before_len = before.chars().count();
        let mut after_len = after.chars().count();

        while before_len + after_len + 1 > width {
            if before_len >= after_len {
                let Some(first) = before.chars().next() else {
                    break;
                };
                before = &before[first.len_utf8()..];
                before_len -= 1;
            } else if let Some(last) = after.chars().next_back() {
                after = &after[..after.len() - last.len_utf8()];
                after_len -= 1;
            }
        }

        Self {
            before,
            cursor,
            after,
        }
    }
}

/// One glyph placed relative to the content origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Column within the content area.
    pub col: u16,
    /// Row within the content area.
    pub row: u16,
    /// Glyph to draw (control chars already mapped to a space).
    pub ch: char,
    /// Whether this is the cursor cell.
    pub cursor: bool,
}

/// The visible part of a text buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Glyphs in draw order: text before the cursor, the cursor, text after.
    pub glyphs: Vec<Glyph>,
    /// Position of the cursor cell, if it is visible.
    pub cursor: Option<(u16, u16)>,
}

impl Viewport {
    /// Lay out `buffer` in a `width` x `height` content area.
    pub fn layout(buffer: &TextBuffer, width: u16, height: u16, wrap: bool) -> Self {
        if width == 0 || height == 0 {
            return Self::default();
        }
        let split = CursorSplit::of(buffer);
        if wrap {
            Self::wrapped(split, width, height)
        } else {
            Self::clipped(split, width)
        }
    }

    fn clipped(split: CursorSplit<'_>, width: u16) -> Self {
        let CursorSplit {
            before,
            cursor,
            after,
        } = split.clip_to_width(width as usize);

        let mut placed = Placer::new(usize::MAX);
        for ch in before.chars() {
            placed.push(ch, false);
        }
        placed.push(cursor, true);
        for ch in after.chars() {
            placed.push(ch, false);
        }
        placed.finish(1)
    }

    fn wrapped(split: CursorSplit<'_>, width: u16, height: u16) -> Self {
        let mut placed = Placer::new(width as usize);
        for ch in split.before.chars() {
            placed.push_wrapping(ch, false);
        }
        placed.push_wrapping(split.cursor, true);
        for ch in split.after.chars() {
            placed.push_wrapping(ch, false);
        }
        placed.finish(height as usize)
    }
}

/// Running cursor used while laying glyphs out.
struct Placer {
    width: usize,
    col: usize,
    row: usize,
    cursor_row: usize,
    glyphs: Vec<(usize, usize, char, bool)>,
}

impl Placer {
    const fn new(width: usize) -> Self {
        Self {
            width,
            col: 0,
            row: 0,
            cursor_row: 0,
            glyphs: Vec::new(),
        }
    }

    fn push(&mut self, ch: char, cursor: bool) {
        if cursor {
            self.cursor_row = self.row;
        }
        self.glyphs.push((self.col, self.row, printable_glyph(ch), cursor));
        self.col += 1;
    }

    fn push_wrapping(&mut self, ch: char, cursor: bool) {
        if ch == '\n' && !cursor {
            self.break_line();
            return;
        }
        if self.col >= self.width {
            self.break_line();
        }
        self.push(ch, cursor);
        // A cursor sitting on a newline still ends its line.
        if ch == '\n' {
            self.break_line();
        }
    }

    const fn break_line(&mut self) {
        self.col = 0;
        self.row += 1;
    }

    /// Keep the `height` rows ending at the cursor row (or starting at 0).
    fn finish(self, height: usize) -> Viewport {
        let top = (self.cursor_row + 1).saturating_sub(height);
        let mut viewport = Viewport::default();
        for (col, row, ch, cursor) in self.glyphs {
            if row < top || row >= top + height {
                continue;
            }
            let (Ok(col), Ok(row)) = (u16::try_from(col), u16::try_from(row - top)) else {
                continue;
            };
            if cursor {
                viewport.cursor = Some((col, row));
            }
            viewport.glyphs.push(Glyph {
                col,
                row,
                ch,
                cursor,
            });
        }
        viewport
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
        buf
    }

    /// Render a viewport to text rows, marking the cursor cell with `_`
    /// when it is blank.
    fn rows(viewport: &Viewport, width: usize, height: usize) -> Vec<String> {
        let mut grid = vec![vec![' '; width]; height];
        for g in &viewport.glyphs {
            grid[g.row as usize][g.col as usize] = if g.cursor && g.ch == ' ' { '_' } else { g.ch };
        }
        grid.into_iter()
            .map(|r| r.into_iter().collect::<String>().trim_end().to_string())
            .collect()
    }

    #[test]
    fn test_split_at_end_uses_blank_cursor() {
        let buf = TextBuffer::with_value("abc");
        let split = CursorSplit::of(&buf);
        assert_eq!(split.before, "abc");
        assert_eq!(split.cursor, ' ');
        assert_eq!(split.after, "");
    }

    #[test]
    fn test_split_at_start() {
        let buf = buffer_at("abc", -3);
        let split = CursorSplit::of(&buf);
        assert_eq!(split.before, "");
        assert_eq!(split.cursor, 'a');
        assert_eq!(split.after, "bc");
    }

    #[test]
    fn test_split_on_empty_buffer() {
        let buf = TextBuffer::new();
        let split = CursorSplit::of(&buf);
        assert_eq!((split.before, split.cursor, split.after), ("", ' ', ""));
    }

    #[test]
    fn test_clip_keeps_fitting_text() {
        let buf = buffer_at("hello", -2);
        let split = CursorSplit::of(&buf);
        assert_eq!(split.clip_to_width(5), split);
        assert_eq!(split.clip_to_width(80), split);
    }

    #[test]
    fn test_clip_trims_longer_side_first() {
        let buf = TextBuffer::with_value("abcdefgh");
        let clipped = CursorSplit::of(&buf).clip_to_width(4);
        assert_eq!(clipped.before, "fgh");
        assert_eq!(clipped.after, "");

        let buf = buffer_at("abcdefgh", -8);
        let clipped = CursorSplit::of(&buf).clip_to_width(4);
        assert_eq!(clipped.before, "");
        assert_eq!(clipped.cursor, 'a');
        assert_eq!(clipped.after, "bcd");
    }

    #[test]
    fn test_clip_tie_trims_before() {
        // before = "abc", cursor = 'd', after = "efg"
        let buf = buffer_at("abcdefg", -4);
        let clipped = CursorSplit::of(&buf).clip_to_width(6);
        assert_eq!(clipped.before, "bc");
        assert_eq!(clipped.after, "efg");
    }

    #[test]
    fn test_clip_zero_width_terminates() {
        let buf = buffer_at("abcdef", -3);
        let clipped = CursorSplit::of(&buf).clip_to_width(0);
        assert_eq!(clipped.before, "");
        assert_eq!(clipped.after, "");
    }

    #[test]
    fn test_clipped_layout_single_row() {
        let buf = buffer_at("hello world", -3);
        let viewport = Viewport::layout(&buf, 6, 3, false);
        assert_eq!(rows(&viewport, 6, 1), vec![" world"]);
        assert_eq!(viewport.cursor, Some((3, 0)));
        assert!(viewport.glyphs.iter().all(|g| g.row == 0));
    }

    #[test]
    fn test_wrapped_layout_breaks_rows() {
        let buf = TextBuffer::with_value("abcdefghij");
        let viewport = Viewport::layout(&buf, 4, 5, true);
        assert_eq!(rows(&viewport, 4, 3), vec!["abcd", "efgh", "ij_"]);
        assert_eq!(viewport.cursor, Some((2, 2)));
    }

    #[test]
    fn test_wrapped_cursor_after_full_row_moves_down() {
        let buf = TextBuffer::with_value("abcd");
        let viewport = Viewport::layout(&buf, 4, 3, true);
        assert_eq!(viewport.cursor, Some((0, 1)));
    }

    #[test]
    fn test_wrapped_cursor_mid_text() {
        let buf = buffer_at("abcdefg", -4);
        let viewport = Viewport::layout(&buf, 3, 5, true);
        assert_eq!(rows(&viewport, 3, 3), vec!["abc", "def", "g"]);
        assert_eq!(viewport.cursor, Some((0, 1)));
    }

    #[test]
    fn test_wrapped_newline_forces_break() {
        let buf = TextBuffer::with_value("ab\ncd");
        let viewport = Viewport::layout(&buf, 10, 4, true);
        assert_eq!(rows(&viewport, 10, 2), vec!["ab", "cd_"]);
    }

    #[test]
    fn test_wrapped_cursor_on_newline() {
        let buf = buffer_at("ab\ncd", -3);
        let viewport = Viewport::layout(&buf, 10, 4, true);
        assert_eq!(viewport.cursor, Some((2, 0)));
        assert_eq!(rows(&viewport, 10, 2), vec!["ab_", "cd"]);
    }

    #[test]
    fn test_wrapped_scrolls_to_cursor_row() {
        let buf = TextBuffer::with_value("aaabbbcccdd");
        let viewport = Viewport::layout(&buf, 3, 2, true);
        assert_eq!(rows(&viewport, 3, 2), vec!["ccc", "dd_"]);
        assert_eq!(viewport.cursor, Some((2, 1)));
    }

    #[test]
    fn test_zero_area_is_empty() {
        let buf = TextBuffer::with_value("abc");
        assert_eq!(Viewport::layout(&buf, 0, 1, false), Viewport::default());
        assert_eq!(Viewport::layout(&buf, 5, 0, true), Viewport::default());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn clip_always_fits(text in "[a-z]{0,40}", left in 0usize..48, width in 1usize..30) {
                let mut buf = TextBuffer::with_value(text);
                for _ in 0..left { buf.move_left(); }
                let clipped = CursorSplit::of(&buf).clip_to_width(width);
                let used = clipped.before.chars().count() + clipped.after.chars().count() + 1;
                prop_assert!(used <= width);
            }

            #[test]
            fn clip_never_trims_fitting_text(text in "[a-z]{0,20}", left in 0usize..24) {
                let mut buf = TextBuffer::with_value(text);
                for _ in 0..left { buf.move_left(); }
                let split = CursorSplit::of(&buf);
                let width = buf.len() + 1;
                prop_assert_eq!(split.clip_to_width(width), split);
            }

            #[test]
            fn cursor_always_visible(text in "[a-z\n]{0,60}", left in 0usize..64, width in 1u16..12, height in 1u16..6, wrap in any::<bool>()) {
                let mut buf = TextBuffer::with_value(text);
                for _ in 0..left { buf.move_left(); }
                let viewport = Viewport::layout(&buf, width, height, wrap);
                let (col, row) = viewport.cursor.expect("cursor visible");
                prop_assert!(col < width && row < height);
                for g in &viewport.glyphs {
                    prop_assert!(g.row < height);
                    prop_assert!(g.col < width || !wrap);
                }
            }
        }
    }
}
