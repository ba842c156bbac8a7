//! Drawing primitives shared by the controls: text runs, fills, borders and
//! text alignment.

use crate::buffer::{Canvas, Style};
use crate::layout::Rect;

/// Horizontal alignment of a line of text within a width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Pad on the right.
    #[default]
    Left,
    /// Pad evenly on both sides.
    Center,
    /// Pad on the left.
    Right,
}

/// Border glyphs, clockwise from the top-left corner.
const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// Pad `text` with spaces to `width` columns using `align`.
///
/// Text that is already `width` or longer is returned unchanged. Centering
/// puts the odd leftover column on the right.
pub fn align_text(text: &str, width: usize, align: Alignment) -> String {
    let len = text.chars().count();
    let spaces = width.saturating_sub(len);
    match align {
        Alignment::Left => format!("{text}{}", " ".repeat(spaces)),
        Alignment::Right => format!("{}{text}", " ".repeat(spaces)),
        Alignment::Center => {
            let left = spaces / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(spaces - left))
        }
    }
}

/// Draw `text` starting at (x, y), one cell per char.
///
/// Returns the column just past the last glyph written.
pub fn draw_text(canvas: &mut Canvas<'_>, text: &str, x: i32, y: i32, style: Style) -> i32 {
    let mut col = x;
    for ch in text.chars() {
        canvas.set_cell(col, y, printable_glyph(ch), style);
        col += 1;
    }
    col
}

/// Fill a rectangle with one glyph.
pub fn fill(canvas: &mut Canvas<'_>, area: Rect, ch: char, style: Style) {
    for row in i32::from(area.y)..area.bottom() {
        for col in i32::from(area.x)..area.right() {
            canvas.set_cell(col, row, ch, style);
        }
    }
}

/// Draw a horizontal run of `ch` of `len` cells starting at (x, y).
pub fn draw_hline(canvas: &mut Canvas<'_>, x: i32, y: i32, len: u16, ch: char, style: Style) {
    for col in x..x + i32::from(len) {
        canvas.set_cell(col, y, ch, style);
    }
}

/// Draw a single-line box around the outer ring of `area`.
///
/// Areas narrower or shorter than two cells have no room for corners and are
/// left untouched.
pub fn draw_border(canvas: &mut Canvas<'_>, area: Rect, style: Style) {
    if area.width < 2 || area.height < 2 {
        return;
    }
    let left = i32::from(area.x);
    let top = i32::from(area.y);
    let right = area.right() - 1;
    let bottom = area.bottom() - 1;

    canvas.set_cell(left, top, TOP_LEFT, style);
    canvas.set_cell(right, top, TOP_RIGHT, style);
    canvas.set_cell(left, bottom, BOTTOM_LEFT, style);
    canvas.set_cell(right, bottom, BOTTOM_RIGHT, style);

    draw_hline(canvas, left + 1, top, area.width - 2, HORIZONTAL, style);
    draw_hline(canvas, left + 1, bottom, area.width - 2, HORIZONTAL, style);
    for row in top + 1..bottom {
        canvas.set_cell(left, row, VERTICAL, style);
        canvas.set_cell(right, row, VERTICAL, style);
    }
}

/// The glyph used to display `ch` in a single cell.
///
/// Control characters (tab, newline, ...) occupy one blank cell.
pub fn printable_glyph(ch: char) -> char {
    if ch.is_control() {
        ' '
    } else {
        ch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Buffer;

    #[test]
    fn test_align_text() {
        assert_eq!(align_text("ab", 5, Alignment::Left), "ab   ");
        assert_eq!(align_text("ab", 5, Alignment::Right), "   ab");
        assert_eq!(align_text("ab", 6, Alignment::Center), "  ab  ");
        assert_eq!(align_text("ab", 5, Alignment::Center), " ab  ");
    }

    #[test]
    fn test_align_text_too_long_is_unchanged() {
        assert_eq!(align_text("abcdef", 3, Alignment::Right), "abcdef");
        assert_eq!(align_text("abcdef", 3, Alignment::Center), "abcdef");
    }

    #[test]
    fn test_draw_text_returns_next_column() {
        let mut buffer = Buffer::new(10, 1);
        let mut canvas = Canvas::new(&mut buffer);
        let next = draw_text(&mut canvas, "a\tb", 2, 0, Style::DEFAULT);
        assert_eq!(next, 5);
        assert_eq!(buffer.row_text(0), "  a b     ");
    }

    #[test]
    fn test_draw_border() {
        let mut buffer = Buffer::new(5, 3);
        let mut canvas = Canvas::new(&mut buffer);
        draw_border(&mut canvas, Rect::new(0, 0, 5, 3), Style::DEFAULT);
        assert_eq!(buffer.row_text(0), "┌───┐");
        assert_eq!(buffer.row_text(1), "│   │");
        assert_eq!(buffer.row_text(2), "└───┘");
    }

    #[test]
    fn test_fill() {
        let mut buffer = Buffer::new(4, 3);
        let mut canvas = Canvas::new(&mut buffer);
        fill(&mut canvas, Rect::new(1, 1, 2, 2), '#', Style::DEFAULT);
        assert_eq!(buffer.row_text(0), "    ");
        assert_eq!(buffer.row_text(1), " ## ");
        assert_eq!(buffer.row_text(2), " ## ");
    }
}
