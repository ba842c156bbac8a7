//! ASCII Art: a static block of pre-drawn lines.

use super::traits::Control;
use crate::buffer::{Canvas, Style};
use crate::draw::{self, Alignment};
use crate::event::KeyEvent;
use crate::layout::Rect;

/// Lines of text drawn top to bottom from the control's position.
///
/// The size is derived from the content: width of the longest line, one row
/// per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    lines: Vec<String>,
    x: u16,
    y: u16,
    style: Style,
}

impl AsciiArt {
    /// Create art from `lines` with its top-left corner at (x, y).
    pub fn new<I, S>(lines: I, x: u16, y: u16, style: Style) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            x,
            y,
            style,
        }
    }

    /// The lines as currently laid out.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Replace the content.
    pub fn set_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
    }

    /// Text colors.
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Set the text colors.
    pub const fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Pad every line to the longest one, then align each within `width`.
    ///
    /// Padding first keeps the block's shape intact: lines move together
    /// instead of each being centered on its own.
    pub fn align(&mut self, alignment: Alignment, width: usize) {
        let longest = self.longest_line();
        for line in &mut self.lines {
            let padded = draw::align_text(line, longest, Alignment::Left);
            *line = draw::align_text(&padded, width, alignment);
        }
    }

    fn longest_line(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }
}

impl Control for AsciiArt {
    fn bounds(&self) -> Rect {
        let width = u16::try_from(self.longest_line()).unwrap_or(u16::MAX);
        let height = u16::try_from(self.lines.len()).unwrap_or(u16::MAX);
        Rect::new(self.x, self.y, width, height)
    }

    /// Only the position is honored; the size follows the content.
    fn set_bounds(&mut self, bounds: Rect) {
        self.x = bounds.x;
        self.y = bounds.y;
    }

    fn handle_key(&mut self, _key: &KeyEvent) -> bool {
        false
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        let x = i32::from(self.x);
        for (row, line) in (i32::from(self.y)..).zip(&self.lines) {
            draw::draw_text(canvas, line, x, row, self.style);
        }
    }

    fn is_focusable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Buffer;

    fn art() -> AsciiArt {
        AsciiArt::new(["/\\", "/  \\", "----"], 1, 1, Style::DEFAULT)
    }

    #[test]
    fn test_bounds_follow_content() {
        let art = art();
        assert_eq!(art.bounds(), Rect::new(1, 1, 4, 3));
    }

    #[test]
    fn test_align_center_keeps_shape() {
        let mut art = art();
        art.align(Alignment::Center, 8);
        assert_eq!(art.lines(), ["  /\\    ", "  /  \\  ", "  ----  "]);
    }

    #[test]
    fn test_align_right() {
        let mut art = AsciiArt::new(["ab", "c"], 0, 0, Style::DEFAULT);
        art.align(Alignment::Right, 5);
        assert_eq!(art.lines(), ["   ab", "   c "]);
    }

    #[test]
    fn test_draw_rows() {
        let mut buffer = Buffer::new(6, 4);
        art().draw(&mut Canvas::new(&mut buffer));
        assert_eq!(buffer.row_text(0), "      ");
        assert_eq!(buffer.row_text(1), " /\\   ");
        assert_eq!(buffer.row_text(2), " /  \\ ");
        assert_eq!(buffer.row_text(3), " ---- ");
    }

    #[test]
    fn test_set_bounds_moves_only() {
        let mut art = art();
        art.set_bounds(Rect::new(5, 6, 100, 100));
        assert_eq!(art.bounds(), Rect::new(5, 6, 4, 3));
    }
}
