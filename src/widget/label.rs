//! Label: a single line of static text.

use super::traits::Control;
use crate::buffer::{Canvas, Style};
use crate::draw::{self, Alignment};
use crate::event::KeyEvent;
use crate::layout::Rect;

/// One line of text aligned within its width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    text: String,
    bounds: Rect,
    style: Style,
    alignment: Alignment,
}

impl Label {
    /// Create a left-aligned label.
    pub fn new(text: impl Into<String>, bounds: Rect, style: Style) -> Self {
        Self {
            text: text.into(),
            bounds,
            style,
            alignment: Alignment::Left,
        }
    }

    /// Builder: set the alignment.
    #[must_use]
    pub const fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// The label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the label text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Current alignment.
    pub const fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Change the alignment.
    pub const fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    /// Text colors.
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Set the text colors.
    pub const fn set_style(&mut self, style: Style) {
        self.style = style;
    }
}

impl Control for Label {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn handle_key(&mut self, _key: &KeyEvent) -> bool {
        false
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        if self.bounds.is_empty() {
            return;
        }
        let line = draw::align_text(&self.text, self.bounds.width as usize, self.alignment);
        let mut clip = canvas.clipped(
            i32::from(self.bounds.x),
            i32::from(self.bounds.y),
            self.bounds.width,
            1,
        );
        draw::draw_text(
            &mut clip,
            &line,
            i32::from(self.bounds.x),
            i32::from(self.bounds.y),
            self.style,
        );
    }

    fn is_focusable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Buffer;

    #[test]
    fn test_label_alignments() {
        let mut buffer = Buffer::new(8, 3);
        {
            let mut canvas = Canvas::new(&mut buffer);
            Label::new("ab", Rect::new(0, 0, 6, 1), Style::DEFAULT).draw(&mut canvas);
            Label::new("ab", Rect::new(0, 1, 6, 1), Style::DEFAULT)
                .with_alignment(Alignment::Center)
                .draw(&mut canvas);
            Label::new("ab", Rect::new(0, 2, 6, 1), Style::DEFAULT)
                .with_alignment(Alignment::Right)
                .draw(&mut canvas);
        }
        assert_eq!(buffer.row_text(0), "ab      ");
        assert_eq!(buffer.row_text(1), "  ab    ");
        assert_eq!(buffer.row_text(2), "    ab  ");
    }

    #[test]
    fn test_label_clips_to_width() {
        let mut buffer = Buffer::new(8, 1);
        Label::new("abcdefgh", Rect::new(1, 0, 3, 1), Style::DEFAULT)
            .draw(&mut Canvas::new(&mut buffer));
        assert_eq!(buffer.row_text(0), " abc    ");
    }

    #[test]
    fn test_label_ignores_keys() {
        let mut label = Label::new("x", Rect::new(0, 0, 1, 1), Style::DEFAULT);
        assert!(!label.handle_key(&KeyEvent::char('a')));
        assert!(!label.is_focusable());
    }
}
