//! Input Field: editable text with a block cursor.
//!
//! Wraps a [`TextBuffer`] and lays it out through [`Viewport`]: either a
//! single clipped row that slides to keep the cursor visible, or wrapped rows.

use super::text_buffer::TextBuffer;
use super::traits::Control;
use super::viewport::Viewport;
use crate::buffer::{Canvas, Style};
use crate::draw;
use crate::event::{KeyCode, KeyEvent};
use crate::layout::Rect;

/// An editable text field.
#[derive(Debug, Clone)]
pub struct InputField {
    /// Text and cursor.
    text: TextBuffer,
    /// Widget bounds, border included.
    bounds: Rect,
    /// Text colors; the cursor cell uses them swapped.
    style: Style,
    /// Reserve the outer ring for a border.
    bordered: bool,
    /// Wrap long text instead of sliding a single row.
    wrap: bool,
    /// Enter inserts a newline.
    multiline: bool,
    /// Whether the cursor is drawn.
    focused: bool,
}

impl InputField {
    /// Create an empty field.
    pub const fn new(bounds: Rect, style: Style) -> Self {
        Self {
            text: TextBuffer::new(),
            bounds,
            style,
            bordered: false,
            wrap: false,
            multiline: false,
            focused: true,
        }
    }

    /// Get the current text.
    pub fn value(&self) -> &str {
        self.text.value()
    }

    /// Replace the text, moving the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.text.set_value(value);
    }

    /// Empty the field.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// The underlying text buffer.
    pub const fn text(&self) -> &TextBuffer {
        &self.text
    }

    /// Mutable access to the underlying text buffer.
    pub const fn text_mut(&mut self) -> &mut TextBuffer {
        &mut self.text
    }

    /// Cursor offset from the end of the text.
    pub const fn cursor_offset(&self) -> isize {
        self.text.cursor_offset()
    }

    /// Text colors.
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Set the text colors.
    pub const fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Whether a border is drawn.
    pub const fn is_bordered(&self) -> bool {
        self.bordered
    }

    /// Draw (or stop drawing) a border around the field.
    pub const fn set_bordered(&mut self, bordered: bool) {
        self.bordered = bordered;
    }

    /// Whether long text wraps.
    pub const fn does_wrap(&self) -> bool {
        self.wrap
    }

    /// Wrap long text at the content width.
    pub const fn set_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    /// Whether Enter inserts a newline.
    pub const fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Let Enter insert a newline.
    pub const fn set_multiline(&mut self, multiline: bool) {
        self.multiline = multiline;
    }

    /// Check if focused.
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Area the text is laid out in.
    pub const fn content_area(&self) -> Rect {
        if self.bordered {
            self.bounds.inner()
        } else {
            self.bounds
        }
    }

    /// Compute what the next draw will show.
    pub fn viewport(&self) -> Viewport {
        let area = self.content_area();
        Viewport::layout(&self.text, area.width, area.height, self.wrap)
    }
}

impl Control for InputField {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.is_backspace() {
            self.text.backspace();
            return true;
        }
        if key.is_ctrl('u') {
            self.text.clear_before_cursor();
            return true;
        }
        match key.code {
            KeyCode::Left => {
                self.text.move_left();
            }
            KeyCode::Right => {
                self.text.move_right();
            }
            KeyCode::Home => {
                self.text.move_home();
            }
            KeyCode::End => {
                self.text.move_end();
            }
            KeyCode::Delete => {
                self.text.delete();
            }
            _ => match key.insertable(self.multiline) {
                Some(ch) => self.text.insert(ch),
                None => return false,
            },
        }
        true
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        if self.bordered {
            draw::draw_border(canvas, self.bounds, self.style);
        }
        let area = self.content_area();
        draw::fill(canvas, area, ' ', self.style);

        let x = i32::from(area.x);
        let y = i32::from(area.y);
        for glyph in self.viewport().glyphs {
            let style = if glyph.cursor && self.focused {
                self.style.reversed()
            } else {
                self.style
            };
            canvas.set_cell(x + i32::from(glyph.col), y + i32::from(glyph.row), glyph.ch, style);
        }
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{Buffer, Rgb};

    fn press(field: &mut InputField, code: KeyCode) -> bool {
        field.handle_key(&KeyEvent::new(code))
    }

    fn type_str(field: &mut InputField, text: &str) {
        for c in text.chars() {
            assert!(field.handle_key(&KeyEvent::char(c)));
        }
    }

    fn style() -> Style {
        Style::new(Rgb::WHITE, Rgb::BLUE)
    }

    #[test]
    fn test_typing_and_editing() {
        let mut field = InputField::new(Rect::new(0, 0, 20, 1), style());
        type_str(&mut field, "hello");
        assert!(press(&mut field, KeyCode::Backspace));
        assert!(field.handle_key(&KeyEvent::ctrl('h')));
        assert_eq!(field.value(), "hel");

        assert!(press(&mut field, KeyCode::Left));
        assert!(press(&mut field, KeyCode::Left));
        assert_eq!(field.cursor_offset(), -2);

        type_str(&mut field, "X");
        assert_eq!(field.value(), "hXel");
        assert_eq!(field.cursor_offset(), -2);
    }

    #[test]
    fn test_space_and_tab_are_inserted() {
        let mut field = InputField::new(Rect::new(0, 0, 20, 1), style());
        type_str(&mut field, "a b");
        assert!(press(&mut field, KeyCode::Tab));
        assert_eq!(field.value(), "a b\t");
    }

    #[test]
    fn test_ctrl_u_clears_before_cursor() {
        let mut field = InputField::new(Rect::new(0, 0, 20, 1), style());
        field.set_value("foo bar");
        for _ in 0..3 {
            press(&mut field, KeyCode::Left);
        }
        assert!(field.handle_key(&KeyEvent::ctrl('u')));
        assert_eq!(field.value(), "bar");
        assert_eq!(field.text().split_point(), 0);
    }

    #[test]
    fn test_enter_only_inserts_when_multiline() {
        let mut field = InputField::new(Rect::new(0, 0, 20, 3), style());
        type_str(&mut field, "a");
        assert!(!press(&mut field, KeyCode::Enter));
        assert_eq!(field.value(), "a");

        field.set_multiline(true);
        assert!(press(&mut field, KeyCode::Enter));
        assert_eq!(field.value(), "a\n");
    }

    #[test]
    fn test_unhandled_keys_are_not_consumed() {
        let mut field = InputField::new(Rect::new(0, 0, 20, 1), style());
        assert!(!press(&mut field, KeyCode::Up));
        assert!(!press(&mut field, KeyCode::Esc));
        assert!(!press(&mut field, KeyCode::F(5)));
        assert!(!field.handle_key(&KeyEvent::ctrl('b')));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_rapid_movement_at_bounds() {
        let mut field = InputField::new(Rect::new(0, 0, 20, 1), style());
        for _ in 0..10 {
            press(&mut field, KeyCode::Left);
            press(&mut field, KeyCode::Right);
        }
        assert_eq!(field.cursor_offset(), 0);
        field.set_value("ab");
        for _ in 0..10 {
            press(&mut field, KeyCode::Left);
        }
        assert_eq!(field.cursor_offset(), -2);
        assert!(press(&mut field, KeyCode::Backspace));
        assert_eq!(field.value(), "ab");
    }

    #[test]
    fn test_draw_clipped_with_cursor() {
        let mut buffer = Buffer::new(8, 1);
        let mut field = InputField::new(Rect::new(1, 0, 5, 1), style());
        field.set_value("abcdefgh");
        field.draw(&mut Canvas::new(&mut buffer));

        assert_eq!(buffer.row_text(0), " efgh   ");
        let cursor = buffer.get(5, 0).unwrap();
        assert_eq!(cursor.ch(), ' ');
        assert_eq!(cursor.style(), style().reversed());
        assert_eq!(buffer.get(4, 0).unwrap().style(), style());
    }

    #[test]
    fn test_draw_bordered_wrapped() {
        let mut buffer = Buffer::new(6, 4);
        let mut field = InputField::new(Rect::new(0, 0, 6, 4), style());
        field.set_bordered(true);
        field.set_wrap(true);
        field.set_value("abcdef");
        field.draw(&mut Canvas::new(&mut buffer));

        assert_eq!(buffer.row_text(0), "┌────┐");
        assert_eq!(buffer.row_text(1), "│abcd│");
        assert_eq!(buffer.row_text(2), "│ef  │");
        assert_eq!(buffer.row_text(3), "└────┘");
        assert_eq!(buffer.get(3, 2).unwrap().style(), style().reversed());
    }

    #[test]
    fn test_unfocused_hides_cursor() {
        let mut buffer = Buffer::new(4, 1);
        let mut field = InputField::new(Rect::new(0, 0, 4, 1), style());
        field.set_value("ab");
        field.set_focused(false);
        field.draw(&mut Canvas::new(&mut buffer));
        assert!(buffer.cells().iter().all(|c| c.style() == style()));
    }
}
