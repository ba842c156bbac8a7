//! Input Modal: a prompt with an embedded text field.

use super::ModalChrome;
use crate::buffer::{Canvas, Style};
use crate::event::{KeyCode, KeyEvent};
use crate::layout::Rect;
use crate::widget::{Control, InputField};

const HELP: &str = " (ENTER) to Accept. (ESC) to Cancel. ";

/// Rows taken by the bordered field: border, one line of text, border.
const FIELD_HEIGHT: u16 = 3;

/// A boxed prompt that collects one value.
///
/// Enter finishes the prompt; every other key goes to the field. Esc is not
/// consumed, so the owner can treat it as "cancel".
#[derive(Debug, Clone)]
pub struct InputModal {
    chrome: ModalChrome,
    input: InputField,
}

impl InputModal {
    /// Create a prompt titled `title`.
    pub fn new(title: impl Into<String>, bounds: Rect, style: Style) -> Self {
        let mut input = InputField::new(Rect::ZERO, style);
        input.set_bordered(true);
        let mut modal = Self {
            chrome: ModalChrome::new(title, bounds, style),
            input,
        };
        modal.layout_input();
        modal
    }

    /// Place the field just below the title and body text.
    fn layout_input(&mut self) {
        let bounds = self.chrome.bounds();
        let area = Rect::new(
            bounds.x.saturating_add(1),
            self.chrome.body_end(),
            bounds.width.saturating_sub(2),
            FIELD_HEIGHT,
        );
        self.input.set_bounds(area);
    }

    /// Shared dialog state.
    pub const fn chrome(&self) -> &ModalChrome {
        &self.chrome
    }

    /// Mutable dialog state. Call [`Control::set_bounds`] on the modal
    /// instead of on the chrome so the field follows.
    pub const fn chrome_mut(&mut self) -> &mut ModalChrome {
        &mut self.chrome
    }

    /// Replace the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.chrome.set_title(title);
        self.layout_input();
    }

    /// Replace the body text shown above the field.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.chrome.set_text(text);
        self.layout_input();
    }

    /// Draw (or hide) the help footer.
    pub const fn set_show_help(&mut self, show: bool) {
        self.chrome.set_show_help(show);
    }

    /// The embedded field.
    pub const fn input(&self) -> &InputField {
        &self.input
    }

    /// The text entered so far.
    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Pre-fill the field, cursor at the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.input.set_value(value);
    }

    /// Wrap long input in the field.
    pub const fn set_input_wrap(&mut self, wrap: bool) {
        self.input.set_wrap(wrap);
    }

    /// Whether Enter has been pressed.
    pub const fn is_done(&self) -> bool {
        self.chrome.is_done()
    }

    /// Mark the prompt answered, or active again, keeping its value.
    pub fn set_done(&mut self, done: bool) {
        self.chrome.set_done(done);
    }

    /// Reset to active with an empty title, body and value.
    pub fn clear(&mut self) {
        self.chrome.reset();
        self.input.clear();
        self.layout_input();
    }

    /// Whether the prompt is drawn.
    pub const fn is_visible(&self) -> bool {
        self.chrome.is_visible()
    }

    /// Make the prompt visible.
    pub const fn show(&mut self) {
        self.chrome.show();
    }

    /// Hide the prompt.
    pub const fn hide(&mut self) {
        self.chrome.hide();
    }
}

impl Control for InputModal {
    fn bounds(&self) -> Rect {
        self.chrome.bounds()
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.chrome.set_bounds(bounds);
        self.layout_input();
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if self.chrome.is_done() {
            return false;
        }
        if key.code == KeyCode::Enter {
            self.chrome.finish();
            return true;
        }
        self.input.handle_key(key)
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        if !self.chrome.is_visible() {
            return;
        }
        self.chrome.draw_frame(canvas);
        let inner = self.chrome.bounds().inner();
        let mut inside = canvas.clipped(i32::from(inner.x), i32::from(inner.y), inner.width, inner.height);
        self.input.draw(&mut inside);
        self.chrome.draw_help(canvas, HELP);
    }

    fn set_focused(&mut self, focused: bool) {
        self.input.set_focused(focused);
    }
}
