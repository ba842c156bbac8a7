//! Alert Modal: a message acknowledged with Enter.

use super::ModalChrome;
use crate::buffer::{Canvas, Style};
use crate::event::{KeyCode, KeyEvent};
use crate::layout::Rect;
use crate::widget::Control;

const DEFAULT_TITLE: &str = "Alert!";
const HELP: &str = "Press Enter to Continue";

/// A message box closed with Enter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertModal {
    chrome: ModalChrome,
}

impl AlertModal {
    /// Create an alert. An empty title becomes `"Alert!"`.
    pub fn new(title: &str, bounds: Rect, style: Style) -> Self {
        let title = if title.is_empty() { DEFAULT_TITLE } else { title };
        Self {
            chrome: ModalChrome::new(title, bounds, style),
        }
    }

    /// Builder: set the body text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.chrome.set_text(text);
        self
    }

    /// Shared dialog state.
    pub const fn chrome(&self) -> &ModalChrome {
        &self.chrome
    }

    /// Mutable dialog state (title, text, style, help, visibility).
    pub const fn chrome_mut(&mut self) -> &mut ModalChrome {
        &mut self.chrome
    }

    /// Whether Enter has been pressed.
    pub const fn is_done(&self) -> bool {
        self.chrome.is_done()
    }

    /// Mark the alert answered, or active again. The body is kept.
    pub fn set_done(&mut self, done: bool) {
        self.chrome.set_done(done);
    }

    /// Reset to active with an empty title and body.
    pub fn clear(&mut self) {
        self.chrome.reset();
    }

    /// Make the alert visible.
    pub const fn show(&mut self) {
        self.chrome.show();
    }

    /// Hide the alert.
    pub const fn hide(&mut self) {
        self.chrome.hide();
    }
}

impl Control for AlertModal {
    fn bounds(&self) -> Rect {
        self.chrome.bounds()
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.chrome.set_bounds(bounds);
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if self.chrome.is_done() || key.code != KeyCode::Enter {
            return false;
        }
        self.chrome.finish();
        true
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        self.chrome.draw(canvas, HELP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Buffer;

    fn alert() -> AlertModal {
        AlertModal::new("", Rect::new(0, 0, 30, 6), Style::DEFAULT).with_text("Saved")
    }

    #[test]
    fn test_default_title() {
        assert_eq!(alert().chrome().title(), "Alert!");
        let named = AlertModal::new("Oops", Rect::new(0, 0, 30, 6), Style::DEFAULT);
        assert_eq!(named.chrome().title(), "Oops");
    }

    #[test]
    fn test_enter_finishes() {
        let mut modal = alert();
        assert!(!modal.handle_key(&KeyEvent::char('x')));
        assert!(!modal.is_done());
        assert!(modal.handle_key(&KeyEvent::new(KeyCode::Enter)));
        assert!(modal.is_done());
        // Ignored until cleared.
        assert!(!modal.handle_key(&KeyEvent::new(KeyCode::Enter)));

        modal.clear();
        assert!(!modal.is_done());
        assert_eq!(modal.chrome().title(), "");
        assert_eq!(modal.chrome().text(), "");
    }

    #[test]
    fn test_draw_help_footer() {
        let mut buffer = Buffer::new(30, 6);
        alert().draw(&mut Canvas::new(&mut buffer));
        assert_eq!(buffer.row_text(1), "│Alert!                      │");
        assert_eq!(buffer.row_text(3), "│Saved                       │");
        assert_eq!(buffer.row_text(4), "│     Press Enter to Continue│");
    }

    #[test]
    fn test_set_done() {
        let mut modal = alert();
        modal.set_done(true);
        assert!(modal.is_done());
        assert!(!modal.handle_key(&KeyEvent::new(KeyCode::Enter)));
        modal.set_done(false);
        assert!(modal.handle_key(&KeyEvent::new(KeyCode::Enter)));
        assert_eq!(modal.chrome().text(), "Saved");
    }
}
