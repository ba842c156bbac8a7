//! Confirm Modal: a yes/no question.

use super::ModalChrome;
use crate::buffer::{Canvas, Style};
use crate::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::layout::Rect;
use crate::widget::Control;

const DEFAULT_TITLE: &str = "Confirm?";
const HELP: &str = " (Y/y) Confirm. (N/n) Reject. ";

/// A question answered with `y` or `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmModal {
    chrome: ModalChrome,
    accepted: bool,
}

impl ConfirmModal {
    /// Create a confirmation. An empty title becomes `"Confirm?"`.
    pub fn new(title: &str, bounds: Rect, style: Style) -> Self {
        let title = if title.is_empty() { DEFAULT_TITLE } else { title };
        Self {
            chrome: ModalChrome::new(title, bounds, style),
            accepted: false,
        }
    }

    /// Builder: set the question text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.chrome.set_text(text);
        self
    }

    /// Shared dialog state.
    pub const fn chrome(&self) -> &ModalChrome {
        &self.chrome
    }

    /// Mutable dialog state.
    pub const fn chrome_mut(&mut self) -> &mut ModalChrome {
        &mut self.chrome
    }

    /// Whether the question has been answered.
    pub const fn is_done(&self) -> bool {
        self.chrome.is_done()
    }

    /// Whether the answer was yes. Only meaningful once done.
    pub const fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Mark the prompt answered, or active again. The last answer is kept.
    pub fn set_done(&mut self, done: bool) {
        self.chrome.set_done(done);
    }

    /// Reset to active, unanswered, with an empty title and body.
    pub fn clear(&mut self) {
        self.chrome.reset();
        self.accepted = false;
    }

    /// Make the dialog visible.
    pub const fn show(&mut self) {
        self.chrome.show();
    }

    /// Hide the dialog.
    pub const fn hide(&mut self) {
        self.chrome.hide();
    }
}

impl Control for ConfirmModal {
    fn bounds(&self) -> Rect {
        self.chrome.bounds()
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.chrome.set_bounds(bounds);
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if self.chrome.is_done() || !key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
            return false;
        }
        self.accepted = match key.code {
            KeyCode::Char('y' | 'Y') => true,
            KeyCode::Char('n' | 'N') => false,
            _ => return false,
        };
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

    fn confirm() -> ConfirmModal {
        ConfirmModal::new("", Rect::new(0, 0, 40, 6), Style::DEFAULT).with_text("Delete?")
    }

    #[test]
    fn test_yes_accepts() {
        let mut modal = confirm();
        assert!(modal.handle_key(&KeyEvent::char('y')));
        assert!(modal.is_done());
        assert!(modal.is_accepted());
    }

    #[test]
    fn test_shifted_yes_accepts() {
        let mut modal = confirm();
        let key = KeyEvent::with_modifiers(KeyCode::Char('Y'), KeyModifiers::SHIFT);
        assert!(modal.handle_key(&key));
        assert!(modal.is_accepted());
    }

    #[test]
    fn test_no_rejects() {
        let mut modal = confirm();
        assert!(modal.handle_key(&KeyEvent::char('N')));
        assert!(modal.is_done());
        assert!(!modal.is_accepted());
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut modal = confirm();
        assert!(!modal.handle_key(&KeyEvent::char('x')));
        assert!(!modal.handle_key(&KeyEvent::new(KeyCode::Enter)));
        assert!(!modal.handle_key(&KeyEvent::ctrl('y')));
        assert!(!modal.is_done());
        assert!(!modal.is_accepted());
    }

    #[test]
    fn test_done_ignores_until_cleared() {
        let mut modal = confirm();
        modal.handle_key(&KeyEvent::char('y'));
        assert!(!modal.handle_key(&KeyEvent::char('n')));
        assert!(modal.is_accepted());

        modal.clear();
        assert!(!modal.is_done());
        assert!(!modal.is_accepted());
        assert_eq!(modal.chrome().title(), "");
        assert_eq!(modal.chrome().text(), "");
        assert_eq!(ConfirmModal::new("", Rect::ZERO, Style::DEFAULT).chrome().title(), "Confirm?");
    }

    #[test]
    fn test_set_done_keeps_answer() {
        let mut modal = confirm();
        modal.set_done(true);
        assert!(modal.is_done());
        assert!(!modal.is_accepted());
        assert!(!modal.handle_key(&KeyEvent::char('y')));

        modal.set_done(false);
        assert!(modal.handle_key(&KeyEvent::char('y')));
        modal.set_done(false);
        assert!(!modal.is_done());
        assert!(modal.is_accepted());
    }
}
