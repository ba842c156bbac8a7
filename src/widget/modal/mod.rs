//! Modal dialogs: boxed prompts an application shows over other content.
//!
//! All three modals share the same life cycle:
//!
//! ```text
//! Active --(answer key)--> Done --clear()--> Active
//! ```
//!
//! Owners poll `is_done()` after each key and must `clear()` before reusing a
//! finished modal. A done modal declines every key until then.
//!
//! The boxed chrome (border, title with separator, body text, right-aligned
//! help footer, visibility) lives in [`ModalChrome`], which each modal embeds.

mod alert;
mod confirm;
mod input;

pub use alert::AlertModal;
pub use confirm::ConfirmModal;
pub use input::InputModal;

use crate::buffer::{Canvas, Style};
use crate::draw;
use crate::layout::Rect;

/// Frame and shared state of a modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalChrome {
    title: String,
    text: String,
    bounds: Rect,
    style: Style,
    show_help: bool,
    visible: bool,
    done: bool,
}

impl ModalChrome {
    /// Visible chrome with the help footer on.
    pub fn new(title: impl Into<String>, bounds: Rect, style: Style) -> Self {
        Self {
            title: title.into(),
            text: String::new(),
            bounds,
            style,
            show_help: true,
            visible: true,
            done: false,
        }
    }

    /// Title shown on the first inner row.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Body text shown below the title.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the body text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Outer bounds, border included.
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Move or resize the dialog.
    pub const fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Dialog colors.
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Set the dialog colors.
    pub const fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Whether the help footer is drawn.
    pub const fn is_help_shown(&self) -> bool {
        self.show_help
    }

    /// Draw (or hide) the help footer.
    pub const fn set_show_help(&mut self, show: bool) {
        self.show_help = show;
    }

    /// Whether the dialog is drawn at all.
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Make the dialog visible.
    pub const fn show(&mut self) {
        self.visible = true;
    }

    /// Stop drawing the dialog. Its state is kept.
    pub const fn hide(&mut self) {
        self.visible = false;
    }

    /// Whether the dialog has been answered.
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Mark the dialog answered.
    pub fn finish(&mut self) {
        if !self.done {
            log::debug!("modal {:?} done", self.title);
        }
        self.done = true;
    }

    /// Back to active with an empty title and body.
    pub fn reset(&mut self) {
        self.title.clear();
        self.text.clear();
        self.done = false;
    }

    /// Inner row just below the title block and body text.
    pub fn body_end(&self) -> u16 {
        let mut row = self.bounds.y.saturating_add(1);
        if !self.title.is_empty() {
            row = row.saturating_add(2);
        }
        if !self.text.is_empty() {
            row = row.saturating_add(1);
        }
        row
    }

    /// Draw the box, title and body, and the help footer if enabled.
    ///
    /// Nothing is drawn while hidden.
    pub fn draw(&self, canvas: &mut Canvas<'_>, help: &str) {
        self.draw_frame(canvas);
        self.draw_help(canvas, help);
    }

    /// Draw the box, title and body without the help footer.
    pub fn draw_frame(&self, canvas: &mut Canvas<'_>) {
        if !self.visible {
            return;
        }
        let style = self.style;
        draw::fill(canvas, self.bounds, ' ', style);
        draw::draw_border(canvas, self.bounds, style);

        let inner = self.bounds.inner();
        if inner.is_empty() {
            return;
        }
        let mut canvas = canvas.clipped(i32::from(inner.x), i32::from(inner.y), inner.width, inner.height);
        let x = i32::from(inner.x);
        let mut row = i32::from(inner.y);

        if !self.title.is_empty() {
            // Clipping truncates a title wider than the box.
            draw::draw_text(&mut canvas, &self.title, x, row, style);
            row += 1;
            draw::draw_hline(&mut canvas, x, row, inner.width, '-', style);
            row += 1;
        }
        if !self.text.is_empty() {
            draw::draw_text(&mut canvas, &self.text, x, row, style);
        }
    }

    /// Draw `help` right-aligned on the last inner row, if enabled.
    ///
    /// Modals with embedded controls call this after drawing them so the
    /// footer stays on top.
    pub fn draw_help(&self, canvas: &mut Canvas<'_>, help: &str) {
        let inner = self.bounds.inner();
        if !self.visible || !self.show_help || inner.is_empty() {
            return;
        }
        let mut canvas = canvas.clipped(i32::from(inner.x), i32::from(inner.y), inner.width, inner.height);
        let help_len = i32::try_from(help.chars().count()).unwrap_or(i32::MAX);
        let help_x = (inner.right() - help_len).max(i32::from(inner.x));
        draw::draw_text(&mut canvas, help, help_x, inner.bottom() - 1, self.style);
    }

    /// Mark the dialog answered (or active again) without touching its text.
    pub fn set_done(&mut self, done: bool) {
        if done {
            self.finish();
        } else {
            self.done = false;
        }
    }
}
