//! The `Control` trait every widget implements.

use crate::buffer::Canvas;
use crate::event::KeyEvent;
use crate::layout::Rect;

/// A UI component that can be drawn onto a canvas and handle key presses.
///
/// Containers hold controls as `Box<dyn Control>` and treat them uniformly:
/// they position them through [`set_bounds`](Control::set_bounds), forward
/// keys to the active one, and draw them in insertion order.
pub trait Control {
    /// Position and size of this control, relative to its owner.
    fn bounds(&self) -> Rect;

    /// Move or resize this control.
    fn set_bounds(&mut self, bounds: Rect);

    /// Handle a key press.
    ///
    /// Returns `true` if the key was consumed, `false` if the owner should
    /// keep routing it.
    fn handle_key(&mut self, key: &KeyEvent) -> bool;

    /// Draw this control at its bounds in `canvas`'s local coordinates.
    fn draw(&self, canvas: &mut Canvas<'_>);

    /// Whether a container may make this control the active one.
    fn is_focusable(&self) -> bool {
        true
    }

    /// Told by the owning container when the control gains or loses focus.
    fn set_focused(&mut self, _focused: bool) {}

    /// X position.
    fn x(&self) -> u16 {
        self.bounds().x
    }

    /// Y position.
    fn y(&self) -> u16 {
        self.bounds().y
    }

    /// Width in columns.
    fn width(&self) -> u16 {
        self.bounds().width
    }

    /// Height in rows.
    fn height(&self) -> u16 {
        self.bounds().height
    }

    /// Move without resizing.
    fn set_position(&mut self, x: u16, y: u16) {
        let bounds = self.bounds().with_position(x, y);
        self.set_bounds(bounds);
    }
}
