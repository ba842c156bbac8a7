//! Canvas: a translated, clipped view onto a [`Buffer`].
//!
//! Containers hand their children a canvas whose origin is the container's
//! content origin (minus any scroll offset) and whose clip is the container's
//! content area. Children keep drawing at their own relative coordinates and
//! never have their stored position touched.

use super::{Buffer, Style};

/// Absolute clip rectangle, half-open on the right/bottom edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Clip {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Clip {
    const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    fn intersect(self, other: Self) -> Self {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        Self {
            left,
            top,
            right: self.right.min(other.right).max(left),
            bottom: self.bottom.min(other.bottom).max(top),
        }
    }
}

/// A drawing surface with its own origin and clip region.
pub struct Canvas<'a> {
    buffer: &'a mut Buffer,
    origin_x: i32,
    origin_y: i32,
    clip: Clip,
}

impl<'a> Canvas<'a> {
    /// A canvas covering the whole buffer, origin at (0, 0).
    pub fn new(buffer: &'a mut Buffer) -> Self {
        let clip = Clip {
            left: 0,
            top: 0,
            right: i32::from(buffer.width()),
            bottom: i32::from(buffer.height()),
        };
        Self {
            buffer,
            origin_x: 0,
            origin_y: 0,
            clip,
        }
    }

    /// Absolute position of this canvas's local (0, 0).
    pub const fn origin(&self) -> (i32, i32) {
        (self.origin_x, self.origin_y)
    }

    /// A child view whose local (0, 0) sits at local `(dx, dy)` of this one.
    pub fn translated(&mut self, dx: i32, dy: i32) -> Canvas<'_> {
        Canvas {
            origin_x: self.origin_x + dx,
            origin_y: self.origin_y + dy,
            clip: self.clip,
            buffer: &mut *self.buffer,
        }
    }

    /// A child view restricted to the given local rectangle.
    ///
    /// The clip only ever shrinks: a child can never draw outside its parent.
    pub fn clipped(&mut self, x: i32, y: i32, width: u16, height: u16) -> Canvas<'_> {
        let left = self.origin_x + x;
        let top = self.origin_y + y;
        let area = Clip {
            left,
            top,
            right: left + i32::from(width),
            bottom: top + i32::from(height),
        };
        Canvas {
            origin_x: self.origin_x,
            origin_y: self.origin_y,
            clip: self.clip.intersect(area),
            buffer: &mut *self.buffer,
        }
    }

    /// Whether local (x, y) lands inside the clip region.
    pub const fn is_visible(&self, x: i32, y: i32) -> bool {
        self.clip.contains(self.origin_x + x, self.origin_y + y)
    }

    /// Write one cell at local (x, y).
    ///
    /// Returns `false` when the cell is clipped.
    pub fn set_cell(&mut self, x: i32, y: i32, ch: char, style: Style) -> bool {
        let ax = self.origin_x + x;
        let ay = self.origin_y + y;
        if !self.clip.contains(ax, ay) {
            return false;
        }
        self.buffer.set_cell(ax, ay, ch, style)
    }
}

impl std::fmt::Debug for Canvas<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("origin", &(self.origin_x, self.origin_y))
            .field("clip", &self.clip)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_translates() {
        let mut buffer = Buffer::new(20, 10);
        {
            let mut canvas = Canvas::new(&mut buffer);
            let mut child = canvas.translated(10, 10);
            assert_eq!(child.origin(), (10, 10));
            assert!(!child.set_cell(2, 3, 'A', Style::DEFAULT));
            let mut inner = canvas.translated(5, 2);
            assert!(inner.set_cell(2, 3, 'B', Style::DEFAULT));
        }
        assert_eq!(buffer.char_at(7, 5), Some('B'));
    }

    #[test]
    fn test_canvas_clip_shrinks_only() {
        let mut buffer = Buffer::new(20, 10);
        {
            let mut canvas = Canvas::new(&mut buffer);
            let mut clipped = canvas.clipped(2, 2, 4, 3);
            assert!(clipped.set_cell(2, 2, 'x', Style::DEFAULT));
            assert!(clipped.set_cell(5, 4, 'y', Style::DEFAULT));
            assert!(!clipped.set_cell(6, 4, 'z', Style::DEFAULT));
            assert!(!clipped.set_cell(1, 2, 'z', Style::DEFAULT));

            // A wider nested clip cannot escape its parent.
            let mut nested = clipped.clipped(0, 0, 20, 10);
            assert!(!nested.set_cell(0, 0, 'z', Style::DEFAULT));
            assert!(nested.is_visible(3, 3));
        }
        assert_eq!(buffer.char_at(2, 2), Some('x'));
        assert_eq!(buffer.char_at(5, 4), Some('y'));
        assert_eq!(buffer.char_at(6, 4), Some(' '));
    }

    #[test]
    fn test_canvas_negative_coordinates_are_clipped() {
        let mut buffer = Buffer::new(4, 4);
        let mut canvas = Canvas::new(&mut buffer);
        let mut shifted = canvas.translated(-3, -3);
        assert!(!shifted.set_cell(0, 0, 'n', Style::DEFAULT));
        assert!(shifted.set_cell(3, 3, 'p', Style::DEFAULT));
    }
}
