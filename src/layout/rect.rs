//! Rect: position and size of a control.

/// A rectangle defined by position and size.
///
/// Controls inside a container store positions relative to the container's
/// content origin; top-level controls store screen positions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate (column) of the top-left corner.
    pub x: u16,
    /// Y coordinate (row) of the top-left corner.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Zero-sized rectangle.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Check if the rectangle is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x as i32 + self.width as i32
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y as i32 + self.height as i32
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x as i32 && x < self.right() && y >= self.y as i32 && y < self.bottom()
    }

    /// Whether any cell of this rectangle falls inside the window
    /// `[left, left + width) x [top, top + height)`.
    #[inline]
    pub const fn overlaps(&self, left: i32, top: i32, width: u16, height: u16) -> bool {
        !self.is_empty()
            && width > 0
            && height > 0
            && (self.x as i32) < left + width as i32
            && self.right() > left
            && (self.y as i32) < top + height as i32
            && self.bottom() > top
    }

    /// The area left after reserving a one-cell border on every side.
    ///
    /// Collapses to an empty rectangle when there is no room for content.
    #[inline]
    #[must_use]
    pub const fn inner(&self) -> Self {
        Self::new(
            self.x.saturating_add(1),
            self.y.saturating_add(1),
            self.width.saturating_sub(2),
            self.height.saturating_sub(2),
        )
    }

    /// Same size at a new position.
    #[inline]
    #[must_use]
    pub const fn with_position(&self, x: u16, y: u16) -> Self {
        Self::new(x, y, self.width, self.height)
    }

    /// Same position with a new size.
    #[inline]
    #[must_use]
    pub const fn with_size(&self, width: u16, height: u16) -> Self {
        Self::new(self.x, self.y, width, height)
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(2, 3, 4, 5);
        assert_eq!(r.right(), 6);
        assert_eq!(r.bottom(), 8);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 7));
        assert!(!r.contains(6, 7));
    }

    #[test]
    fn test_rect_inner() {
        assert_eq!(Rect::new(0, 0, 10, 4).inner(), Rect::new(1, 1, 8, 2));
        assert!(Rect::new(0, 0, 2, 2).inner().is_empty());
        assert!(Rect::new(0, 0, 1, 5).inner().is_empty());
    }

    #[test]
    fn test_rect_overlaps_window() {
        let r = Rect::new(2, 3, 5, 1);
        assert!(r.overlaps(0, 0, 10, 10));
        assert!(r.overlaps(6, 3, 10, 1));
        assert!(!r.overlaps(7, 3, 10, 1));
        assert!(!r.overlaps(0, 4, 10, 10));
        assert!(!Rect::new(2, 3, 0, 1).overlaps(0, 0, 10, 10));
    }
}
