//! Buffer: A grid of cells representing the terminal screen.
//!
//! Cells are stored contiguously in row-major order. Widgets never write to
//! a `Buffer` directly; they go through a [`Canvas`](super::Canvas), which
//! translates and clips their coordinates.

use super::cell::{Cell, Style};

/// A grid of cells representing the terminal screen.
///
/// Access is in row-major order: `index = y * width + x`.
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Width in columns.
    width: u16,
    /// Height in rows.
    height: u16,
}

impl Buffer {
    /// Create a new buffer with the given dimensions.
    ///
    /// All cells are initialized to empty (space with default colors).
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "Buffer dimensions must be non-zero");
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![Cell::EMPTY; size],
            width,
            height,
        }
    }

    /// Get the buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the buffer is empty (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a reference to the underlying cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert signed (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates fall outside the grid.
    #[inline]
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x < self.width as usize && y < self.height as usize {
            Some(y * (self.width as usize) + x)
        } else {
            None
        }
    }

    /// Get a reference to a cell at (x, y).
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Set a cell at (x, y).
    ///
    /// Returns `false` if coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Set the glyph and colors of the cell at (x, y).
    ///
    /// This is the render sink every widget ends up calling. Out of range
    /// coordinates are silently dropped and reported as `false`.
    #[inline]
    pub fn set_cell(&mut self, x: i32, y: i32, ch: char, style: Style) -> bool {
        self.set(x, y, Cell::styled(ch, style))
    }

    /// Glyph at (x, y), or `None` if out of range.
    #[inline]
    pub fn char_at(&self, x: i32, y: i32) -> Option<char> {
        self.get(x, y).map(Cell::ch)
    }

    /// The glyphs of row `y` as a string (empty if out of range).
    pub fn row_text(&self, y: u16) -> String {
        self.rows()
            .nth(y as usize)
            .map(|row| row.iter().map(Cell::ch).collect())
            .unwrap_or_default()
    }

    /// Fill the entire buffer with one cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Clear the entire buffer (fill with empty cells).
    pub fn clear(&mut self) {
        self.fill(Cell::EMPTY);
    }

    /// Resize the buffer, preserving content where possible.
    ///
    /// New cells are initialized to empty.
    pub fn resize(&mut self, new_width: u16, new_height: u16) {
        if new_width == self.width && new_height == self.height {
            return;
        }
        let new_width = new_width.max(1);
        let new_height = new_height.max(1);

        let mut new_cells = vec![Cell::EMPTY; (new_width as usize) * (new_height as usize)];
        let copy_width = self.width.min(new_width) as usize;
        let copy_height = self.height.min(new_height) as usize;

        for y in 0..copy_height {
            let old_start = y * (self.width as usize);
            let new_start = y * (new_width as usize);
            new_cells[new_start..new_start + copy_width]
                .copy_from_slice(&self.cells[old_start..old_start + copy_width]);
        }

        self.cells = new_cells;
        self.width = new_width;
        self.height = new_height;
    }

    /// Get an iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Buffer {}x{}", self.width, self.height)?;
        for row in self.rows() {
            let line: String = row.iter().map(Cell::ch).collect();
            writeln!(f, "|{line}|")?;
        }
        Ok(())
    }
}
