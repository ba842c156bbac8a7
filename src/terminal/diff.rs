//! Frame diffing: turn the change between two buffers into ANSI output.
//!
//! Only cells that differ are emitted. Cursor moves are skipped for adjacent
//! cells on the same row, and colors are only re-sent when they change.

use super::output::OutputBuffer;
use crate::buffer::{Buffer, Cell, Rgb};

/// What the terminal is known to be showing right now.
#[derive(Debug, Clone, Default)]
pub struct DiffState {
    /// Cursor position after the last glyph, `None` when unknown.
    cursor: Option<(u16, u16)>,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
}

impl DiffState {
    /// Terminal state is unknown.
    pub const fn new() -> Self {
        Self {
            cursor: None,
            fg: None,
            bg: None,
        }
    }

    /// Forget everything, e.g. after the screen was cleared or restored.
    pub const fn reset(&mut self) {
        *self = Self::new();
    }

    fn emit(&mut self, out: &mut OutputBuffer, x: u16, y: u16, cell: &Cell) -> DiffStats {
        let mut stats = DiffStats {
            cells_changed: 1,
            ..DiffStats::default()
        };
        if self.cursor != Some((x, y)) {
            out.cursor_move(x, y);
            stats.cursor_moves += 1;
        }
        if self.fg != Some(cell.fg()) {
            out.set_fg(cell.fg());
            self.fg = Some(cell.fg());
            stats.color_changes += 1;
        }
        if self.bg != Some(cell.bg()) {
            out.set_bg(cell.bg());
            self.bg = Some(cell.bg());
            stats.color_changes += 1;
        }
        out.push_char(cell.ch());
        self.cursor = x.checked_add(1).map(|next| (next, y));
        stats
    }
}

/// Counters from one diff pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Cells written.
    pub cells_changed: usize,
    /// Explicit cursor moves emitted.
    pub cursor_moves: usize,
    /// Color sequences emitted.
    pub color_changes: usize,
}

impl std::ops::AddAssign for DiffStats {
    fn add_assign(&mut self, rhs: Self) {
        self.cells_changed += rhs.cells_changed;
        self.cursor_moves += rhs.cursor_moves;
        self.color_changes += rhs.color_changes;
    }
}

/// Emit the cells of `next` that differ from `current`.
///
/// Both buffers must have the same size.
pub fn render_diff(current: &Buffer, next: &Buffer, out: &mut OutputBuffer, state: &mut DiffState) -> DiffStats {
    debug_assert_eq!(current.width(), next.width());
    debug_assert_eq!(current.height(), next.height());

    let mut stats = DiffStats::default();
    for ((y, old_row), new_row) in (0u16..).zip(current.rows()).zip(next.rows()) {
        for ((x, old), new) in (0u16..).zip(old_row).zip(new_row) {
            if old != new {
                stats += state.emit(out, x, y, new);
            }
        }
    }
    stats
}

/// Emit every cell of `buffer`, for the first frame or after a resize.
pub fn render_full(buffer: &Buffer, out: &mut OutputBuffer, state: &mut DiffState) -> DiffStats {
    state.reset();
    out.cursor_hide();
    out.reset_attrs();
    out.clear_screen();

    let mut stats = DiffStats::default();
    for (y, row) in (0u16..).zip(buffer.rows()) {
        for (x, cell) in (0u16..).zip(row) {
            stats += state.emit(out, x, y, cell);
        }
    }
    stats
}
