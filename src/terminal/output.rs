//! `OutputBuffer`: one frame's worth of ANSI output, flushed in one write.

use crate::buffer::Rgb;
use std::io::Write;

/// Accumulates escape sequences and glyphs for a single draw pass.
///
/// Nothing reaches the terminal until [`flush_to`](Self::flush_to), so a
/// frame is never half-written.
#[derive(Debug, Clone, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Drop the contents, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The bytes accumulated so far.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Number of bytes accumulated.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether nothing has been written.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write one glyph.
    #[inline]
    pub fn push_char(&mut self, ch: char) {
        let mut utf8 = [0; 4];
        self.data.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
    }

    /// Move the cursor to 0-indexed (x, y), using the shortest form.
    pub fn cursor_move(&mut self, x: u16, y: u16) {
        let row = u32::from(y) + 1;
        let col = u32::from(x) + 1;
        // Writing into a Vec cannot fail.
        let _ = match (row, col) {
            (1, 1) => self.data.write_all(b"\x1b[H"),
            (_, 1) => write!(self.data, "\x1b[{row}H"),
            _ => write!(self.data, "\x1b[{row};{col}H"),
        };
    }

    /// Set the foreground color (true color).
    #[inline]
    pub fn set_fg(&mut self, color: Rgb) {
        let _ = write!(self.data, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b);
    }

    /// Set the background color (true color).
    #[inline]
    pub fn set_bg(&mut self, color: Rgb) {
        let _ = write!(self.data, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b);
    }

    /// Hide the terminal cursor.
    #[inline]
    pub fn cursor_hide(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25l");
    }

    /// Reset colors to the terminal defaults.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Clear the whole screen.
    #[inline]
    pub fn clear_screen(&mut self) {
        self.data.extend_from_slice(b"\x1b[2J");
    }

    /// Write everything to `writer` and flush it.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_move_short_forms() {
        let mut out = OutputBuffer::default();
        out.cursor_move(0, 0);
        assert_eq!(out.as_bytes(), b"\x1b[H");

        out.clear();
        out.cursor_move(0, 5);
        assert_eq!(out.as_bytes(), b"\x1b[6H");

        out.clear();
        out.cursor_move(10, 5);
        assert_eq!(out.as_bytes(), b"\x1b[6;11H");
    }

    #[test]
    fn test_colors_and_glyphs() {
        let mut out = OutputBuffer::with_capacity(64);
        out.set_fg(Rgb::new(1, 2, 3));
        out.set_bg(Rgb::new(4, 5, 6));
        out.push_char('é');
        assert_eq!(out.as_bytes(), "\x1b[38;2;1;2;3m\x1b[48;2;4;5;6mé".as_bytes());
    }

    #[test]
    fn test_flush_writes_everything() {
        let mut out = OutputBuffer::default();
        out.clear_screen();
        out.push_char('x');
        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"\x1b[2Jx");
        assert_eq!(out.len(), 5);
    }
}
