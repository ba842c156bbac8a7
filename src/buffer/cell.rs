//! Cell: The atomic unit of terminal display.
//!
//! A cell is one glyph plus a foreground/background pair. Colors are opaque
//! to the widgets: they are passed through untouched, and the only operation
//! widgets perform on them is swapping fg/bg (block cursor, selection).

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Pure red.
    pub const RED: Self = Self::new(205, 49, 49);
    /// Pure green.
    pub const GREEN: Self = Self::new(13, 188, 121);
    /// Pure blue.
    pub const BLUE: Self = Self::new(36, 114, 200);
    /// Mid gray, used for disabled content.
    pub const GRAY: Self = Self::new(128, 128, 128);
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// A foreground/background color pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    /// Glyph color.
    pub fg: Rgb,
    /// Cell color.
    pub bg: Rgb,
}

impl Style {
    /// Create a style from a foreground and background color.
    #[inline]
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self { fg, bg }
    }

    /// White on black.
    pub const DEFAULT: Self = Self::new(Rgb::WHITE, Rgb::BLACK);

    /// The same pair with foreground and background swapped.
    #[inline]
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.bg, self.fg)
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Debug for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} on {:?}", self.fg, self.bg)
    }
}

/// A single terminal cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Glyph shown in the cell.
    ch: char,
    /// Foreground and background.
    style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// An empty cell (space character with default colors).
    pub const EMPTY: Self = Self {
        ch: ' ',
        style: Style::DEFAULT,
    };

    /// Create a new cell with default colors.
    #[inline]
    pub const fn new(ch: char) -> Self {
        Self {
            ch,
            style: Style::DEFAULT,
        }
    }

    /// Create a cell with an explicit style.
    #[inline]
    pub const fn styled(ch: char, style: Style) -> Self {
        Self { ch, style }
    }

    /// Get the glyph.
    #[inline]
    pub const fn ch(&self) -> char {
        self.ch
    }

    /// Get the style.
    #[inline]
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Get the foreground color.
    #[inline]
    pub const fn fg(&self) -> Rgb {
        self.style.fg
    }

    /// Get the background color.
    #[inline]
    pub const fn bg(&self) -> Rgb {
        self.style.bg
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.style.fg = fg;
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.style.bg = bg;
        self
    }

    /// Reset the cell to empty (space with default colors).
    #[inline]
    pub const fn reset(&mut self) {
        *self = Self::EMPTY;
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("ch", &self.ch)
            .field("style", &self.style)
            .finish()
    }
}
