//! Input events consumed by controls.
//!
//! These types are what the widget layer sees. The terminal backend converts
//! crossterm events into them (see [`crate::terminal`]), and tests build them
//! directly.

use bitflags::bitflags;

/// Key codes for keyboard input.
///
/// A trimmed-down version of crossterm's key set: the keys controls react to
/// plus the ones an application loop commonly needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character (space included).
    Char(char),
    /// Function key (F1-F12).
    F(u8),
    /// Backspace key.
    Backspace,
    /// Enter/Return key.
    Enter,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Tab key.
    Tab,
    /// Backtab (Shift+Tab).
    BackTab,
    /// Delete key.
    Delete,
    /// Insert key.
    Insert,
    /// Escape key.
    Esc,
}

bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u8 {
        /// Shift key held.
        const SHIFT = 0b0000_0001;
        /// Control key held.
        const CONTROL = 0b0000_0010;
        /// Alt/Option key held.
        const ALT = 0b0000_0100;
        /// Super/Command/Windows key held.
        const SUPER = 0b0000_1000;
    }
}

/// A single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers held during the press.
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// A key press with no modifiers.
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// A key press with the given modifiers.
    pub const fn with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// A plain character key.
    pub const fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c))
    }

    /// A Ctrl+`c` chord.
    pub const fn ctrl(c: char) -> Self {
        Self::with_modifiers(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Whether this is Ctrl+`c` (case-insensitive).
    pub fn is_ctrl(&self, c: char) -> bool {
        self.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(self.code, KeyCode::Char(k) if k.eq_ignore_ascii_case(&c))
    }

    /// Backspace has two synonymous encodings: the Backspace key and Ctrl+H.
    pub fn is_backspace(&self) -> bool {
        self.code == KeyCode::Backspace || self.is_ctrl('h')
    }

    /// The printable character carried by this key, if any.
    ///
    /// Control/Alt chords carry none. Space and every non-control character
    /// map to themselves.
    pub fn printable(&self) -> Option<char> {
        if self
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        match self.code {
            KeyCode::Char(c) if !c.is_control() => Some(c),
            _ => None,
        }
    }

    /// The character this key inserts into a text buffer, if any.
    ///
    /// Tab inserts `'\t'`; Enter inserts `'\n'` only for multiline input.
    pub fn insertable(&self, multiline: bool) -> Option<char> {
        match self.code {
            KeyCode::Tab if self.modifiers.is_empty() => Some('\t'),
            KeyCode::Enter if multiline => Some('\n'),
            _ => self.printable(),
        }
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::new(code)
    }
}

/// Events delivered by the event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}
