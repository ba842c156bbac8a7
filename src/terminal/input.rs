//! Conversion from crossterm events to [`Event`].

use crate::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::event::{self as ct, KeyEventKind};

/// Convert a crossterm event.
///
/// Only key presses and resizes are kept; releases, repeats, mouse, focus
/// and paste events return `None`.
pub fn convert_event(event: ct::Event) -> Option<Event> {
    match event {
        ct::Event::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return None;
            }
            let code = convert_key_code(key.code)?;
            Some(Event::Key(KeyEvent::with_modifiers(code, convert_modifiers(key.modifiers))))
        }
        ct::Event::Resize(width, height) => Some(Event::Resize { width, height }),
        _ => None,
    }
}

fn convert_key_code(code: ct::KeyCode) -> Option<KeyCode> {
    Some(match code {
        ct::KeyCode::Char(c) => KeyCode::Char(c),
        ct::KeyCode::F(n) => KeyCode::F(n),
        ct::KeyCode::Backspace => KeyCode::Backspace,
        ct::KeyCode::Enter => KeyCode::Enter,
        ct::KeyCode::Left => KeyCode::Left,
        ct::KeyCode::Right => KeyCode::Right,
        ct::KeyCode::Up => KeyCode::Up,
        ct::KeyCode::Down => KeyCode::Down,
        ct::KeyCode::Home => KeyCode::Home,
        ct::KeyCode::End => KeyCode::End,
        ct::KeyCode::PageUp => KeyCode::PageUp,
        ct::KeyCode::PageDown => KeyCode::PageDown,
        ct::KeyCode::Tab => KeyCode::Tab,
        ct::KeyCode::BackTab => KeyCode::BackTab,
        ct::KeyCode::Delete => KeyCode::Delete,
        ct::KeyCode::Insert => KeyCode::Insert,
        ct::KeyCode::Esc => KeyCode::Esc,
        _ => return None,
    })
}

fn convert_modifiers(mods: ct::KeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    out.set(KeyModifiers::SHIFT, mods.contains(ct::KeyModifiers::SHIFT));
    out.set(KeyModifiers::CONTROL, mods.contains(ct::KeyModifiers::CONTROL));
    out.set(KeyModifiers::ALT, mods.contains(ct::KeyModifiers::ALT));
    out.set(KeyModifiers::SUPER, mods.contains(ct::KeyModifiers::SUPER));
    out
}
