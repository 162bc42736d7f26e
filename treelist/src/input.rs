//! Input conversion - crossterm key events to tree key combos.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::trace;

use crate::keybinds::{Key, KeyCombo, Modifiers};

/// Convert crossterm KeyModifiers to tree Modifiers
pub fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        shift: mods.contains(KeyModifiers::SHIFT),
        alt: mods.contains(KeyModifiers::ALT),
    }
}

/// Convert crossterm KeyCode to tree Key
fn convert_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::Delete => Some(Key::Delete),
        _ => None,
    }
}

/// Convert a crossterm KeyEvent to a KeyCombo.
///
/// Only press events convert; release and repeat events return `None`.
pub fn convert_key_event(event: KeyEvent) -> Option<KeyCombo> {
    trace!(
        "Key event: code={:?}, modifiers={:?}, kind={:?}",
        event.code, event.modifiers, event.kind
    );
    if event.kind != KeyEventKind::Press {
        return None;
    }
    let key = convert_key(event.code)?;
    Some(KeyCombo::new(key, convert_modifiers(event.modifiers)))
}
