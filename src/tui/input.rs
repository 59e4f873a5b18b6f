// Terminal key events to reducer keys

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::{Direction, Key};

/// Maps a crossterm key event onto a reducer key. Release/repeat events and unbound keys map
/// to `None`. `h` opens help; moving left is `Left` or `Shift+Tab`.
pub fn translate_key(key: KeyEvent) -> Option<Key> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Key::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char('q') => Some(Key::Quit),
        KeyCode::Char('?') | KeyCode::Char('h') => Some(Key::ToggleHelp),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Char('r') => Some(Key::Refresh),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
            Some(Key::Navigate(Direction::Forward))
        }
        KeyCode::BackTab | KeyCode::Left => Some(Key::Navigate(Direction::Backward)),
        KeyCode::Down | KeyCode::Char('j') => Some(Key::Navigate(Direction::Down)),
        KeyCode::Up | KeyCode::Char('k') => Some(Key::Navigate(Direction::Up)),
        _ => None,
    }
}
