use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tvplayer_core::key_code;

/// Event utility functions
pub mod event_utils {
    use super::*;

    /// Check if a key event matches Ctrl+C or Ctrl+Q (terminate)
    pub fn is_terminate_event(event: &Event) -> bool {
        matches!(
            event,
            Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }) | Event::Key(KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
        )
    }
}

/// Translate a keyboard press into the remote-control key code the player
/// routes on. Keys outside the remote layout forward their character code so
/// the unhandled-key logging stays observable from the shell.
pub fn remote_key_code(key: &KeyEvent) -> Option<u16> {
    match key.code {
        KeyCode::Esc => Some(key_code::RETURN),
        KeyCode::Char('p') => Some(key_code::PLAY),
        KeyCode::Char('s') => Some(key_code::STOP),
        KeyCode::Char(' ') => Some(key_code::PAUSE),
        KeyCode::Char('r') => Some(key_code::COLOR_RED),
        KeyCode::Enter => Some(key_code::ENTER),
        KeyCode::Char(ch) if ch.is_ascii() => Some(ch as u16),
        _ => None,
    }
}
