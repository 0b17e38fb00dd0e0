//! Key mapping from terminal events to intents.

use crate::types::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to an intent.
pub fn intent_for_key(key: KeyEvent) -> Option<Intent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Intent::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Intent::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Intent::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Intent::SoftDrop)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Intent::Rotate)
        }

        KeyCode::Char(' ') => Some(Intent::Restart),

        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Intent::Quit),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Left)),
            Some(Intent::MoveLeft)
        );
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Right)),
            Some(Intent::MoveRight)
        );
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Down)),
            Some(Intent::SoftDrop)
        );
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Up)),
            Some(Intent::Rotate)
        );
    }

    #[test]
    fn test_letter_aliases() {
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Char('H'))),
            Some(Intent::MoveLeft)
        );
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Char('d'))),
            Some(Intent::MoveRight)
        );
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Char('j'))),
            Some(Intent::SoftDrop)
        );
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Char('W'))),
            Some(Intent::Rotate)
        );
    }

    #[test]
    fn test_restart_and_quit() {
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(Intent::Restart)
        );
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Char('q'))),
            Some(Intent::Quit)
        );
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Esc)),
            Some(Intent::Quit)
        );
        assert_eq!(
            intent_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Intent::Quit)
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(intent_for_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(intent_for_key(KeyEvent::from(KeyCode::Char('c'))), None);
        assert_eq!(intent_for_key(KeyEvent::from(KeyCode::Enter)), None);
    }
}
