//! Key mapping from terminal events to game actions.

use crate::types::{GameAction, InputEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if should_quit(key) {
        return Some(GameAction::Quit);
    }

    match key.code {
        KeyCode::Down => Some(GameAction::DropBomb),
        KeyCode::Char(' ') => Some(GameAction::FireGun),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(GameAction::Help),
        _ => None,
    }
}

/// Map a key press into the event the game loop dispatches on.
pub fn map_key(key: KeyEvent) -> InputEvent {
    match handle_key_event(key) {
        Some(action) => InputEvent::Action(action),
        None => InputEvent::Other,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_weapon_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::DropBomb)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::FireGun)
        );
    }

    #[test]
    fn test_overlay_keys_are_case_insensitive() {
        for c in ['p', 'P'] {
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Char(c))),
                Some(GameAction::Pause)
            );
        }
        for c in ['h', 'H'] {
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Char(c))),
                Some(GameAction::Help)
            );
        }
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('q'))),
            Some(GameAction::Quit)
        );
    }

    #[test]
    fn test_unbound_keys_map_to_other() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), InputEvent::Other);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), InputEvent::Other);
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Down)),
            InputEvent::Action(GameAction::DropBomb)
        );
    }
}
