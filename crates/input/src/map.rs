//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::MoveUp),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::MoveDown),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),

        // Teleports
        KeyCode::Char('c') | KeyCode::Char('C') => Some(GameAction::TeleportCusp),
        KeyCode::Char('l') | KeyCode::Char('L') => Some(GameAction::TeleportConsciousness),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(GameAction::TeleportMemory),

        // Actions
        KeyCode::Char(' ') => Some(GameAction::ShowInfo),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(GameAction::ToggleGeometry),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
