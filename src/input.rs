//! Input module - keyboard mapping for game controls
//!
//! Bindings follow the classic layout: arrows move, Up rotates
//! counter-clockwise, Down rotates clockwise, Space drops the figure.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Command;

/// Map keyboard input to session commands
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(Command::MoveRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(Command::RotateCcw),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(Command::RotateCw),
        KeyCode::Char(' ') => Some(Command::HardDrop),
        _ => None,
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
