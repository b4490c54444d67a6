//! Key mapping from terminal events to host commands.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Game(GameAction),
    /// Shorten the tick interval.
    Faster,
    /// Lengthen the tick interval.
    Slower,
}

/// Map keyboard input to host commands.
pub fn handle_key_event(key: KeyEvent) -> Option<InputCommand> {
    let action = match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => GameAction::MoveLeft,
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => GameAction::MoveRight,

        // Round control
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => GameAction::Pause,
        KeyCode::Char('r') | KeyCode::Char('R') => GameAction::Reset,

        // Pacing
        KeyCode::Char('+') | KeyCode::Char('=') => return Some(InputCommand::Faster),
        KeyCode::Char('-') | KeyCode::Char('_') => return Some(InputCommand::Slower),

        _ => return None,
    };
    Some(InputCommand::Game(action))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
