use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    Restart,
    Quit,
    None,
}

/// Map a terminal key event to what the game should do with it.
pub fn key_action(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

        KeyCode::Up => KeyAction::Turn(Direction::Up),
        KeyCode::Down => KeyAction::Turn(Direction::Down),
        KeyCode::Left => KeyAction::Turn(Direction::Left),
        KeyCode::Right => KeyAction::Turn(Direction::Right),

        // Vim movement (k/j/h/l) → Up/Down/Left/Right
        KeyCode::Char('k') => KeyAction::Turn(Direction::Up),
        KeyCode::Char('j') => KeyAction::Turn(Direction::Down),
        KeyCode::Char('h') => KeyAction::Turn(Direction::Left),
        KeyCode::Char('l') => KeyAction::Turn(Direction::Right),

        KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Turn(Direction::Up),
        KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Turn(Direction::Down),
        KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Turn(Direction::Left),
        KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Turn(Direction::Right),

        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => KeyAction::Restart,

        _ => KeyAction::None,
    }
}
