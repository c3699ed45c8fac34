//! Player key bindings

use crate::player::Speed;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Action requested from the player screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    TogglePlay,
    /// Pause, then step forward
    StepForward,
    /// Pause, then step back
    StepBack,
    Reset,
    Faster,
    Slower,
    SetSpeed(Speed),
    First,
    Last,
    NextCodeTab,
    PrevCodeTab,
    ToggleCode,
    OpenGoto,
    ToggleHelp,
    Back,
    Quit,
}

/// Translate a key press into a player command
pub fn command_for_key(key: KeyEvent) -> Option<PlayerCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(PlayerCommand::Quit),
            _ => None,
        };
    }

    let command = match key.code {
        KeyCode::Char(' ') => PlayerCommand::TogglePlay,
        KeyCode::Right | KeyCode::Char('l') => PlayerCommand::StepForward,
        KeyCode::Left | KeyCode::Char('h') => PlayerCommand::StepBack,
        KeyCode::Char('r') => PlayerCommand::Reset,
        KeyCode::Char('+') | KeyCode::Char('=') => PlayerCommand::Faster,
        KeyCode::Char('-') | KeyCode::Char('_') => PlayerCommand::Slower,
        KeyCode::Char('1') => PlayerCommand::SetSpeed(Speed::Half),
        KeyCode::Char('2') => PlayerCommand::SetSpeed(Speed::Normal),
        KeyCode::Char('3') => PlayerCommand::SetSpeed(Speed::Double),
        KeyCode::Home => PlayerCommand::First,
        KeyCode::End => PlayerCommand::Last,
        KeyCode::Tab => PlayerCommand::NextCodeTab,
        KeyCode::BackTab => PlayerCommand::PrevCodeTab,
        KeyCode::Char('c') => PlayerCommand::ToggleCode,
        KeyCode::Char('g') | KeyCode::Char(':') => PlayerCommand::OpenGoto,
        KeyCode::Char('?') => PlayerCommand::ToggleHelp,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => PlayerCommand::Back,
        KeyCode::Char('q') | KeyCode::Char('Q') => PlayerCommand::Quit,
        _ => return None,
    };
    Some(command)
}
