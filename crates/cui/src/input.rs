use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    ToggleHelp,
    NextFocus,
    PrevFocus,
    MoveUp,
    MoveDown,
    SelectRock,
    SelectPaper,
    SelectScissors,
    SelectAtCursor,
    PlayRound,
    ToggleAutoPlay,
    ResetSession,
    Dismiss,
}

pub fn map_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::Dismiss,
        KeyCode::Tab => InputAction::NextFocus,
        KeyCode::BackTab => InputAction::PrevFocus,
        KeyCode::Up => InputAction::MoveUp,
        KeyCode::Down => InputAction::MoveDown,
        KeyCode::Enter => InputAction::PlayRound,
        KeyCode::Char(' ') => InputAction::SelectAtCursor,
        KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Char('?') => InputAction::ToggleHelp,
        KeyCode::Char('k') => InputAction::MoveUp,
        KeyCode::Char('j') => InputAction::MoveDown,
        KeyCode::Char('r') | KeyCode::Char('1') => InputAction::SelectRock,
        KeyCode::Char('p') | KeyCode::Char('2') => InputAction::SelectPaper,
        KeyCode::Char('s') | KeyCode::Char('3') => InputAction::SelectScissors,
        KeyCode::Char('a') => InputAction::ToggleAutoPlay,
        KeyCode::Char('x') => InputAction::ResetSession,
        _ => InputAction::None,
    }
}
