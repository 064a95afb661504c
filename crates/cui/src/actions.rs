use crate::app::App;
use crate::input::InputAction;
use roshambo_core::Move;

pub fn dispatch(app: &mut App, action: InputAction) {
    match action {
        InputAction::None => {}
        InputAction::Quit => app.should_quit = true,
        InputAction::ToggleHelp => app.show_help = !app.show_help,
        InputAction::NextFocus => app.cycle_focus(true),
        InputAction::PrevFocus => app.cycle_focus(false),
        InputAction::MoveUp => app.move_cursor(false),
        InputAction::MoveDown => app.move_cursor(true),
        InputAction::SelectRock => app.select_move(Move::Rock),
        InputAction::SelectPaper => app.select_move(Move::Paper),
        InputAction::SelectScissors => app.select_move(Move::Scissors),
        InputAction::SelectAtCursor => app.select_at_cursor(),
        InputAction::PlayRound => app.play_round(),
        InputAction::ToggleAutoPlay => app.toggle_auto_play(),
        InputAction::ResetSession => app.reset_session(),
        InputAction::Dismiss => {
            if app.show_help {
                app.show_help = false;
            }
        }
    }
}
