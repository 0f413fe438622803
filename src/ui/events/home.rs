use super::*;

pub(super) fn handle_home_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('p') | KeyCode::Char('P') => state.navigator.navigate(Route::Profile),
        KeyCode::Char('r') | KeyCode::Char('R') => state.retake_quiz(),
        KeyCode::Esc | KeyCode::Backspace => {
            state.navigator.go_back();
        }
        _ => {}
    }
}
