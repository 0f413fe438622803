use super::*;

pub(super) fn handle_results_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('h') | KeyCode::Char('H') => state.go_home(),
        KeyCode::Char('r') | KeyCode::Char('R') => state.retake_quiz(),
        // Back to the quiz with answers intact
        KeyCode::Esc | KeyCode::Backspace => {
            state.navigator.go_back();
        }
        _ => {}
    }
}
