use super::*;
use crate::habits::Trigger;
use crate::quiz::{QuizOutcome, QuizStep};
use crate::ui::state::QuizScreenState;
use crate::ui::widgets::Slider;

pub(super) fn handle_quiz_key(key: KeyEvent, state: &mut AppState) {
    let step = state.quiz.progress.current_step();

    match key.code {
        // Primary control: Next / Complete
        KeyCode::Enter => {
            if let QuizOutcome::Completed(habits) = state.quiz.progress.advance() {
                state.show_results(habits);
            } else {
                tracing::debug!(step = state.quiz.progress.current_step().number(), "quiz step");
            }
        }
        KeyCode::Esc | KeyCode::Backspace => state.quiz.progress.go_back(),
        code if step == QuizStep::Triggers => handle_trigger_key(code, &mut state.quiz),
        code => {
            if let Some(delta) = Slider::key_delta(code) {
                state.quiz.progress.nudge_slider(delta);
            }
        }
    }
}

fn handle_trigger_key(code: KeyCode, quiz: &mut QuizScreenState) {
    match code {
        KeyCode::Down | KeyCode::Tab => quiz.cursor_down(),
        KeyCode::Up | KeyCode::BackTab => quiz.cursor_up(),
        KeyCode::Char(' ') => {
            if let Some(trigger) = Trigger::from_index(quiz.trigger_cursor) {
                quiz.progress.select_trigger(trigger);
            }
        }
        // Direct toggle by catalog position
        KeyCode::Char(c @ '1'..='8') => {
            if let Some(trigger) = Trigger::from_index((c as usize) - ('1' as usize)) {
                quiz.trigger_cursor = trigger.to_index();
                quiz.progress.select_trigger(trigger);
            }
        }
        _ => {}
    }
}
