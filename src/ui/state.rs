// Application state management

use crate::habits::{SmokingHabits, TRIGGERS};
use crate::home::HomeStats;
use crate::navigation::{Navigator, Route, ScreenName};
use crate::quiz::QuizProgress;

/// Quiz screen state: answers plus the highlighted row of the trigger list.
#[derive(Debug, Clone, Default)]
pub struct QuizScreenState {
    pub progress: QuizProgress,
    pub trigger_cursor: usize,
}

impl QuizScreenState {
    pub fn cursor_down(&mut self) {
        self.trigger_cursor = (self.trigger_cursor + 1) % TRIGGERS.len();
    }

    pub fn cursor_up(&mut self) {
        self.trigger_cursor = (self.trigger_cursor + TRIGGERS.len() - 1) % TRIGGERS.len();
    }
}

pub struct AppState {
    pub navigator: Navigator,
    pub quiz: QuizScreenState,
    pub home: HomeStats,
    /// Most recent quiz result, kept for `--print-results`
    pub last_result: Option<SmokingHabits>,
    /// Shown in the home header
    pub app_version: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            navigator: Navigator::default(),
            quiz: QuizScreenState::default(),
            home: HomeStats::default(),
            last_result: None, // Set when the quiz completes
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl AppState {
    pub fn current_screen(&self) -> ScreenName {
        self.navigator.current().name()
    }

    /// Hand a completed quiz to the results screen.
    pub fn show_results(&mut self, habits: SmokingHabits) {
        self.last_result = Some(habits.clone());
        self.navigator.navigate(Route::QuizResults {
            smoking_habits: habits,
        });
    }

    /// Remount the quiz with fresh answers.
    pub fn retake_quiz(&mut self) {
        self.quiz = QuizScreenState::default();
        self.navigator.reset(Route::Quiz);
    }

    pub fn go_home(&mut self) {
        self.navigator.reset(Route::Home);
    }
}
