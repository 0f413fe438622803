// Navigation contract: every screen and the payload it requires

use crate::habits::SmokingHabits;
use std::fmt;

/// Screen identifiers, without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenName {
    Onboarding,
    Home,
    Quiz,
    QuizResults,
    Breathing,
    Community,
    Profile,
}

impl ScreenName {
    pub fn title(self) -> &'static str {
        match self {
            Self::Onboarding => "Onboarding",
            Self::Home => "Home",
            Self::Quiz => "Quiz",
            Self::QuizResults => "Quiz Results",
            Self::Breathing => "Breathing",
            Self::Community => "Community",
            Self::Profile => "Profile",
        }
    }
}

impl fmt::Display for ScreenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A navigation target together with its parameters.
///
/// Only `QuizResults` carries a payload; a transition to it without a
/// `SmokingHabits` does not type-check.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Onboarding,
    Home,
    Quiz,
    QuizResults { smoking_habits: SmokingHabits },
    Breathing,
    Community,
    Profile,
}

impl Route {
    pub fn name(&self) -> ScreenName {
        match self {
            Self::Onboarding => ScreenName::Onboarding,
            Self::Home => ScreenName::Home,
            Self::Quiz => ScreenName::Quiz,
            Self::QuizResults { .. } => ScreenName::QuizResults,
            Self::Breathing => ScreenName::Breathing,
            Self::Community => ScreenName::Community,
            Self::Profile => ScreenName::Profile,
        }
    }
}

/// Stack navigator. The top of the stack is the active screen and the
/// stack is never empty.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Quiz)
    }
}

impl Navigator {
    pub const INITIAL_ROUTE: ScreenName = ScreenName::Quiz;

    pub fn new(initial: Route) -> Self {
        Self {
            stack: vec![initial],
        }
    }

    pub fn current(&self) -> &Route {
        // stack always holds the root
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(from = %self.current().name(), to = %route.name(), "navigate");
        self.stack.push(route);
    }

    /// Pop the active screen. Returns false when already at the root.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() > 1 {
            let popped = self.stack.pop();
            if let Some(route) = popped {
                tracing::debug!(from = %route.name(), to = %self.current().name(), "go back");
            }
            true
        } else {
            false
        }
    }

    /// Replace the whole stack with a single route.
    pub fn reset(&mut self, route: Route) {
        tracing::debug!(to = %route.name(), "reset navigation stack");
        self.stack.clear();
        self.stack.push(route);
    }
}
