// Terminal UI using Ratatui

pub mod components;
pub mod constants;
pub mod events;
pub mod home;
pub mod placeholder;
pub mod quiz;
pub mod results;
pub mod state;
pub mod widgets;

pub use events::{draw, handle_key, run_ui};
pub use home::HomeScreen;
pub use placeholder::PlaceholderScreen;
pub use quiz::QuizScreen;
pub use results::ResultsScreen;
pub use state::AppState;
