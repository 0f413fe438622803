// Event handling and main UI loop

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::habits::SmokingHabits;
use crate::navigation::{Route, ScreenName};
use crate::ui::{HomeScreen, PlaceholderScreen, QuizScreen, ResultsScreen, state::AppState};

mod home;
mod quiz;
mod results;

// Event types sent from dedicated event thread to main loop
enum UiEvent {
    Input(Event), // Keyboard, mouse, or other terminal events
    Tick,         // Periodic redraw
}

/// Spawn a dedicated thread for event polling.
fn spawn_event_thread(tx: mpsc::Sender<UiEvent>, tick_rate: Duration) {
    thread::spawn(move || {
        let mut last_tick = Instant::now();
        loop {
            // Calculate timeout until next tick
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout).unwrap_or(false) {
                if let Ok(evt) = event::read() {
                    if tx.send(UiEvent::Input(evt)).is_err() {
                        break; // Main thread dropped the receiver
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.send(UiEvent::Tick).is_err() {
                    break; // Main thread dropped the receiver
                }
                last_tick = Instant::now();
            }
        }
    });
}

/// Run the TUI until the user quits. Returns the last completed quiz, if any.
pub fn run_ui(config: &Config) -> io::Result<Option<SmokingHabits>> {
    enable_raw_mode()?;
    let mouse_capture = config.ui.mouse_capture;

    let mut terminal = match enter_terminal(mouse_capture) {
        Ok(terminal) => terminal,
        Err(e) => {
            // Raw mode is already on; put the tty back before reporting
            if mouse_capture {
                let _ = execute!(io::stdout(), DisableMouseCapture);
            }
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(e);
        }
    };

    let mut app_state = AppState::default();
    tracing::info!(screen = %app_state.current_screen(), "tui started");

    let (event_tx, event_rx) = mpsc::channel();
    spawn_event_thread(event_tx, Duration::from_millis(config.ui.tick_rate_ms.max(1)));

    let result = run_app(&mut terminal, &mut app_state, event_rx);
    let restored = restore_terminal(&mut terminal, mouse_capture);
    if let Err(e) = &restored {
        tracing::warn!(error = %e, "terminal restore incomplete");
    }

    tracing::info!("tui stopped");
    result.and(restored).map(|_| app_state.last_result)
}

fn enter_terminal(mouse_capture: bool) -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_capture {
        execute!(stdout, EnableMouseCapture)?;
    }
    Terminal::new(CrosstermBackend::new(stdout))
}

// Every step runs even if an earlier one fails
fn restore_terminal<B: Backend + io::Write>(
    terminal: &mut Terminal<B>,
    mouse_capture: bool,
) -> io::Result<()> {
    first_error([
        disable_raw_mode(),
        if mouse_capture {
            execute!(terminal.backend_mut(), DisableMouseCapture)
        } else {
            Ok(())
        },
        execute!(terminal.backend_mut(), LeaveAlternateScreen),
        terminal.show_cursor(),
    ])
}

fn first_error<const N: usize>(steps: [io::Result<()>; N]) -> io::Result<()> {
    steps.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    event_rx: Receiver<UiEvent>,
) -> io::Result<()> {
    terminal.draw(|frame| draw(frame, state))?;

    loop {
        let mut pending_inputs: Vec<Event> = Vec::new();

        // Always block for at least one event, then drain the queue
        match event_rx.recv() {
            Ok(UiEvent::Input(ev)) => pending_inputs.push(ev),
            Ok(UiEvent::Tick) => {}
            Err(_) => return Ok(()), // Channel closed, exit
        }

        while let Ok(evt) = event_rx.try_recv() {
            if let UiEvent::Input(ev) = evt {
                pending_inputs.push(ev);
            }
        }

        for input in pending_inputs {
            match input {
                Event::Key(key) => {
                    if handle_key(key, state) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse(mouse, state),
                _ => {
                    // Resize is picked up by the next draw
                }
            }
        }

        terminal.draw(|frame| draw(frame, state))?;
    }
}

/// Render the active screen.
pub fn draw(frame: &mut Frame, state: &AppState) {
    match state.navigator.current() {
        Route::Quiz => QuizScreen::render(frame, &state.quiz),
        Route::Home => HomeScreen::render(frame, &state.home, &state.app_version),
        Route::QuizResults { smoking_habits } => ResultsScreen::render(frame, smoking_habits),
        other => PlaceholderScreen::render(frame, other.name()),
    }
}

fn should_quit(key: &KeyEvent) -> bool {
    // Quit on 'q' or Ctrl+C
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Apply a key press to the state. Returns true when the app should exit.
pub fn handle_key(key: KeyEvent, state: &mut AppState) -> bool {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return false;
    }

    if should_quit(&key) {
        return true;
    }

    match state.current_screen() {
        ScreenName::Quiz => quiz::handle_quiz_key(key, state),
        ScreenName::Home => home::handle_home_key(key, state),
        ScreenName::QuizResults => results::handle_results_key(key, state),
        _ => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Backspace) {
                state.navigator.go_back();
            }
        }
    }

    false
}

fn handle_mouse(mouse: MouseEvent, state: &mut AppState) {
    if state.current_screen() != ScreenName::Quiz {
        return;
    }
    // Scrolling drags the current slider
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.quiz.progress.nudge_slider(1);
        }
        MouseEventKind::ScrollDown => {
            state.quiz.progress.nudge_slider(-1);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habits::Trigger;
    use crate::quiz::QuizStep;
    use ratatui::backend::TestBackend;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen_text(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_quit_keys() {
        let mut state = AppState::default();
        assert!(handle_key(press(KeyCode::Char('q')), &mut state));
        assert!(handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut state
        ));
        assert!(!handle_key(press(KeyCode::Char('c')), &mut state));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut state = AppState::default();
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        handle_key(key, &mut state);
        assert_eq!(state.quiz.progress.current_step(), QuizStep::CigarettesPerDay);
    }

    #[test]
    fn test_first_step_rendering() {
        let text = screen_text(&AppState::default());
        assert!(text.contains("Let's Understand Your Habits"));
        assert!(text.contains("Step 1 of 4"));
        assert!(text.contains("How many cigarettes do you smoke daily?"));
        assert!(text.contains("10 cigarettes"));
        assert!(text.contains("Next"));
        assert!(!text.contains("Back"));
    }

    #[test]
    fn test_cost_step_rendering() {
        let mut state = AppState::default();
        handle_key(press(KeyCode::Enter), &mut state);
        handle_key(press(KeyCode::Enter), &mut state);
        let text = screen_text(&state);
        assert!(text.contains("Step 3 of 4"));
        assert!(text.contains("$10.00"));
        assert!(text.contains("Back"));
    }

    #[test]
    fn test_trigger_step_rendering() {
        let mut state = AppState::default();
        for _ in 0..3 {
            handle_key(press(KeyCode::Enter), &mut state);
        }
        handle_key(press(KeyCode::Char('7')), &mut state);
        let text = screen_text(&state);
        assert!(text.contains("Step 4 of 4"));
        assert!(text.contains("Complete"));
        assert!(text.contains("Back"));
        assert!(text.contains("[x] 7 Coffee"));
        assert!(text.contains("[ ] 1 Stress"));
    }

    #[test]
    fn test_results_and_home_rendering() {
        let mut state = AppState::default();
        for _ in 0..3 {
            handle_key(press(KeyCode::Enter), &mut state);
        }
        handle_key(press(KeyCode::Char('1')), &mut state);
        handle_key(press(KeyCode::Enter), &mut state);

        let text = screen_text(&state);
        assert!(text.contains("Your Smoking Profile"));
        assert!(text.contains("$10.00"));
        assert!(text.contains("Stress"));

        handle_key(press(KeyCode::Enter), &mut state);
        let text = screen_text(&state);
        assert!(text.contains("Your Quit Journey"));
        assert!(text.contains(&format!("quitpath v{}", env!("CARGO_PKG_VERSION"))));
        assert!(text.contains("1 Week Milestone"));
        assert!(text.contains("Drink 8 glasses of water"));
    }

    #[test]
    fn test_placeholder_escape_returns() {
        let mut state = AppState::default();
        state.go_home();
        handle_key(press(KeyCode::Char('p')), &mut state);
        assert_eq!(state.current_screen(), ScreenName::Profile);
        assert!(screen_text(&state).contains("Coming soon"));

        handle_key(press(KeyCode::Esc), &mut state);
        assert_eq!(state.current_screen(), ScreenName::Home);
    }

    #[test]
    fn test_restore_reports_first_failure_after_all_steps() {
        let mut ran = Vec::new();
        let mut step = |name: &'static str, outcome: io::Result<()>| {
            ran.push(name);
            outcome
        };
        let result = first_error([
            step("raw", Err(io::Error::other("raw mode"))),
            step("mouse", Ok(())),
            step("screen", Err(io::Error::other("alternate screen"))),
            step("cursor", Ok(())),
        ]);

        assert_eq!(ran, ["raw", "mouse", "screen", "cursor"]);
        assert_eq!(result.unwrap_err().to_string(), "raw mode");
        assert!(first_error([Ok(()), Ok(())]).is_ok());
    }

    #[test]
    fn test_scroll_moves_slider() {
        let mut state = AppState::default();
        let scroll = |kind| MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(scroll(MouseEventKind::ScrollUp), &mut state);
        handle_mouse(scroll(MouseEventKind::ScrollUp), &mut state);
        handle_mouse(scroll(MouseEventKind::ScrollDown), &mut state);
        assert_eq!(state.quiz.progress.cigarettes_per_day(), 11);
        assert!(!state.quiz.progress.is_selected(Trigger::Stress));
    }
}
