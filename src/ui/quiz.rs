// Onboarding quiz screen

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::habits::TRIGGERS;
use crate::quiz::{QuizStep, format_cost};
use crate::ui::components::{Footer, render_button, render_checkbox};
use crate::ui::constants::{ACCENT, MUTED};
use crate::ui::state::QuizScreenState;
use crate::ui::widgets::Slider;

pub struct QuizScreen;

impl QuizScreen {
    pub fn render(frame: &mut Frame, state: &QuizScreenState) {
        let area = frame.area();
        let progress = &state.progress;
        let step = progress.current_step();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title + step counter
                Constraint::Min(6),    // Current step input
                Constraint::Length(1), // Buttons
                Constraint::Length(1), // Footer
            ])
            .split(area);

        Self::render_header(frame, chunks[0], step);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(format!(" {} ", step.question()));
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);

        match step {
            QuizStep::Triggers => Self::render_triggers(frame, inner, state),
            _ => Self::render_slider(frame, inner, state),
        }

        Self::render_buttons(frame, chunks[2], progress.shows_back(), progress.primary_label());

        let footer = if step == QuizStep::Triggers {
            Footer::quiz_triggers()
        } else {
            Footer::quiz_slider(progress.shows_back())
        };
        footer.render(chunks[3], frame.buffer_mut());
    }

    fn render_header(frame: &mut Frame, area: Rect, step: QuizStep) {
        let lines = vec![
            Line::styled(
                "Let's Understand Your Habits",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                format!("Step {} of {}", step.number(), QuizStep::COUNT),
                Style::default().fg(MUTED),
            ),
        ];
        let header = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(header, area);
    }

    fn render_slider(frame: &mut Frame, area: Rect, state: &QuizScreenState) {
        let progress = &state.progress;
        let step = progress.current_step();
        let (Some(range), Some(value)) = (step.slider(), progress.slider_value()) else {
            return;
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(2), // Slider label + track
                Constraint::Length(1),
                Constraint::Length(1), // Value
                Constraint::Min(0),
            ])
            .split(area.inner(Margin::new(2, 0)));

        let (label, decimals) = match step {
            QuizStep::CigarettesPerDay => ("Cigarettes per day", 0),
            QuizStep::YearsSmoked => ("Years smoked", 0),
            _ => ("Cost per pack", 2),
        };
        Slider::new(label, range)
            .value(value)
            .decimals(decimals)
            .focused(true)
            .render(rows[1], frame.buffer_mut());

        let display = progress
            .value_display()
            .unwrap_or_else(|| format_cost(progress.cost_per_pack()));
        let value_line = Paragraph::new(display)
            .style(Style::default().fg(MUTED))
            .alignment(Alignment::Center);
        frame.render_widget(value_line, rows[3]);
    }

    fn render_triggers(frame: &mut Frame, area: Rect, state: &QuizScreenState) {
        let area = area.inner(Margin::new(2, 1));
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        // Two-column grid, filled row by row like the catalog order
        for (idx, trigger) in TRIGGERS.iter().enumerate() {
            let column = columns[idx % 2];
            let row = (idx / 2) as u16;
            if row >= column.height {
                break;
            }
            let cell = Rect {
                x: column.x,
                y: column.y + row,
                width: column.width,
                height: 1,
            };
            let label = format!("{} {}", idx + 1, trigger.label());
            render_checkbox(
                &label,
                state.progress.is_selected(*trigger),
                idx == state.trigger_cursor,
                cell,
                frame.buffer_mut(),
            );
        }
    }

    fn render_buttons(frame: &mut Frame, area: Rect, shows_back: bool, primary_label: &str) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        if shows_back {
            render_button("Back", "Esc", false, halves[0], frame.buffer_mut());
        }
        render_button(primary_label, "Enter", true, halves[1], frame.buffer_mut());
    }
}
