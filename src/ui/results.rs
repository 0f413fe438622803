// Quiz results screen: echoes the answers carried by the navigation payload

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::habits::SmokingHabits;
use crate::quiz::format_cost;
use crate::ui::components::Footer;
use crate::ui::constants::{ACCENT, MUTED};

pub struct ResultsScreen;

impl ResultsScreen {
    pub fn render(frame: &mut Frame, habits: &SmokingHabits) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Min(6),    // Answers
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let title = Paragraph::new(Line::styled(
            "Your Smoking Profile",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let triggers = if habits.main_triggers().is_empty() {
            "None selected".to_string()
        } else {
            habits
                .main_triggers()
                .iter()
                .map(|t| t.label())
                .collect::<Vec<_>>()
                .join(", ")
        };

        let row = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{:<22}", label), Style::default().fg(MUTED)),
                Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
            ])
        };

        let lines = vec![
            row(
                "Cigarettes per day",
                habits.cigarettes_per_day().to_string(),
            ),
            row("Years smoked", habits.years_smoked().to_string()),
            row("Cost per pack", format_cost(habits.cost_per_pack())),
            row("Main triggers", triggers),
        ];

        let answers = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT))
                .title(" Answers "),
        );
        frame.render_widget(answers, chunks[1]);

        Footer::results().render(chunks[2], frame.buffer_mut());
    }
}
