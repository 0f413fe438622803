// Home dashboard screen

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::home::{DAILY_GOALS, HomeStats};
use crate::ui::components::Footer;
use crate::ui::constants::{ACCENT, MUTED, SUCCESS, TRACK};

pub struct HomeScreen;

impl HomeScreen {
    pub fn render(frame: &mut Frame, stats: &HomeStats, app_version: &str) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(6), // Stats card
                Constraint::Length(5), // Today's goals
                Constraint::Min(5),    // Achievements
                Constraint::Length(1), // Footer
            ])
            .split(area);

        Self::render_header(frame, chunks[0], app_version);
        Self::render_stats_card(frame, chunks[1], stats);
        Self::render_goals(frame, chunks[2]);
        Self::render_achievements(frame, chunks[3], stats);
        Footer::home().render(chunks[4], frame.buffer_mut());
    }

    fn render_header(frame: &mut Frame, area: Rect, app_version: &str) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(12)])
            .split(area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "Your Quit Journey",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  quitpath v{}", app_version), Style::default().fg(MUTED)),
        ]));
        frame.render_widget(title, halves[0]);

        let profile = Paragraph::new(Line::from(vec![
            Span::styled("[P]", Style::default().fg(Color::Yellow)),
            Span::styled(" Profile", Style::default().fg(ACCENT)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(profile, halves[1]);
    }

    fn render_stats_card(frame: &mut Frame, area: Rect, stats: &HomeStats) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(SUCCESS))
            .title(" Days Smoke-Free ")
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let days = Paragraph::new(Line::styled(
            stats.days_sober.to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(days, rows[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);

        let stat = |label: &'static str, value: String| {
            Paragraph::new(vec![
                Line::styled(label, Style::default().fg(MUTED)),
                Line::styled(value, Style::default().add_modifier(Modifier::BOLD)),
            ])
            .alignment(Alignment::Center)
        };
        frame.render_widget(stat("Money Saved", stats.money_saved_display()), columns[0]);
        frame.render_widget(
            stat("Cigarettes Avoided", stats.cigarettes_avoided.to_string()),
            columns[1],
        );
    }

    fn render_goals(frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = DAILY_GOALS
            .iter()
            .map(|goal| {
                Line::from(vec![
                    Span::styled(" • ", Style::default().fg(ACCENT)),
                    Span::raw(*goal),
                ])
            })
            .collect();

        let goals = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT))
                .title(" Today's Goals "),
        );
        frame.render_widget(goals, area);
    }

    fn render_achievements(frame: &mut Frame, area: Rect, stats: &HomeStats) {
        let lines: Vec<Line> = stats
            .achievements()
            .iter()
            .map(|a| {
                let (symbol, color) = if a.completed {
                    (" ✔ ", SUCCESS)
                } else {
                    (" ◷ ", TRACK)
                };
                let title_style = if a.completed {
                    Style::default().fg(SUCCESS).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(MUTED)
                };
                Line::from(vec![
                    Span::styled(symbol, Style::default().fg(color)),
                    Span::styled(a.title, title_style),
                ])
            })
            .collect();

        let achievements = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT))
                .title(" Achievements "),
        );
        frame.render_widget(achievements, area);
    }
}
