// Screens that are part of the navigation contract but have no view yet

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::navigation::ScreenName;
use crate::ui::components::Footer;
use crate::ui::constants::{ACCENT, MUTED};

pub struct PlaceholderScreen;

impl PlaceholderScreen {
    pub fn render(frame: &mut Frame, screen: ScreenName) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(frame.area());

        let body = Paragraph::new(vec![
            Line::from(""),
            Line::styled("Coming soon", Style::default().fg(MUTED)),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT))
                .title(format!(" {} ", screen.title()))
                .title_alignment(Alignment::Center),
        );
        frame.render_widget(body, chunks[0]);

        Footer::placeholder().render(chunks[1], frame.buffer_mut());
    }
}
