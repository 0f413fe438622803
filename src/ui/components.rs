// Reusable UI components

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::constants::{ACCENT, INK, MUTED};

pub struct Footer {
    content: Line<'static>,
}

impl Footer {
    fn with_controls(controls: &[(&'static str, &'static str)]) -> Self {
        let mut spans = vec![Span::raw("CONTROLS: ")];

        for (i, (hotkey, desc)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*hotkey, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(" "));
            spans.push(Span::raw(*desc));
        }

        Self {
            content: Line::from(spans),
        }
    }

    pub fn quiz_slider(shows_back: bool) -> Self {
        if shows_back {
            Self::with_controls(&[
                ("[←/→]", "Adjust"),
                ("[PgUp/PgDn]", "±5"),
                ("[Enter]", "Next"),
                ("[Esc]", "Back"),
                ("[Q]", "Quit"),
            ])
        } else {
            Self::with_controls(&[
                ("[←/→]", "Adjust"),
                ("[PgUp/PgDn]", "±5"),
                ("[Enter]", "Next"),
                ("[Q]", "Quit"),
            ])
        }
    }

    pub fn quiz_triggers() -> Self {
        Self::with_controls(&[
            ("[↑/↓]", "Navigate"),
            ("[Space]", "Toggle"),
            ("[1-8]", "Toggle #"),
            ("[Enter]", "Complete"),
            ("[Esc]", "Back"),
            ("[Q]", "Quit"),
        ])
    }

    pub fn home() -> Self {
        Self::with_controls(&[("[P]", "Profile"), ("[R]", "Retake Quiz"), ("[Q]", "Quit")])
    }

    pub fn results() -> Self {
        Self::with_controls(&[("[Enter]", "Home"), ("[R]", "Retake Quiz"), ("[Q]", "Quit")])
    }

    pub fn placeholder() -> Self {
        Self::with_controls(&[("[Esc]", "Back"), ("[Q]", "Quit")])
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.content)
            .style(Style::default().bg(Color::DarkGray))
            .render(area, buf);
    }
}

/// Centered button label. `primary` buttons are filled with the accent colour.
pub fn render_button(label: &str, hotkey: &str, primary: bool, area: Rect, buf: &mut Buffer) {
    let style = if primary {
        Style::default().bg(ACCENT).fg(Color::White).bold()
    } else {
        Style::default().bg(Color::Gray).fg(INK)
    };

    let text = Line::from(vec![
        Span::raw(" "),
        Span::raw(label.to_string()),
        Span::styled(format!(" [{}] ", hotkey), Style::default().fg(Color::Yellow)),
    ])
    .style(style);

    let mut centered_area = area;
    let text_width = (label.len() + hotkey.len() + 5) as u16; // " label [hotkey] "
    if area.width > text_width {
        let padding = (area.width - text_width) / 2;
        centered_area.x += padding;
        centered_area.width = text_width;
    }

    buf.set_line(centered_area.x, centered_area.y, &text, centered_area.width);
}

pub fn render_checkbox(label: &str, checked: bool, focused: bool, area: Rect, buf: &mut Buffer) {
    let symbol = if checked { "[x]" } else { "[ ]" };
    let symbol_style = if focused {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(ACCENT)
    };
    let label_style = if checked {
        Style::default().fg(ACCENT).bold()
    } else {
        Style::default().fg(MUTED)
    };

    let text = Line::from(vec![
        Span::styled(symbol, symbol_style),
        Span::raw(" "),
        Span::styled(label.to_string(), label_style),
    ]);

    buf.set_line(area.x, area.y, &text, area.width);
}
