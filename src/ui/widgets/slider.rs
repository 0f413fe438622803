// Slider widget for the quiz's numeric answers

use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Widget,
};

use crate::quiz::SliderRange;
use crate::ui::constants::{ACCENT, MUTED, TRACK};

pub struct Slider {
    value: f64,
    range: SliderRange,
    label: String,
    decimals: usize,
    focused: bool,
}

impl Slider {
    pub fn new(label: impl Into<String>, range: SliderRange) -> Self {
        Self {
            value: range.default,
            range,
            label: label.into(),
            decimals: 0,
            focused: false,
        }
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = self.range.snap(value);
        self
    }

    /// Digits after the decimal point for the value and bounds.
    pub fn decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Step count a key moves the slider by, `None` for unrelated keys.
    pub fn key_delta(key: KeyCode) -> Option<i32> {
        match key {
            KeyCode::Left => Some(-1),
            KeyCode::Right => Some(1),
            KeyCode::PageDown => Some(-5),
            KeyCode::PageUp => Some(5),
            KeyCode::Home => Some(i32::MIN / 2),
            KeyCode::End => Some(i32::MAX / 2),
            _ => None,
        }
    }

    fn ratio(&self) -> f64 {
        let span = self.range.max - self.range.min;
        if span > 0.0 {
            (self.value - self.range.min) / span
        } else {
            0.0
        }
    }
}

impl Widget for Slider {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let value_style = if self.focused {
            Style::default().fg(ACCENT).bold()
        } else {
            Style::default().fg(ACCENT)
        };

        let label_line = Line::from(vec![
            Span::raw(&self.label),
            Span::raw(": "),
            Span::styled(format!("{:.*}", self.decimals, self.value), value_style),
            Span::styled(
                format!(
                    " ({:.*}-{:.*})",
                    self.decimals, self.range.min, self.decimals, self.range.max
                ),
                Style::default().fg(MUTED),
            ),
        ]);
        buf.set_line(area.x, area.y, &label_line, area.width);

        if area.height < 2 {
            return;
        }

        // Track with a thumb at the current position
        let bar_y = area.y + 1;
        let filled_width = (f64::from(area.width) * self.ratio()).round() as u16;
        let thumb_x = filled_width.saturating_sub(1).min(area.width - 1);

        for x in 0..area.width {
            let (symbol, color) = if x == thumb_x {
                ("●", if self.focused { ACCENT } else { Color::DarkGray })
            } else if x < filled_width {
                ("█", if self.focused { ACCENT } else { Color::DarkGray })
            } else {
                ("─", TRACK)
            };
            buf.set_string(area.x + x, bar_y, symbol, Style::default().fg(color));
        }
    }
}
