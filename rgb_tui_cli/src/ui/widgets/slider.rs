use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use rgb_tui_core::Channel;

/// Columns taken by the label, e.g. `Saturation: `
pub const LABEL_WIDTH: u16 = 12;
/// Columns taken by the numeric value after the bar
pub const VALUE_WIDTH: u16 = 4;

const FILLED: &str = "█";
const EMPTY: &str = "─";

/// One labelled channel slider: `Hue:        ████────── 128`
pub struct SliderWidget {
    channel: Channel,
    value: u8,
    focused: bool,
    fill: Color,
}

impl SliderWidget {
    pub fn new(channel: Channel, value: u8) -> Self {
        Self {
            channel,
            value,
            focused: false,
            fill: Color::White,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// The part of `area` occupied by the bar; this is what gets reflected
    /// for pointer dragging.
    pub fn bar_area(area: Rect) -> Rect {
        let x = area.x.saturating_add(LABEL_WIDTH);
        let width = area
            .width
            .saturating_sub(LABEL_WIDTH)
            .saturating_sub(VALUE_WIDTH);
        Rect::new(x, area.y, width, area.height.min(1))
    }
}

impl Widget for SliderWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bar = Self::bar_area(area);
        let filled = (usize::from(self.value) * usize::from(bar.width) + 127) / 255;
        let empty = usize::from(bar.width).saturating_sub(filled);

        let label_style = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default()
        };
        let track_style = if self.focused {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let label = format!("{}:", self.channel.label());
        let label = format!("{:<width$}", label, width = usize::from(LABEL_WIDTH));
        let line = Line::from(vec![
            Span::styled(label, label_style),
            Span::styled(FILLED.repeat(filled), Style::default().fg(self.fill)),
            Span::styled(EMPTY.repeat(empty), track_style),
            Span::raw(format!(" {:>3}", self.value)),
        ]);
        line.render(area, buf);
    }
}
