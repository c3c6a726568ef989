use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

/// A small titled box holding one line of text, e.g. ` Hexa ` / `#FF0000`
pub struct ReadoutWidget<'a> {
    title: &'a str,
    text: String,
}

impl<'a> ReadoutWidget<'a> {
    pub fn new(title: &'a str, text: impl Into<String>) -> Self {
        Self {
            title,
            text: text.into(),
        }
    }

    /// Columns needed to show the text and borders without clipping
    pub fn width(&self) -> u16 {
        let content = Line::from(self.text.as_str()).width();
        let title = Line::from(self.title).width();
        (content.max(title) + 2) as u16
    }
}

impl Widget for ReadoutWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title(Line::from(self.title).centered());
        Paragraph::new(self.text).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_fits_text() {
        assert_eq!(ReadoutWidget::new(" Hexa ", "#FF0000").width(), 9);
        assert_eq!(ReadoutWidget::new(" HSV ", "  0°, 100%, 100%").width(), 18);
    }

    #[test]
    fn test_render_boxed_text() {
        let area = Rect::new(0, 0, 9, 3);
        let mut buf = Buffer::empty(area);
        ReadoutWidget::new(" Hexa ", "#123456").render(area, &mut buf);

        let middle: String = (1..8).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(middle, "#123456");
        assert_eq!(buf[(0, 0)].symbol(), "┌");
    }
}
