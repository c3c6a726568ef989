use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};
use rgb_tui_core::gradient::{GradientPlane, Half};
use rgb_tui_core::Hsv;

use crate::ui::colors::hsv_color;

/// Upper half block: foreground paints the top half, background the bottom
const HALF_BLOCK: &str = "▀";
const CURSOR_COLOR: Color = Color::Black;

/// Saturation/value plane for the current hue, with the cursor drawn in
pub struct GradientWidget {
    plane: GradientPlane,
    hsv: Hsv,
}

impl GradientWidget {
    pub fn new(plane: GradientPlane, hsv: Hsv) -> Self {
        Self { plane, hsv }
    }
}

impl Widget for GradientWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.plane.rows().min(area.height);
        let columns = self.plane.columns().min(area.width);

        for row in 0..rows {
            for x in 0..columns {
                let cell = self.plane.cell(x, row, self.hsv.s, self.hsv.v);
                let mut upper = hsv_color(cell.upper);
                let mut lower = hsv_color(cell.lower);
                match cell.cursor {
                    Some(Half::Upper) => upper = CURSOR_COLOR,
                    Some(Half::Lower) => lower = CURSOR_COLOR,
                    None => {}
                }

                if let Some(target) = buf.cell_mut((area.x + x, area.y + row)) {
                    target.set_symbol(HALF_BLOCK).set_fg(upper).set_bg(lower);
                }
            }
        }
    }
}
