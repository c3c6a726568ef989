//! Conversions from picker colors to terminal colors

use ratatui::style::Color;
use rgb_tui_core::color::{to_rgb, Hsv, Rgb};

pub fn rgb_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

pub fn hsv_color(hsv: Hsv) -> Color {
    rgb_color(to_rgb(hsv))
}

/// Fill color for a slider's bar
pub fn channel_color(channel: rgb_tui_core::Channel, current: Rgb) -> Color {
    use rgb_tui_core::Channel;
    match channel {
        Channel::Red => Color::Rgb(current.r.max(64), 0, 0),
        Channel::Green => Color::Rgb(0, current.g.max(64), 0),
        Channel::Blue => Color::Rgb(0, 0, current.b.max(64)),
        _ => rgb_color(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgb_tui_core::Channel;

    #[test]
    fn test_rgb_color() {
        assert_eq!(rgb_color(Rgb::new(1, 2, 3)), Color::Rgb(1, 2, 3));
    }

    #[test]
    fn test_hsv_color_red() {
        assert_eq!(hsv_color(Hsv::new(0, 255, 255)), Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_hsv_color_grey() {
        assert_eq!(hsv_color(Hsv::new(99, 0, 128)), Color::Rgb(128, 128, 128));
    }

    #[test]
    fn test_channel_color_keeps_dark_bars_visible() {
        assert_eq!(channel_color(Channel::Red, Rgb::BLACK), Color::Rgb(64, 0, 0));
        assert_eq!(channel_color(Channel::Blue, Rgb::new(0, 0, 200)), Color::Rgb(0, 0, 200));
        assert_eq!(channel_color(Channel::Hue, Rgb::new(9, 8, 7)), Color::Rgb(9, 8, 7));
    }
}
