//! Color representations and conversions used by the picker.

pub mod format;
pub mod math;

pub use format::{format_hex, hsv_text, parse_hex, rgb_text};
pub use math::{to_hsv, to_rgb, Hsv, Rgb};
