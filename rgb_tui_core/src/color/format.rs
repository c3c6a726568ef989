//! Text renderings of a color: hex codes and the RGB/HSV readouts.

use super::math::{Hsv, Rgb};
use crate::utils::error::PickerError;

/// Format as `#RRGGBB`, uppercase, no alpha.
pub fn format_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Parse `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB` (any case).
pub fn parse_hex(input: &str) -> Result<Rgb, PickerError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PickerError::InvalidHex(input.to_string()));
    }

    let channel = |s: &str| {
        u8::from_str_radix(s, 16).map_err(|_| PickerError::InvalidHex(input.to_string()))
    };

    match digits.len() {
        6 => Ok(Rgb::new(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        3 => {
            // #abc is shorthand for #aabbcc
            let r = channel(&digits[0..1])?;
            let g = channel(&digits[1..2])?;
            let b = channel(&digits[2..3])?;
            Ok(Rgb::new(r * 17, g * 17, b * 17))
        }
        _ => Err(PickerError::InvalidHex(input.to_string())),
    }
}

/// RGB readout, e.g. `255 ,   0 ,   0`
pub fn rgb_text(rgb: Rgb) -> String {
    format!("{:3} , {:3} , {:3}", rgb.r, rgb.g, rgb.b)
}

/// HSV readout in degrees and percent, truncated, e.g. `120°, 100%,  50%`
pub fn hsv_text(hsv: Hsv) -> String {
    let degrees = u32::from(hsv.h) * 360 / 255;
    let saturation = u32::from(hsv.s) * 100 / 255;
    let value = u32::from(hsv.v) * 100 / 255;
    format!("{:3}°, {:3}%, {:3}%", degrees, saturation, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex(Rgb::new(255, 0, 0)), "#FF0000");
        assert_eq!(format_hex(Rgb::new(0, 0, 0)), "#000000");
        assert_eq!(format_hex(Rgb::new(18, 52, 86)), "#123456");
        assert_eq!(format_hex(Rgb::new(10, 171, 239)), "#0AABEF");
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(parse_hex("#123456").unwrap(), Rgb::new(18, 52, 86));
        assert_eq!(parse_hex("abcdef").unwrap(), Rgb::new(171, 205, 239));
        assert_eq!(parse_hex("#f0a").unwrap(), Rgb::new(255, 0, 170));
        assert_eq!(parse_hex("  #FF0000 ").unwrap(), Rgb::RED);
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert_matches!(parse_hex("#12345"), Err(PickerError::InvalidHex(_)));
        assert_matches!(parse_hex("#GG0000"), Err(PickerError::InvalidHex(_)));
        assert_matches!(parse_hex(""), Err(PickerError::InvalidHex(_)));
        assert_matches!(parse_hex("+12345"), Err(PickerError::InvalidHex(_)));
    }

    #[test]
    fn test_readouts() {
        assert_eq!(rgb_text(Rgb::new(255, 0, 7)), "255 ,   0 ,   7");
        assert_eq!(hsv_text(Hsv::new(255, 255, 0)), "360°, 100%,   0%");
        assert_eq!(hsv_text(Hsv::new(85, 128, 64)), "120°,  50%,  25%");
    }
}
