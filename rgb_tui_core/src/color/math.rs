//! 8-bit fixed-point RGB <-> HSV conversion
//!
//! Both directions use truncating integer arithmetic only. The hue circle is
//! quantized to 0-255, split into three 85-wide primary sectors for the
//! forward conversion and six 43-wide regions for the inverse one. The two
//! directions are not exact inverses: achromatic colors lose their hue and
//! most hues shift by a step or two on a round trip.

use serde::{Deserialize, Serialize};

/// Hue offset of the green-dominant sector
const GREEN_SECTOR: i32 = 85;
/// Hue offset of the blue-dominant sector
const BLUE_SECTOR: i32 = 171;
/// Width of a half sector, used to scale the channel delta
const SECTOR_SPAN: i32 = 43;
/// Width of one of the six inverse-conversion regions
const REGION_WIDTH: u32 = 43;

/// An 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hsv(self) -> Hsv {
        to_hsv(self)
    }
}

/// An 8-bit quantized HSV triple; every component spans 0-255
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }

    pub fn to_rgb(self) -> Rgb {
        to_rgb(self)
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        to_hsv(rgb)
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        to_rgb(hsv)
    }
}

/// Convert an RGB triple to quantized HSV.
///
/// Black has neither hue nor saturation and greys have no hue; both report 0
/// for the undefined components.
pub fn to_hsv(rgb: Rgb) -> Hsv {
    let (r, g, b) = (i32::from(rgb.r), i32::from(rgb.g), i32::from(rgb.b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if max == 0 {
        return Hsv::new(0, 0, 0);
    }

    let range = max - min;
    let s = 255 * range / max;
    if s == 0 {
        return Hsv::new(0, 0, max as u8);
    }

    // Rust's `/` truncates toward zero like the classic C formulation does.
    let h = if max == r {
        SECTOR_SPAN * (g - b) / range
    } else if max == g {
        GREEN_SECTOR + SECTOR_SPAN * (b - r) / range
    } else {
        BLUE_SECTOR + SECTOR_SPAN * (r - g) / range
    };

    // Only the red sector can go negative (magenta side); it wraps like a u8.
    Hsv::new(h.rem_euclid(256) as u8, s as u8, max as u8)
}

/// Convert a quantized HSV triple back to RGB using the six-region
/// fixed-point algorithm (`>> 8` stands in for `/ 255`).
pub fn to_rgb(hsv: Hsv) -> Rgb {
    let (h, s, v) = (u32::from(hsv.h), u32::from(hsv.s), u32::from(hsv.v));

    if s == 0 {
        return Rgb::new(hsv.v, hsv.v, hsv.v);
    }

    let region = (h / REGION_WIDTH).min(5);
    let remainder = (h - region * REGION_WIDTH) * 6;

    let p = ((v * (255 - s)) >> 8) as u8;
    let q = ((v * (255 - ((s * remainder) >> 8))) >> 8) as u8;
    let t = ((v * (255 - ((s * (255 - remainder)) >> 8))) >> 8) as u8;
    let v = hsv.v;

    match region {
        0 => Rgb::new(v, t, p),
        1 => Rgb::new(q, v, p),
        2 => Rgb::new(p, v, t),
        3 => Rgb::new(p, q, v),
        4 => Rgb::new(t, p, v),
        _ => Rgb::new(v, p, q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_has_no_hue_or_saturation() {
        assert_eq!(to_hsv(Rgb::BLACK), Hsv::new(0, 0, 0));
    }

    #[test]
    fn test_grey_is_achromatic() {
        assert_eq!(to_hsv(Rgb::new(77, 77, 77)), Hsv::new(0, 0, 77));
        assert_eq!(to_rgb(Hsv::new(200, 0, 77)), Rgb::new(77, 77, 77));
    }

    #[test]
    fn test_primary_sectors() {
        assert_eq!(to_hsv(Rgb::RED), Hsv::new(0, 255, 255));
        assert_eq!(to_hsv(Rgb::new(0, 255, 0)), Hsv::new(85, 255, 255));
        assert_eq!(to_hsv(Rgb::new(0, 0, 255)), Hsv::new(171, 255, 255));
    }

    #[test]
    fn test_magenta_side_wraps_to_top_of_hue_range() {
        // 43 * (0 - 10) / 255 truncates to -1
        assert_eq!(to_hsv(Rgb::new(255, 0, 10)), Hsv::new(255, 255, 255));
    }

    #[test]
    fn test_region_boundaries() {
        assert_eq!(to_rgb(Hsv::new(0, 255, 255)), Rgb::new(255, 0, 0));
        // h = 43 starts region 1 with a zero remainder
        assert_eq!(to_rgb(Hsv::new(43, 255, 255)), Rgb::new(254, 255, 0));
        assert_eq!(to_rgb(Hsv::new(85, 255, 255)), Rgb::new(3, 255, 0));
    }

    #[test]
    fn test_top_hue_stays_in_last_region() {
        // 255 / 43 == 5, remainder (255 - 215) * 6 == 240
        assert_eq!(to_rgb(Hsv::new(255, 255, 255)), Rgb::new(255, 0, 15));
    }
}
