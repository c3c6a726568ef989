//! The saturation/value picking surface.
//!
//! Columns sweep value from left to right and half-rows sweep saturation from
//! top to bottom. Every terminal row holds two half-rows, drawn with a
//! half-block glyph whose foreground is the upper half and whose background
//! is the lower half.

use crate::channel::clamp_channel;
use crate::color::Hsv;

/// Narrowest plane that will be laid out
pub const MIN_COLUMNS: u16 = 10;
/// Default number of terminal rows
pub const DEFAULT_ROWS: u16 = 15;

/// A screen rectangle with inclusive bounds, as reported after layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl Region {
    pub const fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Build from an origin and a size in cells. A zero size yields an
    /// inverted region, which [`Region::is_usable`] rejects.
    pub fn from_origin_size(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self::new(
            i32::from(x),
            i32::from(y),
            i32::from(x) + i32::from(width) - 1,
            i32::from(y) + i32::from(height) - 1,
        )
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }

    /// Distance between the horizontal bounds
    pub fn span_x(&self) -> i32 {
        self.x_max - self.x_min
    }

    /// Distance between the vertical bounds
    pub fn span_y(&self) -> i32 {
        self.y_max - self.y_min
    }

    /// Both spans must be positive to map a coordinate onto a channel.
    pub fn is_usable(&self) -> bool {
        self.span_x() > 0 && self.span_y() > 0
    }

    /// Map `x` onto [0, 255] along the horizontal span.
    pub fn scale_x(&self, x: i32) -> Option<u8> {
        scale(x - self.x_min, self.span_x())
    }

    /// Map `y` onto [0, 255] along the vertical span.
    pub fn scale_y(&self, y: i32) -> Option<u8> {
        scale(y - self.y_min, self.span_y())
    }
}

fn scale(offset: i32, span: i32) -> Option<u8> {
    if span <= 0 {
        return None;
    }
    Some(clamp_channel(offset.saturating_mul(255) / span))
}

/// Saturation and value picked from a pointer position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick {
    pub saturation: u8,
    pub value: u8,
}

/// One terminal cell: two stacked half-cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientCell {
    pub upper: Hsv,
    pub lower: Hsv,
    /// Which half, if any, carries the cursor mark
    pub cursor: Option<Half>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    Upper,
    Lower,
}

/// Half-cell coordinates of the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub x: u16,
    pub y: u16,
}

/// The virtual grid for one hue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientPlane {
    hue: u8,
    columns: u16,
    rows: u16,
}

impl GradientPlane {
    /// `columns` is floored at [`MIN_COLUMNS`]; `rows` at 1.
    pub fn new(hue: u8, columns: u16, rows: u16) -> Self {
        Self {
            hue,
            columns: columns.max(MIN_COLUMNS),
            rows: rows.max(1),
        }
    }

    pub fn hue(&self) -> u8 {
        self.hue
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Addressable saturation steps
    pub fn half_rows(&self) -> u16 {
        self.rows * 2
    }

    /// Color of column `x`, half-row `half_row`.
    pub fn color_at(&self, x: u16, half_row: u16) -> Hsv {
        let value = 255 * u32::from(x) / u32::from(self.columns);
        let saturation = 255 * u32::from(half_row) / u32::from(self.half_rows());
        Hsv::new(
            self.hue,
            clamp_channel(saturation as i32),
            clamp_channel(value as i32),
        )
    }

    /// Where (saturation, value) lands on the grid.
    pub fn cursor(&self, saturation: u8, value: u8) -> CursorPosition {
        let x = u32::from(value) * u32::from(self.columns) / 255;
        let y = u32::from(saturation) * u32::from(self.half_rows()) / 255;
        CursorPosition {
            x: (x as u16).min(self.columns - 1),
            y: (y as u16).min(self.half_rows() - 1),
        }
    }

    /// The cell at column `x`, terminal row `row`, with the cursor overlay
    /// resolved for (saturation, value).
    pub fn cell(&self, x: u16, row: u16, saturation: u8, value: u8) -> GradientCell {
        let cursor = self.cursor(saturation, value);
        let mark = if cursor.x != x {
            None
        } else if cursor.y == row * 2 {
            Some(Half::Upper)
        } else if cursor.y == row * 2 + 1 {
            Some(Half::Lower)
        } else {
            None
        };

        GradientCell {
            upper: self.color_at(x, row * 2),
            lower: self.color_at(x, row * 2 + 1),
            cursor: mark,
        }
    }
}

/// Inverse mapping from a pointer position to (saturation, value). Returns
/// `None` when `region` has no usable area.
pub fn pick(region: &Region, x: i32, y: i32) -> Option<Pick> {
    if !region.is_usable() {
        return None;
    }
    Some(Pick {
        value: region.scale_x(x)?,
        saturation: region.scale_y(y)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_from_origin_size_is_inclusive() {
        let region = Region::from_origin_size(2, 3, 10, 15);
        assert_eq!(region, Region::new(2, 3, 11, 17));
        assert!(region.contains(11, 17));
        assert!(!region.contains(12, 17));
        assert!(!region.contains(1, 3));
    }

    #[test]
    fn test_degenerate_region_does_not_pick() {
        assert_eq!(pick(&Region::from_origin_size(0, 0, 0, 0), 0, 0), None);
        assert_eq!(pick(&Region::new(5, 0, 5, 10), 5, 5), None);
        assert_eq!(pick(&Region::new(0, 5, 10, 4), 5, 5), None);
    }

    #[test]
    fn test_pick_corners_and_clamping() {
        let region = Region::new(10, 20, 60, 34);
        let origin = pick(&region, 10, 20).unwrap();
        assert_eq!((origin.saturation, origin.value), (0, 0));
        let far = pick(&region, 60, 34).unwrap();
        assert_eq!((far.saturation, far.value), (255, 255));
        let outside = pick(&region, -100, 500).unwrap();
        assert_eq!((outside.saturation, outside.value), (255, 0));
    }

    #[test]
    fn test_columns_floor() {
        let plane = GradientPlane::new(0, 3, 15);
        assert_eq!(plane.columns(), MIN_COLUMNS);
    }

    #[test]
    fn test_color_sweep() {
        let plane = GradientPlane::new(42, 10, 15);
        assert_eq!(plane.color_at(0, 0), Hsv::new(42, 0, 0));
        assert_eq!(plane.color_at(5, 15), Hsv::new(42, 127, 127));
        assert_eq!(plane.color_at(9, 29), Hsv::new(42, 246, 229));
    }

    #[test]
    fn test_cursor_clamps_to_last_cell() {
        let plane = GradientPlane::new(0, 20, 15);
        assert_eq!(plane.cursor(255, 255), CursorPosition { x: 19, y: 29 });
        assert_eq!(plane.cursor(0, 0), CursorPosition { x: 0, y: 0 });
    }

    #[test]
    fn test_cell_marks_cursor_half() {
        let plane = GradientPlane::new(0, 20, 15);
        // s = 17 -> 17 * 30 / 255 = 2 (upper half of row 1)
        assert_eq!(plane.cell(0, 1, 17, 0).cursor, Some(Half::Upper));
        // s = 26 -> 26 * 30 / 255 = 3 (lower half of row 1)
        assert_eq!(plane.cell(0, 1, 26, 0).cursor, Some(Half::Lower));
        assert_eq!(plane.cell(1, 1, 26, 0).cursor, None);
        assert_eq!(plane.cell(0, 2, 26, 0).cursor, None);
    }
}
