//! The six coupled color channels and their reconciliation rule.
//!
//! RGB and HSV are both independently editable. After each event the triple
//! that changed is treated as authoritative and the other one is re-derived
//! from it. HSV is checked first so that an edit touching both triples can
//! never bounce back and forth.

use std::fmt;

use crate::color::{to_hsv, to_rgb, Hsv, Rgb};

/// Lowest value any channel can hold
pub const CHANNEL_MIN: u8 = 0;
/// Highest value any channel can hold
pub const CHANNEL_MAX: u8 = 255;

/// One of the six editable channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Hue,
    Saturation,
    Value,
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Display order of the slider stack: HSV first, then RGB
    pub const ALL: [Channel; 6] = [
        Channel::Hue,
        Channel::Saturation,
        Channel::Value,
        Channel::Red,
        Channel::Green,
        Channel::Blue,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Channel::Hue => "Hue",
            Channel::Saturation => "Saturation",
            Channel::Value => "Value",
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
        }
    }

    pub fn is_hsv(self) -> bool {
        matches!(self, Channel::Hue | Channel::Saturation | Channel::Value)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which triple was re-derived by [`ChannelModel::reconcile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// HSV changed, RGB was recomputed from it
    FromHsv,
    /// RGB changed, HSV was recomputed from it
    FromRgb,
    Unchanged,
}

/// Values of all six channels at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSnapshot {
    pub rgb: Rgb,
    pub hsv: Hsv,
}

/// Canonical storage for the picked color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelModel {
    rgb: Rgb,
    hsv: Hsv,
}

impl ChannelModel {
    /// Start from an RGB color; HSV is derived from it.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            rgb,
            hsv: to_hsv(rgb),
        }
    }

    /// Start from an HSV color; RGB is derived from it.
    pub fn from_hsv(hsv: Hsv) -> Self {
        Self {
            rgb: to_rgb(hsv),
            hsv,
        }
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    pub fn snapshot(&self) -> ChannelSnapshot {
        ChannelSnapshot {
            rgb: self.rgb,
            hsv: self.hsv,
        }
    }

    pub fn get(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Hue => self.hsv.h,
            Channel::Saturation => self.hsv.s,
            Channel::Value => self.hsv.v,
            Channel::Red => self.rgb.r,
            Channel::Green => self.rgb.g,
            Channel::Blue => self.rgb.b,
        }
    }

    /// Write a single channel without reconciling.
    pub fn set(&mut self, channel: Channel, value: u8) {
        let slot = match channel {
            Channel::Hue => &mut self.hsv.h,
            Channel::Saturation => &mut self.hsv.s,
            Channel::Value => &mut self.hsv.v,
            Channel::Red => &mut self.rgb.r,
            Channel::Green => &mut self.rgb.g,
            Channel::Blue => &mut self.rgb.b,
        };
        *slot = value;
    }

    /// Write a channel from an unbounded value, clamping into [0, 255].
    pub fn set_clamped(&mut self, channel: Channel, value: i32) {
        self.set(channel, clamp_channel(value));
    }

    /// Apply a signed step to a channel, saturating at the bounds.
    pub fn step(&mut self, channel: Channel, delta: i32) {
        let current = i32::from(self.get(channel));
        self.set_clamped(channel, current.saturating_add(delta));
    }

    /// Re-derive whichever triple did not change since `before`.
    pub fn reconcile(&mut self, before: ChannelSnapshot) -> Reconciliation {
        if self.hsv != before.hsv {
            self.rgb = to_rgb(self.hsv);
            Reconciliation::FromHsv
        } else if self.rgb != before.rgb {
            self.hsv = to_hsv(self.rgb);
            Reconciliation::FromRgb
        } else {
            Reconciliation::Unchanged
        }
    }

    /// Snapshot, run `edit`, then reconcile.
    pub fn edit<F>(&mut self, edit: F) -> Reconciliation
    where
        F: FnOnce(&mut ChannelModel),
    {
        let before = self.snapshot();
        edit(self);
        self.reconcile(before)
    }
}

impl Default for ChannelModel {
    fn default() -> Self {
        Self::from_rgb(Rgb::RED)
    }
}

/// Clamp any integer into the channel range.
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(i32::from(CHANNEL_MIN), i32::from(CHANNEL_MAX)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_pure_red() {
        let model = ChannelModel::default();
        assert_eq!(model.rgb(), Rgb::new(255, 0, 0));
        assert_eq!(model.hsv(), Hsv::new(0, 255, 255));
    }

    #[test]
    fn test_step_saturates() {
        let mut model = ChannelModel::default();
        model.step(Channel::Red, 10);
        assert_eq!(model.get(Channel::Red), 255);
        model.step(Channel::Green, -1);
        assert_eq!(model.get(Channel::Green), 0);
        model.step(Channel::Blue, i32::MAX);
        assert_eq!(model.get(Channel::Blue), 255);
    }

    #[test]
    fn test_hsv_edit_rederives_rgb() {
        let mut model = ChannelModel::default();
        let outcome = model.edit(|m| m.set(Channel::Hue, 85));
        assert_eq!(outcome, Reconciliation::FromHsv);
        assert_eq!(model.rgb(), Rgb::new(3, 255, 0));
        assert_eq!(model.hsv(), Hsv::new(85, 255, 255));
    }

    #[test]
    fn test_rgb_edit_rederives_hsv() {
        let mut model = ChannelModel::default();
        let outcome = model.edit(|m| m.set(Channel::Blue, 255));
        assert_eq!(outcome, Reconciliation::FromRgb);
        assert_eq!(model.rgb(), Rgb::new(255, 0, 255));
        // 43 * (0 - 255) / 255 = -43, wrapped
        assert_eq!(model.hsv(), Hsv::new(213, 255, 255));
    }

    #[test]
    fn test_hsv_wins_when_both_change() {
        let mut model = ChannelModel::default();
        let outcome = model.edit(|m| {
            m.set(Channel::Red, 0);
            m.set(Channel::Value, 128);
        });
        assert_eq!(outcome, Reconciliation::FromHsv);
        assert_eq!(model.rgb(), to_rgb(Hsv::new(0, 255, 128)));
    }

    #[test]
    fn test_noop_edit_is_unchanged() {
        let mut model = ChannelModel::from_rgb(Rgb::new(1, 2, 3));
        let before = model.clone();
        let outcome = model.edit(|m| m.set(Channel::Green, 2));
        assert_eq!(outcome, Reconciliation::Unchanged);
        assert_eq!(model, before);
    }
}
