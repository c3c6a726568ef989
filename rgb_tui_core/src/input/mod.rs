//! Input events and the components that interpret them.
//!
//! The terminal layer translates raw device events into [`InputEvent`]s and
//! feeds them one at a time to an [`InputController`]. Each component gets a
//! mutable view of the shared channels plus the capture slot through an
//! [`EventContext`] and reports whether it consumed the event.

pub mod controller;
pub mod picker;
pub mod slider;

pub use controller::InputController;
pub use picker::{GradientPicker, PickerState};
pub use slider::{SliderBinding, SliderStack};

use crate::capture::CaptureSlot;
use crate::channel::{Channel, ChannelModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    /// Motion reported with no button held
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Pressed,
    Moved,
    Released,
}

/// A pointer event in device (terminal cell) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub x: i32,
    pub y: i32,
    pub button: PointerButton,
    pub phase: PointerPhase,
}

impl PointerEvent {
    pub fn press(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            button: PointerButton::Left,
            phase: PointerPhase::Pressed,
        }
    }

    pub fn drag(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            button: PointerButton::Left,
            phase: PointerPhase::Moved,
        }
    }

    pub fn release(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            button: PointerButton::Left,
            phase: PointerPhase::Released,
        }
    }
}

/// Navigation keys understood by the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Left,
    Right,
    Up,
    Down,
    Tab,
    BackTab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Key(KeyInput),
    /// Step one slider by `delta` increments, whatever has focus
    Step { channel: Channel, delta: i32 },
    /// The terminal lost focus; any drag in progress is abandoned
    FocusLost,
}

/// Which part of the picker receives key events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Picker,
    #[default]
    Sliders,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Picker => Focus::Sliders,
            Focus::Sliders => Focus::Picker,
        }
    }
}

/// Everything a component may touch while handling one event
pub struct EventContext<'a> {
    pub channels: &'a mut ChannelModel,
    pub capture: &'a CaptureSlot,
    pub focus: &'a mut Focus,
}

/// Common event-handling capability of the picker's components
pub trait Component {
    /// Returns `true` when the event was consumed.
    fn handle_event(&mut self, event: &InputEvent, ctx: &mut EventContext<'_>) -> bool;
}
