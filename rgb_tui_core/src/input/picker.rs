//! Drag-to-pick component for the saturation/value plane.

use super::{Component, EventContext, Focus, InputEvent, KeyInput, PointerButton, PointerEvent, PointerPhase};
use crate::capture::{CaptureOwner, DragSession};
use crate::channel::Channel;
use crate::gradient::{self, GradientPlane, Region, DEFAULT_ROWS};

/// Picker state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    Idle,
    Dragging,
}

#[derive(Debug)]
pub struct GradientPicker {
    rows: u16,
    region: Option<Region>,
    session: Option<DragSession>,
}

impl GradientPicker {
    pub fn new(rows: u16) -> Self {
        Self {
            rows: rows.max(1),
            region: None,
            session: None,
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn region(&self) -> Option<Region> {
        self.region
    }

    pub fn state(&self) -> PickerState {
        match self.session {
            Some(_) => PickerState::Dragging,
            None => PickerState::Idle,
        }
    }

    /// Record where the plane was laid out this frame.
    pub fn reflect(&mut self, region: Region) {
        self.region = Some(region);
    }

    /// The plane to draw for `hue` across `columns` cells.
    pub fn plane(&self, hue: u8, columns: u16) -> GradientPlane {
        GradientPlane::new(hue, columns, self.rows)
    }

    /// Drop a session whose capture was taken away.
    pub fn expire_lost_capture(&mut self) -> bool {
        if self.session.as_ref().is_some_and(|s| !s.is_live()) {
            crate::debug_module!("PICKER", "capture lost, back to idle");
            self.session = None;
            return true;
        }
        false
    }

    fn pick_at(&self, pointer: &PointerEvent, ctx: &mut EventContext<'_>) {
        let Some(region) = self.region else {
            return;
        };
        if let Some(pick) = gradient::pick(&region, pointer.x, pointer.y) {
            ctx.channels.set(Channel::Saturation, pick.saturation);
            ctx.channels.set(Channel::Value, pick.value);
        }
    }

    fn handle_pointer(&mut self, pointer: &PointerEvent, ctx: &mut EventContext<'_>) -> bool {
        self.expire_lost_capture();

        match pointer.phase {
            PointerPhase::Released => match self.session.take() {
                Some(session) => {
                    crate::debug_module!("PICKER", "released at {},{}", pointer.x, pointer.y);
                    session.release();
                    true
                }
                None => false,
            },
            PointerPhase::Moved => {
                if self.session.is_none() {
                    return false;
                }
                self.pick_at(pointer, ctx);
                true
            }
            PointerPhase::Pressed => {
                if pointer.button != PointerButton::Left || self.session.is_some() {
                    return false;
                }
                let inside = self
                    .region
                    .is_some_and(|region| region.is_usable() && region.contains(pointer.x, pointer.y));
                if !inside {
                    return false;
                }
                let Some(session) = ctx.capture.try_acquire(CaptureOwner::Gradient) else {
                    return false;
                };
                crate::debug_module!("PICKER", "captured pointer at {},{}", pointer.x, pointer.y);
                self.session = Some(session);
                *ctx.focus = Focus::Picker;
                self.pick_at(pointer, ctx);
                true
            }
        }
    }
}

impl Default for GradientPicker {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS)
    }
}

impl Component for GradientPicker {
    fn handle_event(&mut self, event: &InputEvent, ctx: &mut EventContext<'_>) -> bool {
        match event {
            InputEvent::Pointer(pointer) => self.handle_pointer(pointer, ctx),
            // Saturation grows downwards, value to the right.
            InputEvent::Key(KeyInput::Left) => {
                ctx.channels.step(Channel::Value, -1);
                true
            }
            InputEvent::Key(KeyInput::Right) => {
                ctx.channels.step(Channel::Value, 1);
                true
            }
            InputEvent::Key(KeyInput::Up) => {
                ctx.channels.step(Channel::Saturation, -1);
                true
            }
            InputEvent::Key(KeyInput::Down) => {
                ctx.channels.step(Channel::Saturation, 1);
                true
            }
            _ => false,
        }
    }
}
