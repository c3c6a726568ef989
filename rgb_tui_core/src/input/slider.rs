//! Per-channel sliders and the vertical stack that holds them.

use super::{Component, EventContext, Focus, InputEvent, KeyInput, PointerButton, PointerPhase};
use crate::capture::{CaptureOwner, DragSession};
use crate::channel::Channel;
use crate::gradient::Region;

/// A slider bound to one channel
#[derive(Debug)]
pub struct SliderBinding {
    channel: Channel,
    step: i32,
    region: Option<Region>,
    session: Option<DragSession>,
}

impl SliderBinding {
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            step: 1,
            region: None,
            session: None,
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    pub fn region(&self) -> Option<Region> {
        self.region
    }

    /// Record where the slider's bar was laid out this frame.
    pub fn reflect(&mut self, region: Region) {
        self.region = Some(region);
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Drop a session whose capture was taken away.
    pub fn expire_lost_capture(&mut self) -> bool {
        if self.session.as_ref().is_some_and(|s| !s.is_live()) {
            self.session = None;
            return true;
        }
        false
    }

    fn set_from_pointer(&self, x: i32, ctx: &mut EventContext<'_>) {
        if let Some(value) = self.region.and_then(|region| region.scale_x(x)) {
            ctx.channels.set(self.channel, value);
        }
    }

    fn handle_pointer(
        &mut self,
        x: i32,
        y: i32,
        button: PointerButton,
        phase: PointerPhase,
        ctx: &mut EventContext<'_>,
    ) -> bool {
        self.expire_lost_capture();

        match phase {
            PointerPhase::Released => match self.session.take() {
                Some(session) => {
                    session.release();
                    true
                }
                None => false,
            },
            PointerPhase::Moved => {
                if self.session.is_none() {
                    return false;
                }
                self.set_from_pointer(x, ctx);
                true
            }
            PointerPhase::Pressed => {
                let inside = self
                    .region
                    .is_some_and(|region| region.span_x() > 0 && region.contains(x, y));
                if button != PointerButton::Left || !inside || self.session.is_some() {
                    return false;
                }
                let Some(session) = ctx.capture.try_acquire(CaptureOwner::Slider(self.channel))
                else {
                    return false;
                };
                crate::debug_module!("SLIDER", "{} captured pointer at {},{}", self.channel, x, y);
                self.session = Some(session);
                *ctx.focus = Focus::Sliders;
                self.set_from_pointer(x, ctx);
                true
            }
        }
    }
}

impl Component for SliderBinding {
    fn handle_event(&mut self, event: &InputEvent, ctx: &mut EventContext<'_>) -> bool {
        match *event {
            InputEvent::Step { channel, delta } if channel == self.channel => {
                ctx.channels.step(self.channel, delta.saturating_mul(self.step));
                true
            }
            InputEvent::Key(KeyInput::Left) => {
                ctx.channels.step(self.channel, -self.step);
                true
            }
            InputEvent::Key(KeyInput::Right) => {
                ctx.channels.step(self.channel, self.step);
                true
            }
            InputEvent::Pointer(pointer) => {
                self.handle_pointer(pointer.x, pointer.y, pointer.button, pointer.phase, ctx)
            }
            _ => false,
        }
    }
}

/// Vertical container of the six sliders, HSV first
#[derive(Debug)]
pub struct SliderStack {
    sliders: Vec<SliderBinding>,
    selected: usize,
}

impl SliderStack {
    pub fn new() -> Self {
        Self {
            sliders: Channel::ALL.iter().copied().map(SliderBinding::new).collect(),
            selected: 0,
        }
    }

    pub fn sliders(&self) -> &[SliderBinding] {
        &self.sliders
    }

    pub fn selected(&self) -> Channel {
        self.sliders[self.selected].channel()
    }

    pub fn select(&mut self, channel: Channel) {
        if let Some(index) = self.index_of(channel) {
            self.selected = index;
        }
    }

    pub fn reflect(&mut self, channel: Channel, region: Region) {
        if let Some(index) = self.index_of(channel) {
            self.sliders[index].reflect(region);
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.sliders.iter().any(SliderBinding::is_dragging)
    }

    pub fn expire_lost_capture(&mut self) -> bool {
        self.sliders
            .iter_mut()
            .fold(false, |expired, slider| slider.expire_lost_capture() || expired)
    }

    fn index_of(&self, channel: Channel) -> Option<usize> {
        self.sliders.iter().position(|s| s.channel() == channel)
    }

    fn move_selection(&mut self, delta: isize) {
        let last = self.sliders.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }
}

impl Default for SliderStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SliderStack {
    fn handle_event(&mut self, event: &InputEvent, ctx: &mut EventContext<'_>) -> bool {
        match event {
            InputEvent::Key(KeyInput::Up) => {
                self.move_selection(-1);
                true
            }
            InputEvent::Key(KeyInput::Down) => {
                self.move_selection(1);
                true
            }
            InputEvent::Key(KeyInput::Left | KeyInput::Right) => {
                self.sliders[self.selected].handle_event(event, ctx)
            }
            InputEvent::Step { channel, .. } => match self.index_of(*channel) {
                Some(index) => self.sliders[index].handle_event(event, ctx),
                None => false,
            },
            InputEvent::Pointer(_) => {
                for (index, slider) in self.sliders.iter_mut().enumerate() {
                    if slider.handle_event(event, ctx) {
                        if slider.is_dragging() {
                            self.selected = index;
                        }
                        return true;
                    }
                }
                false
            }
            _ => false,
        }
    }
}
