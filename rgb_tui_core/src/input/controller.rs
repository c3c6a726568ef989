//! Root component: owns the channels and routes every event.

use super::{
    Component, EventContext, Focus, GradientPicker, InputEvent, KeyInput, PickerState, SliderStack,
};
use crate::capture::CaptureSlot;
use crate::channel::{Channel, ChannelModel, Reconciliation};
use crate::color::{Hsv, Rgb};
use crate::gradient::Region;

/// Owns the canonical color and the picker's components.
///
/// Every event goes through [`InputController::handle_event`], which
/// snapshots the channels, dispatches, and reconciles RGB with HSV before
/// returning. Read the result with [`InputController::rgb`].
#[derive(Debug)]
pub struct InputController {
    channels: ChannelModel,
    capture: CaptureSlot,
    picker: GradientPicker,
    sliders: SliderStack,
    focus: Focus,
    last_reconciliation: Reconciliation,
}

impl InputController {
    pub fn new(initial: Rgb, gradient_rows: u16) -> Self {
        Self {
            channels: ChannelModel::from_rgb(initial),
            capture: CaptureSlot::new(),
            picker: GradientPicker::new(gradient_rows),
            sliders: SliderStack::new(),
            focus: Focus::default(),
            last_reconciliation: Reconciliation::Unchanged,
        }
    }

    pub fn rgb(&self) -> Rgb {
        self.channels.rgb()
    }

    pub fn hsv(&self) -> Hsv {
        self.channels.hsv()
    }

    pub fn channels(&self) -> &ChannelModel {
        &self.channels
    }

    pub fn picker(&self) -> &GradientPicker {
        &self.picker
    }

    pub fn sliders(&self) -> &SliderStack {
        &self.sliders
    }

    pub fn capture(&self) -> &CaptureSlot {
        &self.capture
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn picker_state(&self) -> PickerState {
        self.picker.state()
    }

    /// Outcome of the reconciliation run by the most recent event
    pub fn last_reconciliation(&self) -> Reconciliation {
        self.last_reconciliation
    }

    pub fn reflect_gradient(&mut self, region: Region) {
        self.picker.reflect(region);
    }

    pub fn reflect_slider(&mut self, channel: Channel, region: Region) {
        self.sliders.reflect(channel, region);
    }

    /// Process one event to completion. Returns whether it was consumed.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        let before = self.channels.snapshot();
        let consumed = self.dispatch(event);
        self.last_reconciliation = self.channels.reconcile(before);

        if self.last_reconciliation != Reconciliation::Unchanged {
            crate::debug_module!(
                "INPUT",
                "{:?} after {:?}: rgb={:?} hsv={:?}",
                self.last_reconciliation,
                event,
                self.channels.rgb(),
                self.channels.hsv()
            );
        }
        consumed
    }

    fn dispatch(&mut self, event: &InputEvent) -> bool {
        if let InputEvent::FocusLost = event {
            self.capture.revoke();
            let picker = self.picker.expire_lost_capture();
            let sliders = self.sliders.expire_lost_capture();
            return picker || sliders;
        }

        if let InputEvent::Key(KeyInput::Tab | KeyInput::BackTab) = event {
            self.focus = self.focus.toggled();
            return true;
        }

        let mut ctx = EventContext {
            channels: &mut self.channels,
            capture: &self.capture,
            focus: &mut self.focus,
        };

        match event {
            InputEvent::Key(_) => match *ctx.focus {
                Focus::Picker => self.picker.handle_event(event, &mut ctx),
                Focus::Sliders => self.sliders.handle_event(event, &mut ctx),
            },
            InputEvent::Step { .. } => self.sliders.handle_event(event, &mut ctx),
            // Sliders get first refusal; the plane only sees what they pass on.
            InputEvent::Pointer(_) => {
                self.sliders.handle_event(event, &mut ctx)
                    || self.picker.handle_event(event, &mut ctx)
            }
            InputEvent::FocusLost => false,
        }
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(Rgb::RED, crate::gradient::DEFAULT_ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerEvent;

    #[test]
    fn test_tab_toggles_focus() {
        let mut controller = InputController::default();
        assert_eq!(controller.focus(), Focus::Sliders);
        assert!(controller.handle_event(&InputEvent::Key(KeyInput::Tab)));
        assert_eq!(controller.focus(), Focus::Picker);
        controller.handle_event(&InputEvent::Key(KeyInput::BackTab));
        assert_eq!(controller.focus(), Focus::Sliders);
    }

    #[test]
    fn test_focus_lost_abandons_drag() {
        let mut controller = InputController::default();
        controller.reflect_gradient(Region::new(0, 0, 50, 14));

        controller.handle_event(&InputEvent::Pointer(PointerEvent::press(10, 5)));
        assert_eq!(controller.picker_state(), PickerState::Dragging);

        assert!(controller.handle_event(&InputEvent::FocusLost));
        assert_eq!(controller.picker_state(), PickerState::Idle);
        assert!(!controller.capture().is_held());

        let hsv = controller.hsv();
        assert!(!controller.handle_event(&InputEvent::Pointer(PointerEvent::drag(40, 10))));
        assert_eq!(controller.hsv(), hsv);
    }
}
