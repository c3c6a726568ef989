//! Exclusive pointer capture.
//!
//! A [`CaptureSlot`] is shared by every component of one picker. Holding a
//! [`DragSession`] means owning the pointer until the button is released.
//! The slot can be revoked from outside (terminal focus lost); the holder
//! notices on its next event through [`DragSession::is_live`].

use std::cell::Cell;
use std::rc::Rc;

use crate::channel::Channel;

/// Components that can own a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOwner {
    Gradient,
    Slider(Channel),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Hold {
    owner: CaptureOwner,
    id: u64,
}

#[derive(Debug, Default)]
struct SlotState {
    holder: Cell<Option<Hold>>,
    next_id: Cell<u64>,
}

/// Single-slot capture shared between components
#[derive(Debug, Clone, Default)]
pub struct CaptureSlot {
    state: Rc<SlotState>,
}

impl CaptureSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the slot for `owner`, or `None` if anyone already holds it.
    pub fn try_acquire(&self, owner: CaptureOwner) -> Option<DragSession> {
        if self.state.holder.get().is_some() {
            return None;
        }

        let id = self.state.next_id.get();
        self.state.next_id.set(id.wrapping_add(1));

        let hold = Hold { owner, id };
        self.state.holder.set(Some(hold));

        Some(DragSession {
            state: Rc::clone(&self.state),
            hold,
        })
    }

    pub fn holder(&self) -> Option<CaptureOwner> {
        self.state.holder.get().map(|hold| hold.owner)
    }

    pub fn is_held(&self) -> bool {
        self.state.holder.get().is_some()
    }

    /// Drop whatever capture is active. Outstanding sessions become stale.
    pub fn revoke(&self) {
        self.state.holder.set(None);
    }
}

/// Guard for an in-progress drag. Releasing it (explicitly or by drop)
/// frees the slot, unless the slot has moved on to someone else.
#[derive(Debug)]
pub struct DragSession {
    state: Rc<SlotState>,
    hold: Hold,
}

impl DragSession {
    pub fn owner(&self) -> CaptureOwner {
        self.hold.owner
    }

    /// Whether this session still holds the slot
    pub fn is_live(&self) -> bool {
        self.state.holder.get() == Some(self.hold)
    }

    pub fn release(self) {
        // Drop does the work
    }
}

impl Drop for DragSession {
    fn drop(&mut self) {
        if self.is_live() {
            self.state.holder.set(None);
        }
    }
}
