//! Core of the rgb-tui color picker.
//!
//! Everything here is independent of the terminal: fixed-point color math,
//! the six coupled channels, the saturation/value plane, pointer capture and
//! the input controller that ties them together. The `rgb_tui_cli` crate
//! renders this state and feeds events back in.

pub mod capture;
pub mod channel;
pub mod color;
pub mod gradient;
pub mod input;
pub mod utils;

pub use capture::{CaptureOwner, CaptureSlot, DragSession};
pub use channel::{Channel, ChannelModel, Reconciliation};
pub use color::{format_hex, parse_hex, Hsv, Rgb};
pub use gradient::{GradientPlane, Region};
pub use input::{Focus, InputController, InputEvent, KeyInput, PickerState, PointerEvent};
pub use utils::config::Config;
pub use utils::error::{PickerError, PickerResult, ResultExt};
