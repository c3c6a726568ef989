//! Shared utilities: configuration, error types and logging.

pub mod config;
pub mod debug;
pub mod error;
pub mod logger;

// Available exports via submodules:
// config::Config
// debug::{is_debug_enabled, debug_print, DebugTimer}
// error::{PickerError, PickerResult, ResultExt}
