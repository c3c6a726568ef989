//! Debug logging for rgb-tui
//!
//! Debug output always goes to the log file, never to the terminal.
//!
//! ```rust
//! use rgb_tui_core::{debug, debug_module};
//!
//! debug!("redraw took {} ms", 3);
//! debug_module!("PICKER", "captured pointer at {},{}", 10, 4);
//! ```
//!
//! # Environment Variables
//!
//! - `RGB_TUI_DEBUG=1` - Enable debug logging (set by `--debug`)

use std::sync::OnceLock;

pub const DEBUG_ENV_VAR: &str = "RGB_TUI_DEBUG";

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if debug mode is enabled. The answer is cached on first call.
#[inline]
pub fn is_debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| {
        std::env::var(DEBUG_ENV_VAR)
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
    })
}

#[inline]
pub fn debug_print(msg: &str) {
    if is_debug_enabled() {
        crate::utils::logger::debug(msg);
    }
}

#[inline]
pub fn debug_print_module(module: &str, msg: &str) {
    if is_debug_enabled() {
        crate::utils::logger::debug(&format!("[{}] {}", module, msg));
    }
}

/// Times an operation; logs only in debug mode.
pub struct DebugTimer {
    name: String,
    start: std::time::Instant,
    enabled: bool,
}

impl DebugTimer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: std::time::Instant::now(),
            enabled: is_debug_enabled(),
        }
    }

    pub fn checkpoint(&self, label: &str) {
        if self.enabled {
            debug_print_module(
                "PERF",
                &format!("{} - {}: {:?}", self.name, label, self.start.elapsed()),
            );
        }
    }

    pub fn finish(self) {
        if self.enabled {
            debug_print_module(
                "PERF",
                &format!("{} completed in {:?}", self.name, self.start.elapsed()),
            );
        }
    }
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if $crate::utils::debug::is_debug_enabled() {
            $crate::utils::logger::debug(&format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! debug_module {
    ($module:expr, $($arg:tt)*) => {
        if $crate::utils::debug::is_debug_enabled() {
            let msg = format!($($arg)*);
            $crate::utils::logger::debug(&format!("[{}] {}", $module, msg));
        }
    };
}

/// Only executes the body if debug is enabled
#[macro_export]
macro_rules! debug_block {
    ($($body:tt)*) => {
        if $crate::utils::debug::is_debug_enabled() {
            $($body)*
        }
    };
}
