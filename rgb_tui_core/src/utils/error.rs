//! Centralized error handling for rgb-tui
//!
//! - `thiserror` for typed errors raised by the library
//! - `anyhow` for application-level results with context
//!
//! Picking itself never fails: channel writes clamp and degenerate regions
//! simply yield no pick. Errors only come from the edges (command line,
//! config file, terminal).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickerError {
    /// A color string that is not `#RRGGBB` / `#RGB`
    #[error("Invalid hex color: {0:?} (expected #RRGGBB or #RGB)")]
    InvalidHex(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Terminal setup or teardown failed
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for rgb-tui operations
pub type PickerResult<T> = anyhow::Result<T>;

/// Extension trait for adding rgb-tui specific context to errors
pub trait ResultExt<T> {
    /// Add configuration context to an error
    fn with_config_context(self, setting: &str) -> PickerResult<T>;

    /// Add terminal context to an error
    fn with_terminal_context(self, operation: &str) -> PickerResult<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for Result<T, E> {
    fn with_config_context(self, setting: &str) -> PickerResult<T> {
        use anyhow::Context;
        self.map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("Configuration error for: {}", setting))
    }

    fn with_terminal_context(self, operation: &str) -> PickerResult<T> {
        use anyhow::Context;
        self.map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("Terminal operation failed: {}", operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_error_display() {
        let err = PickerError::InvalidHex("#12".to_string());
        assert!(err.to_string().contains("\"#12\""));

        let err = PickerError::Config("gradient_rows out of range".to_string());
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_result_ext_config_context() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let err = result.with_config_context("config.yaml").unwrap_err();
        assert!(format!("{:?}", err).contains("config.yaml"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: PickerError = io.into();
        assert!(matches!(err, PickerError::Io(_)));
    }
}
