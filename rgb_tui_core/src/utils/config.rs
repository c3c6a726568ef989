use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::color::{parse_hex, Rgb};
use crate::gradient::DEFAULT_ROWS;
use crate::utils::error::{PickerError, PickerResult, ResultExt};

pub const MIN_GRADIENT_ROWS: u16 = 2;
pub const MAX_GRADIENT_ROWS: u16 = 64;
pub const DEFAULT_MAX_WIDTH: u16 = 80;
pub const MIN_MAX_WIDTH: u16 = 30;

/// Startup settings, read from `~/.rgb-tui/config.yaml`. Every field is
/// optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color the picker opens with, as `#RRGGBB` or `#RGB`
    pub initial_color: String,

    /// Terminal rows used by the gradient plane
    pub gradient_rows: u16,

    /// Upper bound on the picker's width in columns
    pub max_width: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_color: "#FF0000".to_string(),
            gradient_rows: DEFAULT_ROWS,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PickerResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).with_config_context(&path.display().to_string())?;
        let config: Config = serde_yaml::from_str(&content)
            .map_err(PickerError::from)
            .with_config_context(&path.display().to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn get_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rgb-tui")
            .join("config.yaml")
    }

    /// Load `path`, or the default location when `None`. A missing file
    /// gives the defaults; a broken one is an error.
    pub fn load_or_default(path: Option<&Path>) -> PickerResult<Self> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::get_config_path);

        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(&config_path)
    }

    pub fn validate(&self) -> PickerResult<()> {
        if parse_hex(&self.initial_color).is_err() {
            return Err(PickerError::Config(format!(
                "initial_color {:?} is not #RRGGBB or #RGB",
                self.initial_color
            ))
            .into());
        }
        Ok(())
    }

    pub fn initial_rgb(&self) -> PickerResult<Rgb> {
        parse_hex(&self.initial_color).with_config_context("initial_color")
    }

    /// Rows clamped into the supported range
    pub fn gradient_rows(&self) -> u16 {
        self.gradient_rows.clamp(MIN_GRADIENT_ROWS, MAX_GRADIENT_ROWS)
    }

    pub fn max_width(&self) -> u16 {
        self.max_width.max(MIN_MAX_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.initial_rgb().unwrap(), Rgb::RED);
        assert_eq!(config.gradient_rows(), 15);
        assert_eq!(config.max_width(), 80);
    }

    #[test]
    fn test_limits_are_clamped() {
        let config = Config {
            gradient_rows: 500,
            max_width: 5,
            ..Config::default()
        };
        assert_eq!(config.gradient_rows(), MAX_GRADIENT_ROWS);
        assert_eq!(config.max_width(), MIN_MAX_WIDTH);
    }

    #[test]
    fn test_validate_reports_config_error() {
        let config = Config {
            initial_color: "#12".to_string(),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert_matches!(err.downcast_ref::<PickerError>(), Some(PickerError::Config(_)));
        assert!(err.to_string().contains("initial_color \"#12\""));
    }

    #[test]
    fn test_config_path_ends_in_app_dir() {
        let path = Config::get_config_path();
        assert!(path.ends_with(".rgb-tui/config.yaml"));
    }
}
