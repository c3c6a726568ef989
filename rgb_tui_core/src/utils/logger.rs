use chrono::{DateTime, Utc};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

/// Where the log goes, relative to the working directory
pub const DEFAULT_LOG_DIR: &str = ".rgb-tui/logs";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Debug,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Append-only file logger. The picker owns the terminal while it runs, so
/// nothing is ever printed to stdout or stderr from here.
#[derive(Clone)]
pub struct Logger {
    log_file_path: PathBuf,
    file_handle: Arc<Mutex<Option<fs::File>>>,
}

impl Logger {
    pub fn new() -> std::io::Result<Self> {
        Self::in_dir(DEFAULT_LOG_DIR)
    }

    /// Log to `latest.log` inside `dir`, creating the directory if needed.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> std::io::Result<Self> {
        let logs_dir = dir.as_ref();
        fs::create_dir_all(logs_dir)?;

        let log_file_path = logs_dir.join("latest.log");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file_path)?;

        Ok(Self {
            log_file_path,
            file_handle: Arc::new(Mutex::new(Some(file))),
        })
    }

    pub fn path(&self) -> &Path {
        &self.log_file_path
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        let timestamp: DateTime<Utc> = Utc::now();
        let formatted_timestamp = timestamp.format("%Y-%m-%d %H:%M:%S%.3f UTC");

        let log_line = format!("[{}] [{}] {}\n", formatted_timestamp, level, message);

        if let Ok(mut file_guard) = self.file_handle.lock() {
            if let Some(ref mut file) = *file_guard {
                let _ = file.write_all(log_line.as_bytes());
                let _ = file.flush();
            }
        }
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Start the global logger in [`DEFAULT_LOG_DIR`] when `enabled`. Returns
/// whether a logger was started; nothing touches the disk otherwise.
pub fn init_global_logger(enabled: bool) -> Result<bool, Box<dyn std::error::Error>> {
    init_global_logger_in(DEFAULT_LOG_DIR, enabled)
}

pub fn init_global_logger_in<P: AsRef<Path>>(
    dir: P,
    enabled: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    if !enabled {
        return Ok(false);
    }
    let logger = Logger::in_dir(dir)?;
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| "Logger already initialized")?;
    Ok(true)
}

pub fn get_global_logger() -> Option<&'static Logger> {
    GLOBAL_LOGGER.get()
}

// Convenience functions for global logging; no-ops until initialized
pub fn log(level: LogLevel, message: &str) {
    if let Some(logger) = get_global_logger() {
        logger.log(level, message);
    }
}

pub fn info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn debug(message: &str) {
    log(LogLevel::Debug, message);
}

pub fn warn(message: &str) {
    log(LogLevel::Warn, message);
}

pub fn error(message: &str) {
    log(LogLevel::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_logger_appends_lines() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let logger = Logger::in_dir(temp_dir.path().join("logs"))?;

        logger.info("picker started");
        logger.warn("capture lost");

        let content = fs::read_to_string(logger.path())?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[INFO] picker started"));
        assert!(lines[1].contains("[WARN] capture lost"));
        Ok(())
    }

    #[test]
    fn test_disabled_logger_creates_no_files() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let logs_dir = temp_dir.path().join("logs");

        assert!(!init_global_logger_in(&logs_dir, false)?);
        assert!(!logs_dir.exists());
        assert!(fs::read_dir(temp_dir.path())?.next().is_none());
        Ok(())
    }

    #[test]
    fn test_global_helpers_without_logger_do_not_panic() {
        debug("nothing to see");
    }
}
