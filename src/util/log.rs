// src/util/log.rs

//! Logger Utility - file-based logging so ledger activity never draws over the TUI
use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::sync::OnceLock;
use chrono::Local;

pub static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Global logger instance, set once by [`init_logger`]
pub static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Log severity levels, most severe first
#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    const ALL: [LogLevel; 4] = [LogLevel::Error, LogLevel::Warn, LogLevel::Info, LogLevel::Debug];

    fn label(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    fn file_name(self) -> String {
        format!("{}.log", self.label().to_lowercase())
    }
}

/// One file per severity under `log_dir`, truncated on startup
pub struct Logger {
    files: Vec<Mutex<File>>,
}

impl Logger {
    pub fn new(log_dir: &Path) -> std::io::Result<Self> {
        DEBUG_ENABLED.get_or_init(|| {
            std::env::var("DEBUG").unwrap_or_default() == "true"
        });

        create_dir_all(log_dir)?;
        let files = LogLevel::ALL
            .iter()
            .map(|level| File::create(log_dir.join(level.file_name())).map(Mutex::new))
            .collect::<std::io::Result<Vec<_>>>()?;

        Ok(Self { files })
    }

    fn write_line(&self, level: LogLevel, message: &str) {
        let line = format!(
            "{} {:<5} {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            level.label(),
            message
        );

        if let Some(Ok(mut file)) = self.files.get(level as usize).map(|f| f.lock()) {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }

    pub fn error(&self, message: &str) {
        self.write_line(LogLevel::Error, message);
    }

    pub fn warn(&self, message: &str) {
        self.write_line(LogLevel::Warn, message);
    }

    pub fn info(&self, message: &str) {
        self.write_line(LogLevel::Info, message);
    }

    pub fn debug(&self, message: &str) {
        self.write_line(LogLevel::Debug, message);
    }
}

/// Install the global logger. Later calls keep the first logger.
pub fn init_logger(log_dir: &Path) -> std::io::Result<()> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let logger = Logger::new(log_dir)?;
    let _ = LOGGER.set(logger);
    Ok(())
}

/// Convenience macro for error logging with formatting
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::LOGGER.get() {
            logger.error(&format!($($arg)*));
        }
    }};
}

/// Convenience macro for warning logging with formatting
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::LOGGER.get() {
            logger.warn(&format!($($arg)*));
        }
    }};
}

/// Convenience macro for info logging with formatting
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        if let Some(logger) = $crate::util::log::LOGGER.get() {
            logger.info(&format!($($arg)*));
        }
    }};
}

/// Convenience macro for debug logging with formatting
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        if *$crate::util::log::DEBUG_ENABLED.get().unwrap_or(&false) {
            if let Some(logger) = $crate::util::log::LOGGER.get() {
                logger.debug(&format!($($arg)*));
            }
        }
    }};
}
