//! Logging bootstrap.
//!
//! The TUI owns the terminal, so it only ever logs to files. CLI commands
//! fall back to stderr when no log directory is configured.

use std::path::{Path, PathBuf};

use flexi_logger::{
    Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming, WriteMode,
};

use crate::model::config::LogConfig;

const LOG_FILE_BASENAME: &str = "tasktree";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("unsupported log level `{0}`; expected trace|debug|info|warn|error")]
    InvalidLevel(String),
    #[error("could not create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to start logger: {0}")]
    Backend(#[from] FlexiLoggerError),
}

/// Where log records go for this process
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    Off,
}

impl LogTarget {
    /// Pick a target from config. `interactive` is true when the TUI runs.
    pub fn resolve(config: &LogConfig, interactive: bool) -> LogTarget {
        match (&config.dir, interactive) {
            (Some(dir), _) => LogTarget::File(dir.clone()),
            (None, true) => LogTarget::Off,
            (None, false) => LogTarget::Stderr,
        }
    }
}

/// Start the logger. The returned handle must stay alive for the whole run;
/// `None` means logging is off.
pub fn init_logging(
    config: &LogConfig,
    interactive: bool,
) -> Result<Option<LoggerHandle>, LoggingError> {
    let level = normalize_level(&config.level)?;
    let handle = match LogTarget::resolve(config, interactive) {
        LogTarget::Off => return Ok(None),
        LogTarget::Stderr => Logger::try_with_str(level)?.log_to_stderr().start()?,
        LogTarget::File(dir) => start_file_logger(level, &dir)?,
    };
    log::info!(
        "event=start version={} level={}",
        env!("CARGO_PKG_VERSION"),
        level
    );
    Ok(Some(handle))
}

fn start_file_logger(level: &str, dir: &Path) -> Result<LoggerHandle, LoggingError> {
    std::fs::create_dir_all(dir).map_err(|e| LoggingError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;
    let handle = Logger::try_with_str(level)?
        .log_to_file(
            FileSpec::default()
                .directory(dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()?;
    Ok(handle)
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::InvalidLevel(other.to_string())),
    }
}
