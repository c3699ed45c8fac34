//! Tracing setup
//!
//! The terminal belongs to the TUI, so log output goes to a file. Without a
//! log file no subscriber is installed and `tracing` events are dropped.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to open log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to install tracing subscriber: {0}")]
    Init(String),
}

/// Install a file-backed fmt subscriber
///
/// Returns `Ok(false)` when `log_file` is `None`.
pub fn init(log_file: Option<&Path>, level: LevelFilter) -> Result<bool, LoggingError> {
    let Some(path) = log_file else {
        return Ok(false);
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_means_no_subscriber() {
        assert!(!init(None, LevelFilter::INFO).unwrap());
    }

    #[test]
    fn unwritable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("algoflow.log");
        assert!(matches!(
            init(Some(&path), LevelFilter::INFO),
            Err(LoggingError::Io(_))
        ));
    }
}
