use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file '{path}': {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install tracing subscriber: {0}")]
    Init(Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// Where log lines go. The terminal UI owns stdout, so it logs to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    File(PathBuf),
}

/// `RUST_LOG` wins over the configured directive.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

pub fn init_tracing(config: &LoggingConfig, sink: &LogSink) -> Result<(), LoggingError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339());

    match sink {
        LogSink::Stderr => builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(LoggingError::Init)?,
        LogSink::File(path) => {
            let file = open_log_file(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(LoggingError::Init)?
        }
    }
    Ok(())
}

fn open_log_file(path: &Path) -> Result<fs::File, LoggingError> {
    let to_error = |source: std::io::Error| LoggingError::OpenFile {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_error)
}

#[cfg(test)]
mod tests {
    use super::{open_log_file, LoggingError};

    #[test]
    fn log_file_parent_directories_are_created() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("flowlab.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unwritable_log_path_reports_the_path() {
        let dir = tempfile::TempDir::new().unwrap();
        // A directory cannot be opened for appending
        let err = open_log_file(dir.path()).unwrap_err();
        assert!(matches!(err, LoggingError::OpenFile { .. }));
        assert!(err.to_string().contains(&dir.path().display().to_string()));
    }
}
