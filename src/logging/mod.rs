//! Tracing subscriber initialization.
//!
//! The core only emits `tracing` events; embedding applications decide
//! whether to install a subscriber. [`init`] writes them to a plain file that
//! can be followed with `tail -f` while the gallery runs.

use crate::config::ResolvedConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "pixquery=info";

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory could not be created.
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The path has no usable file name or parent directory.
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// A global subscriber is already installed.
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Install a global subscriber writing to `log_path`.
///
/// Honors `RUST_LOG`, falling back to [`DEFAULT_FILTER`]. The parent
/// directory is created when missing.
///
/// # Errors
///
/// Fails on an unusable path, when the directory cannot be created, or when
/// a subscriber is already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let (directory, file_name) = split_log_path(log_path)?;
    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    let writer = tracing_appender::rolling::never(directory, file_name);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

/// [`init`] at the path chosen by the resolved configuration.
///
/// # Errors
///
/// Same as [`init`].
pub fn init_from_config(config: &ResolvedConfig) -> Result<(), LoggingError> {
    init(&config.log_file_path)
}

/// Split into (directory, file name). A bare file name logs to the current directory.
fn split_log_path(log_path: &Path) -> Result<(&Path, &str), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        Some(_) => Path::new("."),
        None => return Err(LoggingError::InvalidPath(log_path.to_path_buf())),
    };

    Ok((directory, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    // ===== Path Handling =====

    #[test]
    fn split_separates_directory_and_file() {
        let (dir, file) = split_log_path(Path::new("/var/log/pixquery/gallery.log"))
            .expect("valid path");

        assert_eq!(dir, Path::new("/var/log/pixquery"));
        assert_eq!(file, "gallery.log");
    }

    #[test]
    fn bare_file_name_logs_to_current_directory() {
        let (dir, file) = split_log_path(Path::new("pixquery.log")).expect("valid path");

        assert_eq!(dir, Path::new("."));
        assert_eq!(file, "pixquery.log");
    }

    #[test]
    fn root_path_is_rejected() {
        assert!(matches!(
            init(Path::new("/")),
            Err(LoggingError::InvalidPath(_))
        ));
    }

    // ===== Subscriber Install =====

    #[test]
    #[serial(tracing_init)]
    fn init_from_config_creates_missing_directory() {
        let test_dir = std::env::temp_dir().join("pixquery_test_logs_config");
        let _ = fs::remove_dir_all(&test_dir);
        let config = ResolvedConfig {
            log_file_path: test_dir.join("nested").join("gallery.log"),
            ..ResolvedConfig::default()
        };

        // Subscriber may already be set by another test; the directory is created first
        let _ = init_from_config(&config);

        assert!(test_dir.join("nested").exists());

        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn second_init_reports_existing_subscriber() {
        let test_dir = std::env::temp_dir().join("pixquery_test_logs_twice");
        let log_file = test_dir.join("twice.log");

        let _ = init(&log_file);
        let second = init(&log_file);

        assert!(matches!(second, Err(LoggingError::SubscriberAlreadySet)));

        let _ = fs::remove_dir_all(&test_dir);
    }
}
