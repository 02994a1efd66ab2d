//! Logging utilities
//!
//! The UI owns the terminal, so log records go to a size-rotated file in the
//! user's cache directory instead of stderr.
use std::fs::{self, create_dir_all};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use env_logger::{Builder, Target, fmt::TimestampPrecision};
use file_rotate::compression::Compression;
use file_rotate::suffix::AppendCount;
use file_rotate::{ContentLimit, FileRotate};
use log::LevelFilter;

/// Rotate once the active log file reaches this many bytes.
const MAX_LOG_BYTES: usize = 1024 * 1024;

/// Rotated files kept next to the active one.
const KEPT_LOG_FILES: usize = 3;

/// Location of the active log file.
///
/// # Errors
///
/// Returns an error if the platform has no cache directory for the user.
pub fn log_file_path() -> Result<PathBuf>
{
    let project_dirs = ProjectDirs::from("", "bodha", "bodha")
        .context("Failed to determine project directories")?;

    Ok(project_dirs
        .cache_dir()
        .join("bodha.log"))
}

/// Opens a rotating writer for `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created.
pub fn open_log_sink(path: &Path) -> Result<FileRotate<AppendCount>>
{
    if let Some(parent) = path.parent()
    {
        create_dir_all(parent).context("Failed to create log directory")?;
    }

    Ok(FileRotate::new(
        path,
        AppendCount::new(KEPT_LOG_FILES),
        ContentLimit::Bytes(MAX_LOG_BYTES),
        Compression::None,
        None,
    ))
}

/// Initializes the global logger, writing to `path`.
///
/// Everything logs at info, this crate at debug.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a logger is already
/// installed.
pub fn init_logging(path: &Path) -> Result<()>
{
    let sink = open_log_sink(path)?;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("bodha", LevelFilter::Debug)
        .format_timestamp(Some(TimestampPrecision::Millis))
        .target(Target::Pipe(Box::new(sink)))
        .try_init()
        .context("Failed to install logger")
}

/// Removes the log file at `path`.
///
/// A missing file is not an error.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed.
pub fn clear_log_file(path: &Path) -> Result<()>
{
    match fs::remove_file(path)
    {
        Err(err) if err.kind() != ErrorKind::NotFound =>
        {
            Err(err).context(format!("Failed to remove {}", path.display()))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests
{
    use std::io::Write;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn sink_creates_missing_directories()
    {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/logs/bodha.log");

        let mut sink = open_log_sink(&path).unwrap();
        writeln!(sink, "first record").unwrap();
        sink.flush().unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("first record"));
    }

    #[test]
    fn clearing_is_idempotent()
    {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bodha.log");
        fs::write(&path, "old").unwrap();

        clear_log_file(&path).unwrap();
        assert!(!path.exists());

        clear_log_file(&path).unwrap();
    }
}
