//! File logging for TMan.
//!
//! The terminal belongs to the UI, so log records only ever go to a file in
//! the per-user log directory.

use crate::config::{Config, LoggingConfig};
use crate::constants::LOG_FILE_NAME;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Install the global logger described by `config`.
///
/// Returns the log file path, or `None` when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = get_log_file_path()?;
    dispatch(config, &path)?
        .apply()
        .context("Failed to install logger")?;
    Ok(Some(path))
}

/// Build the dispatcher writing to `path`, creating its directory if needed
pub fn dispatch(config: &LoggingConfig, path: &Path) -> Result<fern::Dispatch> {
    let level = config.level_filter()?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file))
}

/// Location of the log file
pub fn get_log_file_path() -> Result<PathBuf> {
    Ok(Config::get_log_dir()?.join(LOG_FILE_NAME))
}
