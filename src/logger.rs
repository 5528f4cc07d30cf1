//! File logging for the terminal UI.
//!
//! The TUI owns stdout, so log records only ever go to a file under the local
//! data directory. Call sites use the `log` macros.

use crate::constants::{APP_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;
use std::path::PathBuf;

/// Install the global logger.
///
/// When `enabled` is false every record is filtered out and no file is
/// created. Returns the log file path when logging to a file.
pub fn init(enabled: bool) -> Result<Option<PathBuf>> {
    if !enabled {
        log::set_max_level(LevelFilter::Off);
        return Ok(None);
    }

    let log_path = get_log_file_path()?;
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let log_file = fern::log_file(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(LevelFilter::Debug)
        .chain(log_file)
        .apply()
        .context("Failed to install logger")?;

    log::info!("Logging to {}", log_path.display());
    Ok(Some(log_path))
}

/// Location of the log file
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))
        .map(|dir| dir.join(APP_NAME).join(LOG_FILE_NAME))
}
