//! Logging setup.
//!
//! Library code logs through the `log` facade. The application calls
//! [`setup`] once at start-up to route records into a file with `fern`.

use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;
use std::fs;
use std::path::PathBuf;

use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, LOG_FILE_NAME, LOG_TIMESTAMP_FORMAT};

/// Default location of the log file
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_NAME).join(LOG_FILE_NAME))
}

/// Build the dispatcher described by `config` without installing it.
///
/// Returns `None` when logging is disabled.
pub fn build_dispatch(config: &LoggingConfig) -> Result<Option<(LevelFilter, fern::Dispatch)>> {
    if !config.enabled {
        return Ok(None);
    }

    let level = config.level_filter()?;
    let path = match &config.file {
        Some(path) => path.clone(),
        None => get_log_file_path()?,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format(LOG_TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file);

    Ok(Some((level, dispatch)))
}

/// Install the global logger according to `config`.
///
/// With logging disabled the global max level is set to `Off` and nothing is
/// installed. Fails if a global logger was already set.
pub fn setup(config: &LoggingConfig) -> Result<()> {
    match build_dispatch(config)? {
        Some((level, dispatch)) => {
            dispatch.apply().context("Failed to install logger")?;
            log::info!("Logging started at level {}", level);
        }
        None => log::set_max_level(LevelFilter::Off),
    }
    Ok(())
}
