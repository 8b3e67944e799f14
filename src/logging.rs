use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{self, Config};

/// Sends `tracing` events to the log file; the terminal belongs to the UI.
pub fn init(config: &Config) -> Result<()> {
    let writer = open_log(&log_path(config)?)?;
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(filter(config)?);

    tracing_subscriber::registry().with(layer).with(ErrorLayer::default()).try_init()?;
    Ok(())
}

/// `log-file` from config, or `<data dir>/people-tui.log`.
fn log_path(config: &Config) -> Result<PathBuf> {
    match &config.log_file {
        Some(path) => Ok(path.clone()),
        None => Ok(config::get_project_dir()?
            .data_dir()
            .join(concat!(env!("CARGO_PKG_NAME"), ".log"))),
    }
}

fn open_log(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Fail to create directory `{}`", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Fail to open log file `{}`", path.display()))
}

/// `log-level` is an `EnvFilter` directive such as `info` or `people_tui=debug`.
fn filter(config: &Config) -> Result<EnvFilter> {
    let directive = config.log_level.as_deref().unwrap_or("info");
    EnvFilter::try_new(directive).with_context(|| format!("Invalid log level `{directive}`"))
}
