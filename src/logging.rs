//! Tracing setup
//!
//! Logs go to stderr, or to a file when the interactive screen owns the
//! terminal. The filter is read from `USERLINE_LOG_LEVEL` and defaults to
//! `error`.

use crate::config::LOG_LEVEL_ENV_VAR;
use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "error";

/// Dependencies whose own logs are held at `warn`
const QUIET_CRATES: &[&str] = &[
    "reqwest",
    "hyper",
    "hyper_util",
    "h2",
    "tokio",
    "tokio_util",
    "tokio_rustls",
    "rustls",
    "tracing",
    "tracing_subscriber",
    "crossterm",
];

/// Filter from the environment with dependency noise pinned to `warn`
pub fn build_env_filter() -> Result<EnvFilter> {
    let mut filter = EnvFilter::try_from_env(LOG_LEVEL_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    for krate in QUIET_CRATES {
        filter = filter.add_directive(format!("{krate}=warn").parse()?);
    }
    Ok(filter)
}

/// Expand `~` and environment variables in a log file path
pub fn expand_log_path(path: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(path)
        .with_context(|| format!("could not expand log file path '{path}'"))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Open `path` for appending, creating it if needed
pub fn open_log_file(path: &str) -> Result<File> {
    let path = expand_log_path(path)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("could not open log file {}", path.display()))
}

/// Install the global subscriber
pub fn init_tracing_subscriber(log_file: Option<&str>) -> Result<()> {
    let filter = build_env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::rfc_3339());

    let result = match log_file {
        Some(path) => {
            let file = open_log_file(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("could not install tracing subscriber: {e}"))
}
