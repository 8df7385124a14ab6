//! Tracing subscriber setup for the `asod` binary.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::AsodConfig;

const DEFAULT_FILTER: &str = "warn";

/// Build the filter: `RUST_LOG`, then the config file, then `warn`.
fn env_filter(config: Option<&AsodConfig>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| match config.and_then(AsodConfig::log_filter) {
            Some(filter) => EnvFilter::try_new(filter),
            None => EnvFilter::try_new(DEFAULT_FILTER),
        })
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber, then log `init_warnings`.
///
/// Reports own stdout, so logs go to the configured file or to stderr.
/// Warnings gathered before this point (config load failures) had no
/// subscriber to reach and are emitted here.
pub fn init_tracing(config: Option<&AsodConfig>, mut init_warnings: Vec<String>) {
    let filter = env_filter(config);

    match config.and_then(AsodConfig::log_file) {
        Some(path) => match open_log_file(path) {
            Ok(file) => {
                tracing_subscriber::registry()
                    .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                    .with(filter)
                    .init();
                tracing::debug!(path = %path.display(), "Logging initialized");
            }
            Err(e) => {
                init_warnings.push(format!("Failed to open log file {}: {e}", path.display()));
                init_stderr(filter);
            }
        },
        None => init_stderr(filter),
    }

    report_init_warnings(&init_warnings);
}

/// Log warnings collected before a subscriber was installed.
pub fn report_init_warnings(warnings: &[String]) {
    for warning in warnings {
        tracing::warn!("{warning}");
    }
}

fn init_stderr(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
