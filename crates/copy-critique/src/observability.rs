//! Logging setup: human-readable stderr output plus optional JSONL file logs.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const LOG_PATH_ENV: &str = "COPY_CRITIQUE_LOG_PATH";
const LOG_DIR_ENV: &str = "COPY_CRITIQUE_LOG_DIR";
const DEFAULT_LOG_FILE: &str = "copy-critique.jsonl";

/// Where file logs go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// JSONL log file. `None` disables file logging.
    pub log_file: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log file from the environment, falling back to the
    /// configured log directory.
    ///
    /// Precedence: `COPY_CRITIQUE_LOG_PATH` > `COPY_CRITIQUE_LOG_DIR` > `config_log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let path = non_empty_env(LOG_PATH_ENV);
        let dir = non_empty_env(LOG_DIR_ENV).or(config_log_dir);
        Self {
            log_file: resolve_log_file(path, dir),
        }
    }
}

fn non_empty_env(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn resolve_log_file(path: Option<PathBuf>, dir: Option<PathBuf>) -> Option<PathBuf> {
    path.or_else(|| dir.map(|d| d.join(DEFAULT_LOG_FILE)))
}

/// Build the log filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` keeps errors only, `-v` and
/// `-vv` raise the level to debug and trace, and the configured level
/// applies when neither flag is given.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(default_directive(quiet, verbose, config_level))
}

fn default_directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => config_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Keeps the non-blocking file writer flushing until dropped.
#[must_use = "dropping the guard stops file logging"]
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, file_guard) = match config.log_file {
        Some(ref path) => {
            let (writer, guard) = file_writer(path)?;
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(ObservabilityGuard { _file: file_guard })
}

fn file_writer(
    path: &Path,
) -> anyhow::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_beats_directory() {
        let file = resolve_log_file(
            Some(PathBuf::from("/tmp/a.jsonl")),
            Some(PathBuf::from("/var/log")),
        );
        assert_eq!(file, Some(PathBuf::from("/tmp/a.jsonl")));
    }

    #[test]
    fn directory_gets_default_file_name() {
        let file = resolve_log_file(None, Some(PathBuf::from("/var/log")));
        assert_eq!(file, Some(PathBuf::from("/var/log/copy-critique.jsonl")));
    }

    #[test]
    fn no_location_disables_file_logging() {
        assert!(resolve_log_file(None, None).is_none());
    }

    #[test]
    fn verbosity_flags() {
        assert_eq!(default_directive(true, 2, "info"), "error");
        assert_eq!(default_directive(false, 0, "warn"), "warn");
        assert_eq!(default_directive(false, 1, "info"), "debug");
        assert_eq!(default_directive(false, 3, "info"), "trace");
    }
}
