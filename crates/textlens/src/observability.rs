//! Logging setup.
//!
//! Human-readable events go to stderr (stdout is reserved for command
//! output and the MCP transport). When a log location can be resolved,
//! events are also written as JSON lines through a non-blocking appender.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

const LOG_PATH_ENV: &str = "TEXTLENS_LOG_PATH";
const LOG_DIR_ENV: &str = "TEXTLENS_LOG_DIR";
const LOG_FILE_NAME: &str = "textlens.jsonl";

/// Where JSONL logs are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// An explicit file.
    File(PathBuf),
    /// A directory; the file is `textlens.jsonl` inside it.
    Dir(PathBuf),
}

/// Resolved logging destinations.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// JSONL log destination, if any.
    pub log_target: Option<LogTarget>,
}

impl ObservabilityConfig {
    /// Resolve the log destination.
    ///
    /// Precedence: `TEXTLENS_LOG_PATH`, `TEXTLENS_LOG_DIR`, the configured
    /// `log_dir`, then `<local data dir>/logs`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            non_empty_env(LOG_PATH_ENV),
            non_empty_env(LOG_DIR_ENV),
            config_log_dir,
            default_log_dir(),
        )
    }

    fn resolve(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
        default_dir: Option<PathBuf>,
    ) -> Self {
        let log_target = env_path.map(LogTarget::File).or_else(|| {
            env_dir
                .or(config_dir)
                .or(default_dir)
                .map(LogTarget::Dir)
        });
        Self { log_target }
    }
}

fn non_empty_env(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn default_log_dir() -> Option<PathBuf> {
    textlens_core::config::user_data_local_dir().map(|dir| dir.join("logs").into_std_path_buf())
}

/// Pick the level used when `RUST_LOG` is unset.
fn level_for(quiet: bool, verbose: u8, default_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => default_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Build the event filter. `RUST_LOG` wins over flags and configuration.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(quiet, verbose, default_level)))
}

/// Install the global subscriber.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes buffered file output.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let (writer, guard) = match config.log_target.as_ref().and_then(open_log_writer) {
        Some((writer, guard)) => (Some(writer), Some(guard)),
        None => (None, None),
    };

    let file_layer = writer.map(|writer| {
        fmt::layer()
            .json()
            .with_ansi(false)
            .with_writer(writer)
    });
    let stderr_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

/// Open the JSONL appender. Failures disable file logging with a warning.
fn open_log_writer(target: &LogTarget) -> Option<(NonBlocking, WorkerGuard)> {
    let (dir, file_name) = match target {
        LogTarget::File(path) => (
            path.parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), PathBuf::from),
            path.file_name()?.to_string_lossy().into_owned(),
        ),
        LogTarget::Dir(dir) => (dir.clone(), LOG_FILE_NAME.to_string()),
    };

    let appender = std::fs::create_dir_all(&dir)
        .map_err(|e| e.to_string())
        .and_then(|()| {
            RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name)
                .build(&dir)
                .map_err(|e| e.to_string())
        });

    match appender {
        Ok(appender) => Some(tracing_appender::non_blocking(appender)),
        Err(err) => {
            eprintln!(
                "warning: file logging disabled ({}): {err}",
                dir.display()
            );
            None
        }
    }
}
