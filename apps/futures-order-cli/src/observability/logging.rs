//! Log sinks for the order CLI.
//!
//! Every event is rendered as one line:
//!
//! ```text
//! 2026-01-05 14:03:11,207 | INFO | futures_order_cli::cli | CLI order result
//! ```
//!
//! and written to standard error and to an append-only log file.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Directory holding the log file; created if missing.
    pub log_dir: PathBuf,
    /// Log file name inside `log_dir`.
    pub log_file: String,
    /// Filter directive used when `RUST_LOG` is unset, e.g. `info`.
    pub level: String,
    /// Also write to standard error.
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_file: "trading_bot.log".to_string(),
            level: "info".to_string(),
            console: true,
        }
    }
}

impl LoggingConfig {
    /// Set the log directory.
    #[must_use]
    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = log_dir.into();
        self
    }

    /// Set the log file name.
    #[must_use]
    pub fn with_log_file(mut self, log_file: impl Into<String>) -> Self {
        self.log_file = log_file.into();
        self
    }

    /// Set the default level directive.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Disable the standard error sink.
    #[must_use]
    pub const fn without_console(mut self) -> Self {
        self.console = false;
        self
    }

    /// Full path of the log file.
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(&self.log_file)
    }
}

/// Error type for logging setup.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// Could not create the directory or open the file.
    #[error("failed to open log file {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// The level directive did not parse.
    #[error("invalid log level {level:?}: {message}")]
    InvalidLevel {
        /// Rejected directive.
        level: String,
        /// Parser message.
        message: String,
    },
}

/// `timestamp | LEVEL | target | message fields` event formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipeFormat;

impl<S, N> FormatEvent<S, N> for PipeFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "{} | {} | {} | ",
            Local::now().format(TIMESTAMP_FORMAT),
            meta.level(),
            meta.target()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the process-wide subscriber.
///
/// Returns `Ok(true)` when this call installed it and `Ok(false)` when a
/// subscriber was already in place, in which case nothing is touched.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or the level is invalid.
pub fn init_logging(config: &LoggingConfig) -> Result<bool, LoggingError> {
    if INITIALIZED.load(Ordering::Acquire) {
        return Ok(false);
    }

    let subscriber = build_subscriber(config)?;
    if subscriber.try_init().is_err() {
        return Ok(false);
    }

    INITIALIZED.store(true, Ordering::Release);
    Ok(true)
}

/// Build the subscriber without installing it.
///
/// `RUST_LOG` takes precedence over `config.level`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or the level is invalid.
pub fn build_subscriber(
    config: &LoggingConfig,
) -> Result<impl Subscriber + Send + Sync + 'static, LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| LoggingError::InvalidLevel {
            level: config.level.clone(),
            message: e.to_string(),
        })?,
    };

    let file = open_log_file(&config.log_dir, &config.log_path())?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .event_format(PipeFormat)
        .with_writer(Mutex::new(file));

    let console_layer = config.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .event_format(PipeFormat)
            .with_writer(io::stderr)
    });

    Ok(tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer))
}

fn open_log_file(dir: &Path, path: &Path) -> Result<fs::File, LoggingError> {
    let io_err = |source| LoggingError::Io {
        path: path.to_path_buf(),
        source,
    };
    fs::create_dir_all(dir).map_err(io_err)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)
}
