//! # Logger
//!
//! Installs the global `tracing` subscriber for cmdline tools.
//!
//! Console output goes to **stderr**, so a tool's own output on stdout stays
//! clean. An optional log directory adds a plain-text file layer written
//! through a non-blocking worker. `RUST_LOG` overrides the configured level;
//! [`LoggerBuilder::env_filter`] sets module directives programmatically.
//!
//! ## Example
//!
//! ```rust
//! # use cmdline_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("flagcheck")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//!
//! tracing::debug!("logging ready");
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    ansi: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { console: true, ansi: true, path: None, level: LevelFilter::WARN, env_filter: None }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// Configures and installs the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Sets the logger name, used as the log file name.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { name: WithName(name.into()), config: self.config }
    }
}

impl LoggerBuilder<WithName> {
    /// Minimum level emitted when `RUST_LOG` is not set.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds module directives (e.g. `cmdline=debug`) on top of the level.
    ///
    /// An invalid filter makes [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Enables the stderr console layer.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Enables ANSI colours on the console layer.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn ansi(mut self, enabled: bool) -> Self {
        self.config.ansi = enabled;
        self
    }

    /// Writes logs to `<path>/<name>.log` as well.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = Some(path.into());
        self
    }

    /// Consumes the builder and installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive for as long as file logs should be
    /// flushed.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, an invalid
    ///   filter, or when no layer is enabled.
    /// * [`LoggerError::Internal`] if the log directory cannot be created.
    /// * [`LoggerError::Appender`] if the log file cannot be opened.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let name = self.name.0;
        if name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }

        let env_filter = build_env_filter(&self.config)?;
        let mut layers = Vec::new();

        if self.config.console {
            let console = layer().compact().with_writer(std::io::stderr).with_ansi(self.config.ansi);
            layers.push(console.boxed());
        }

        let guard = if let Some(path) = self.config.path {
            fs::create_dir_all(&path)
                .context(format!("Failed to create log directory: {}", path.display()))?;

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(&name)
                .filename_suffix(LOG_FILE_SUFFIX)
                .build(&path)?;

            let (writer, guard) = tracing_appender::non_blocking(appender);
            layers.push(layer().with_writer(writer).with_ansi(false).boxed());
            Some(guard)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// Handle to the installed logging system.
///
/// Dropping it flushes and stops the file writer, if one is active.
#[must_use = "Dropping this handle stops file logging."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName }
    }

    /// Whether a file writer is attached.
    #[must_use]
    pub const fn has_file(&self) -> bool {
        self.guard.is_some()
    }
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}
