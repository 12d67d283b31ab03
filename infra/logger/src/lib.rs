//! # Logger
//!
//! Installs the process-wide `tracing` subscriber: a compact console layer, an optional
//! rolling file layer written through a non-blocking worker, and an [`EnvFilter`] built from
//! a default level, an optional programmatic directive, and `RUST_LOG`.
//!
//! ## Example
//!
//! ```rust
//! # use nucard_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("nucard-server")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug)]
struct FileOutput {
    dir: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    file: Option<FileOutput>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { console: true, level: LevelFilter::INFO, env_filter: None, file: None }
    }
}

/// Builder state before a name has been given.
#[derive(Debug)]
pub struct Unnamed;

/// Builder state once a name has been given; only this state can call [`LoggerBuilder::init`].
#[derive(Debug)]
pub struct Named(String);

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N = Unnamed> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<Unnamed> {
    /// Names the logger; used as the prefix for rolling log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        LoggerBuilder { config: self.config, name: Named(name.into()) }
    }
}

impl<N> LoggerBuilder<N> {
    /// Minimum level emitted when neither `RUST_LOG` nor [`env_filter`](Self::env_filter) say otherwise.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit filter directive (e.g., `nucard_catalog=debug,hyper=info`).
    ///
    /// An invalid directive makes [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Enables or disables the console layer.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Writes logs to rolling files inside `dir` (daily rotation, 10 files kept by default).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.file = Some(FileOutput {
            dir: dir.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        });
        self
    }

    /// Sets the rotation strategy of the file output. No effect without [`path`](Self::path).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = &mut self.config.file {
            file.rotation = rotation;
        }
        self
    }

    /// Sets how many rotated files are kept. No effect without [`path`](Self::path).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        if let Some(file) = &mut self.config.file {
            file.max_files = max;
        }
        self
    }

    /// Writes the file output as JSON lines. No effect without [`path`](Self::path).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self) -> Self {
        if let Some(file) = &mut self.config.file {
            file.json = true;
        }
        self
    }
}

impl LoggerBuilder<Named> {
    /// Installs the global tracing subscriber.
    ///
    /// The returned [`Logger`] owns the file writer's [`WorkerGuard`]; keep it alive until
    /// shutdown so buffered lines are flushed.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`, a bad
    ///   filter directive, or when no output is enabled.
    /// * [`LoggerError::Internal`] if the log directory cannot be created.
    /// * [`LoggerError::Appender`] if the rolling file appender fails to start.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { config, name: Named(name) } = self;
        validate(&config, &name)?;

        let filter = env_filter(&config)?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if config.console {
            layers.push(fmt::layer().compact().with_ansi(true).boxed());
        }

        let guard = match config.file {
            Some(file) => {
                let (layer, guard) = file_layer(&name, file)?;
                layers.push(layer);
                Some(guard)
            }
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging output enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry()
            .with(layers)
            .with(filter)
            .try_init()
            .context("Installing global subscriber")?;

        Ok(Logger { guard })
    }
}

/// A handle to the initialized logging system.
///
/// Dropping it stops the background file writer, so keep it alive for the whole process.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: Unnamed }
    }

    /// Returns the file writer's guard, if file output is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

fn validate(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if config.file.as_ref().is_some_and(|file| file.max_files == 0) {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());

    match &config.env_filter {
        None => Ok(builder.from_env_lossy()),
        Some(directive) => {
            builder.parse(directive).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{directive}': {e}").into(),
                context: None,
            })
        }
    }
}

fn file_layer(name: &str, file: FileOutput) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    fs::create_dir_all(&file.dir).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("Failed to create path: {}", file.dir.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(file.rotation)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(file.max_files)
        .build(&file.dir)
        .context("Creating rolling file appender")?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    let layer = if file.json { layer.json().boxed() } else { layer.boxed() };

    Ok((layer, guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_starts_with_console_at_info() {
        let builder = Logger::builder().name("test-app").env_filter("nucard=debug");

        assert!(builder.config.console);
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert_eq!(builder.config.env_filter.as_deref(), Some("nucard=debug"));
        assert!(builder.config.file.is_none());
    }

    #[test]
    fn file_settings_require_a_path() {
        let builder = Logger::builder().name("test-app").max_files(3).json();
        assert!(builder.config.file.is_none());

        let builder = Logger::builder().name("test-app").path("logs").max_files(3).json();
        let file = builder.config.file.as_ref().unwrap();
        assert_eq!(file.max_files, 3);
        assert!(file.json);
        assert_eq!(file.dir, PathBuf::from("logs"));
    }

    #[test]
    fn invalid_settings_fail_before_installing() {
        let err = Logger::builder().name("  ").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder().name("app").path("logs").max_files(0).init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder().name("app").console(false).init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder().name("app").env_filter("nucard=loudest").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
