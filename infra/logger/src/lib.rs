//! # Logger
//!
//! Installs the process-wide `tracing` subscriber used by every foundry crate.
//! Console output is compact and colored; file output goes through a non-blocking rolling
//! appender and can be switched to JSON.
//!
//! The builder is type-stated: a name is mandatory before [`LoggerBuilder::init`] becomes
//! available, and file-only knobs ([`LoggerBuilder::rotation`], [`LoggerBuilder::max_files`],
//! [`LoggerBuilder::json`]) only exist after [`LoggerBuilder::path`].
//!
//! `RUST_LOG` is honoured when no explicit [`LoggerBuilder::env_filter`] is given.
//!
//! ## Example
//!
//! ```rust
//! use foundry_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder()
//!     .name("foundry")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug)]
struct Settings {
    console: bool,
    directory: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            console: true,
            directory: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct Unnamed;
#[derive(Debug)]
pub struct Named(String);
#[derive(Debug)]
pub struct ConsoleOnly;
#[derive(Debug)]
pub struct WithFiles;

mod private {
    pub trait Sealed {}
}
impl Sealed for Unnamed {}
impl Sealed for Named {}
impl Sealed for ConsoleOnly {}
impl Sealed for WithFiles {}

/// Configures and installs the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = Unnamed, F: Sealed = ConsoleOnly> {
    settings: Settings,
    name: N,
    _files: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<Unnamed, F> {
    /// Names the application; also used as the log file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, F> {
        LoggerBuilder { settings: self.settings, name: Named(name.into()), _files: PhantomData }
    }
}

impl<F: Sealed> LoggerBuilder<Named, F> {
    /// Minimum level emitted when neither `RUST_LOG` nor an explicit filter says otherwise.
    #[must_use = "configure the builder and call `init` to install the logger"]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Programmatic filter directives (e.g., `foundry_widgets=debug,info`).
    ///
    /// Invalid directives make [`LoggerBuilder::init`] fail.
    #[must_use = "configure the builder and call `init` to install the logger"]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.settings.env_filter = Some(filter.into());
        self
    }

    #[must_use = "configure the builder and call `init` to install the logger"]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Writes rolling log files into `directory` (created on init).
    pub fn path(self, directory: impl Into<PathBuf>) -> LoggerBuilder<Named, WithFiles> {
        let mut settings = self.settings;
        settings.directory = Some(directory.into());
        LoggerBuilder { settings, name: self.name, _files: PhantomData }
    }

    /// Consumes the builder and installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive: dropping it stops the file writer thread.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, `max_files == 0`,
    ///   an unparsable filter, or when no output is enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] if the file sink cannot be created.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let name = self.name.0;
        validate(&self.settings, &name)?;

        let filter = env_filter(&self.settings)?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if self.settings.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = match &self.settings.directory {
            Some(directory) => {
                let (file_layer, guard) = file_layer(&self.settings, &name, directory)?;
                layers.push(file_layer);
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No output enabled. Enable the console or set a log directory.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;

        Ok(Logger { name, guard })
    }
}

impl LoggerBuilder<Named, WithFiles> {
    /// Number of rotated files kept on disk.
    #[must_use = "configure the builder and call `init` to install the logger"]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    #[must_use = "configure the builder and call `init` to install the logger"]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }

    /// Writes file entries as JSON objects.
    #[must_use = "configure the builder and call `init` to install the logger"]
    pub const fn json(mut self) -> Self {
        self.settings.json = true;
        self
    }
}

/// Handle to the installed logging system.
///
/// Holds the background writer guard for file output. Drop it only on shutdown.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    name: String,
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a new [`LoggerBuilder`].
    ///
    /// ```rust
    /// use foundry_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("foundry-docs")
    ///     .level(LevelFilter::WARN)
    ///     .init()
    ///     .unwrap();
    /// ```
    #[must_use = "configure the builder and call `init` to install the logger"]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: Settings::default(), name: Unnamed, _files: PhantomData }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The file writer guard, if file output is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!(logger = %self.name, "Logging system shutting down, flushing buffers...");
        }
    }
}

fn validate(settings: &Settings, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if settings.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn env_filter(settings: &Settings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    match &settings.env_filter {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{directives}': {e}").into(),
                context: None,
            }
        }),
    }
}

fn file_layer(
    settings: &Settings,
    name: &str,
    directory: &Path,
) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    fs::create_dir_all(directory)
        .context(format!("Failed to create log directory: {}", directory.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(settings.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(settings.max_files)
        .build(directory)?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let plain = layer().with_writer(writer).with_ansi(false);
    let boxed = if settings.json { plain.json().boxed() } else { plain.boxed() };

    Ok((boxed, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn builder_defaults() {
        let builder = Logger::builder().name("foundry-test").env_filter("foundry=debug");
        assert!(builder.settings.console);
        assert_eq!(builder.settings.level, LevelFilter::INFO);
        assert_eq!(builder.settings.env_filter.as_deref(), Some("foundry=debug"));
        assert!(builder.settings.directory.is_none());
        assert_eq!(builder.settings.max_files, DEFAULT_MAX_FILES);
    }

    #[test]
    #[serial]
    fn builder_file_configuration() -> Result<(), LoggerError> {
        let tmp = tempdir().context("Failed to create temp dir")?;
        let log_dir = tmp.path().join("logs");
        let builder = Logger::builder()
            .name("foundry-test")
            .console(false)
            .path(log_dir.clone())
            .max_files(5)
            .json()
            .level(LevelFilter::DEBUG);

        assert!(!builder.settings.console);
        assert!(builder.settings.json);
        assert_eq!(builder.settings.level, LevelFilter::DEBUG);
        assert_eq!(builder.settings.max_files, 5);
        assert_eq!(builder.settings.directory.as_deref(), Some(log_dir.as_path()));
        Ok(())
    }

    #[test]
    #[serial]
    fn invalid_settings_are_rejected_before_install() {
        let empty_name = Logger::builder().name("  ").init();
        assert!(matches!(empty_name, Err(LoggerError::InvalidConfiguration { .. })));

        let no_output = Logger::builder().name("silent").console(false).init();
        assert!(matches!(no_output, Err(LoggerError::InvalidConfiguration { .. })));

        let bad_filter = Logger::builder().name("bad").env_filter("foundry=loud").init();
        assert!(matches!(bad_filter, Err(LoggerError::InvalidConfiguration { .. })));

        let tmp = tempdir().expect("temp dir");
        let zero_files = Logger::builder().name("zero").path(tmp.path()).max_files(0).init();
        assert!(matches!(zero_files, Err(LoggerError::InvalidConfiguration { .. })));
    }
}
