use crate::constants::DEFAULT_JOURNAL_FILE;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared by the demo application and its subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FoundryConfigInner {
    pub logging: LoggingConfig,
    pub journal: JournalConfig,
    pub widgets: WidgetsConfig,
    pub assembly: AssemblyConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct FoundryConfig {
    #[serde(flatten, default)]
    inner: Arc<FoundryConfigInner>,
}

impl Deref for FoundryConfig {
    type Target = FoundryConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for FoundryConfig {
    fn deref_mut(&mut self) -> &mut FoundryConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Diagnostic logging (tracing) settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level: `trace`, `debug`, `info`, `warn` or `error`.
    pub level: String,
    /// Directory for rolling log files. Console only when unset.
    pub directory: Option<PathBuf>,
    pub json: bool,
}

/// Append-only `[LOG]` journal settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    pub path: PathBuf,
}

/// Widget family selection. `None` defers to the host probe.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WidgetsConfig {
    pub family: Option<String>,
}

/// Builder and preset used by the assembly demo.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    pub builder: String,
    pub preset: String,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false }
    }
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self { path: PathBuf::from(DEFAULT_JOURNAL_FILE) }
    }
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self { builder: "gaming".to_owned(), preset: "high-end".to_owned() }
    }
}
