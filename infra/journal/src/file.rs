use crate::error::{JournalError, JournalErrorExt};
use foundry_domain::constants::{DEFAULT_JOURNAL_FILE, LOG_PREFIX};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, error};

/// Process-wide journal. Set at most once, lives until the process exits.
static GLOBAL: OnceLock<Journal> = OnceLock::new();

/// An append-only text journal.
///
/// Every entry is one line, `[LOG] <message>`. The file is opened for each write and closed
/// again before the call returns; there is no buffering and no protection against other
/// writers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one entry, creating the file if needed.
    ///
    /// Line breaks inside `message` are replaced with spaces so an entry never spans lines.
    ///
    /// # Errors
    /// Returns [`JournalError::Io`] if the file cannot be opened or written.
    pub fn try_log(&self, message: &str) -> Result<(), JournalError> {
        let line = format!("{LOG_PREFIX} {}\n", single_line(message));

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .context(format!("Failed to open journal: {}", self.path.display()))?;
        file.write_all(line.as_bytes())
            .context(format!("Failed to write journal: {}", self.path.display()))?;

        Ok(())
    }

    /// Appends one entry; failures are reported through `tracing` and swallowed.
    ///
    /// Returns `true` when the entry reached the file.
    pub fn log(&self, message: &str) -> bool {
        match self.try_log(message) {
            Ok(()) => {
                debug!(path = %self.path.display(), entry = message, "Journal entry written");
                true
            },
            Err(err) => {
                error!(error = %err, "Journal write failed; continuing");
                false
            },
        }
    }

    /// Reads the whole journal.
    ///
    /// # Errors
    /// Returns [`JournalError::Io`] if the file does not exist or cannot be read.
    pub fn read_all(&self) -> Result<String, JournalError> {
        fs::read_to_string(&self.path)
            .context(format!("Failed to read journal: {}", self.path.display()))
    }

    /// Installs the process-wide journal.
    ///
    /// # Errors
    /// Returns [`JournalError::AlreadyInitialized`] if [`Journal::init_global`] or
    /// [`Journal::global`] already ran in this process.
    pub fn init_global(path: impl Into<PathBuf>) -> Result<&'static Self, JournalError> {
        GLOBAL.set(Self::new(path)).map_err(|rejected| JournalError::AlreadyInitialized {
            message: format!(
                "global journal already writes to {}, ignoring {}",
                Self::global().path.display(),
                rejected.path.display()
            )
            .into(),
            context: None,
        })?;

        let journal = Self::global();
        debug!(path = %journal.path.display(), "Global journal initialized");
        Ok(journal)
    }

    /// The process-wide journal, created with the default path on first use.
    ///
    /// Every call returns the same instance.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| {
            debug!(path = DEFAULT_JOURNAL_FILE, "Creating global journal with default path");
            Self::new(DEFAULT_JOURNAL_FILE)
        })
    }

    #[must_use]
    pub fn is_global_initialized() -> bool {
        GLOBAL.get().is_some()
    }
}

fn single_line(message: &str) -> String {
    message.replace(['\r', '\n'], " ")
}
