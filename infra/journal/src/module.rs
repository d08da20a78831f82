use foundry_domain::constants::{DEFAULT_MODULE_JOURNAL_FILE, MODULE_LOG_PREFIX};
use parking_lot::Mutex;
use std::sync::LazyLock;
use tracing::info;

static MODULE: LazyLock<Mutex<ModuleJournal>> =
    LazyLock::new(|| Mutex::new(ModuleJournal::default()));

/// An in-memory journal that only keeps entries for the lifetime of the process.
///
/// The file name is informational; entries are never written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleJournal {
    file_name: String,
    entries: Vec<String>,
}

impl Default for ModuleJournal {
    fn default() -> Self {
        Self { file_name: DEFAULT_MODULE_JOURNAL_FILE.to_owned(), entries: Vec::new() }
    }
}

impl ModuleJournal {
    pub fn configure(&mut self, file_name: impl Into<String>) {
        self.file_name = file_name.into();
        info!(file = %self.file_name, "Module journal configured");
    }

    pub fn log(&mut self, message: &str) {
        self.entries.push(format!("{MODULE_LOG_PREFIX} {message}"));
        info!(entry = message, "Module journal entry recorded");
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// The process-wide module journal.
pub fn module_journal() -> &'static Mutex<ModuleJournal> {
    &MODULE
}
