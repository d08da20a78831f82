//! String constants shared across crates.

/// Placeholder rendered for an unset [`crate::computer::Computer`] field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Default file used by the process-wide journal.
pub const DEFAULT_JOURNAL_FILE: &str = "app.log";

/// Default file name reported by the in-memory module journal.
pub const DEFAULT_MODULE_JOURNAL_FILE: &str = "module_app.log";

/// Prefix of every line written to the file journal.
pub const LOG_PREFIX: &str = "[LOG]";

/// Prefix of every entry kept by the module journal.
pub const MODULE_LOG_PREFIX: &str = "[MODULE LOG]";

/// GPU value forced by office-grade builders.
pub const INTEGRATED_GRAPHICS: &str = "Integrated Graphics";
