//! # Journal
//!
//! A deliberately small logging sink that writes human-readable `[LOG] <message>` lines to
//! a text file, plus an in-memory variant.
//!
//! * [`Journal`] opens its file for every entry, appends one line and closes it again.
//!   [`Journal::log`] never fails: I/O problems are reported through `tracing` and the
//!   caller carries on. [`Journal::try_log`] surfaces them instead.
//! * [`Journal::global`] exposes one process-wide instance (global mutable state, set
//!   once via [`Journal::init_global`] or lazily with the default `app.log` path).
//! * [`ModuleJournal`] keeps `[MODULE LOG]` entries in memory; [`module_journal`] is the
//!   process-wide one.
//!
//! This is not a replacement for `foundry-logger`: diagnostic events go through `tracing`,
//! the journal is an application-level record.
//!
//! ```rust
//! use foundry_journal::Journal;
//!
//! let dir = tempfile::tempdir()?;
//! let journal = Journal::new(dir.path().join("app.log"));
//! journal.try_log("started")?;
//!
//! assert_eq!(journal.read_all()?, "[LOG] started\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod file;
mod module;

pub use crate::error::{JournalError, JournalErrorExt};
pub use crate::file::Journal;
pub use crate::module::{ModuleJournal, module_journal};
