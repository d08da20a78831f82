use std::borrow::Cow;

/// Errors raised by journal operations.
#[foundry_derive::foundry_error]
pub enum JournalError {
    /// The journal file could not be opened, written or read.
    #[error("Journal I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The process-wide journal was already set up.
    #[error("Journal already initialized{}: {message}", format_context(.context))]
    AlreadyInitialized { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal journal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
