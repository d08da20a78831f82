use foundry_assembly::AssemblyError;
use foundry_widgets::WidgetError;
use std::borrow::Cow;

/// Errors surfaced by [`CreationRegistry`](super::CreationRegistry).
#[foundry_derive::foundry_error]
pub enum RegistryError {
    #[error("Widget error{}: {source}", format_context(.context))]
    Widget { source: WidgetError, context: Option<Cow<'static, str>> },

    #[error("Assembly error{}: {source}", format_context(.context))]
    Assembly { source: AssemblyError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal registry error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
