use std::borrow::Cow;

/// A specialized [`WidgetError`] enum of this crate.
#[foundry_derive::foundry_error]
pub enum WidgetError {
    /// No factory exists for the requested family tag.
    #[error("Widget factory not implemented{}: {message}", format_context(.context))]
    UnimplementedFamily { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A factory produced a product belonging to another family.
    #[error("Widget family mismatch{}: {message}", format_context(.context))]
    FamilyMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The application was asked to run before its UI was created.
    #[error("UI elements have not been created yet{}: {message}", format_context(.context))]
    NotInitialized { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal widget error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
