use std::borrow::Cow;

/// A specialized [`AssemblyError`] enum of this crate.
#[foundry_derive::foundry_error]
pub enum AssemblyError {
    /// No builder variant matches the requested tag.
    #[error("Unknown builder{}: {message}", format_context(.context))]
    UnknownBuilder { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// No director preset matches the requested tag.
    #[error("Unknown preset{}: {message}", format_context(.context))]
    UnknownPreset { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal assembly error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
