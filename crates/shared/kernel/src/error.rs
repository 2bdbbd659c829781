use std::borrow::Cow;

#[limebird_derive::site_error]
pub enum RegistryError {
    /// A configuration entity breaks one of its invariants; `context` names the entity.
    #[error("Invalid site configuration{}: {message}", format_context(.context))]
    Invariant { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// [`crate::registry::install`] was called a second time.
    #[error("Site registry already installed{}", format_context(.context))]
    AlreadyInitialized { context: Option<Cow<'static, str>> },

    #[error("Internal registry error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl RegistryError {
    pub(crate) fn invariant(entity: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self::Invariant { message: message.into(), context: Some(Cow::Borrowed(entity)) }
    }
}
