/// Returned by [`Ctx::use_ctx`](crate::Ctx::use_ctx) when no provider of that context is mounted above the
/// reading component.
///
/// The error converts into a [`RenderError`](dioxus_core::RenderError), so returning it from a component with `?`
/// bubbles it up to the nearest error boundary:
///
/// ```rust, no_run
/// # use dioxus::prelude::*;
/// # use dioxus_ctx::Ctx;
/// # use std::sync::LazyLock;
/// static THEME: LazyLock<Ctx<&'static str>> = LazyLock::new(|| Ctx::new(|_| "dark").named("Theme"));
///
/// fn Label() -> Element {
///     let theme = THEME.use_ctx()?;
///     rsx! { "{theme}" }
/// }
/// ```
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Context provider is missing. Please mount {display_name} component above in the component tree.")]
pub struct MissingProviderError {
    display_name: String,
}

impl MissingProviderError {
    /// Create the error for the context with the given display name, e.g. `Ctx` or `Ctx(Theme)`.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }

    /// The display name of the context that has no provider.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}
