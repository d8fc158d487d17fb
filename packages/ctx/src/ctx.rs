use std::{fmt::Debug, sync::Arc};

use dioxus::prelude::*;
use dioxus_core::{ReactiveContext, Runtime};

use crate::{
    channel::{self, ChannelId},
    provider::{CtxProvider, IntoRenderChild},
    MissingProviderError,
};

/// A context created from a single "compute the value from props" function.
///
/// A `Ctx` pairs a provider with an accessor:
/// - [`Ctx::provide`] mounts a provider component. Every time it renders, it computes the value from its props and
///   publishes it to everything below it.
/// - [`Ctx::use_ctx`] reads the value published by the nearest provider of *this* context above the calling component.
/// - [`Ctx::inject`] and [`Ctx::inject_map`] turn a component into one that receives its props from the context.
///
/// Every `Ctx` owns its own channel, even if it carries the same value type as another context or was built from the
/// same function. Contexts are `Send + Sync` and are usually stored in a `static`.
///
/// [`Ctx::inject`] and [`Ctx::inject_map`] borrow the context for `'static`: the component they return is a `Copy`
/// closure that reads the context every time it renders. Store contexts you inject from in a `static LazyLock`.
/// A context kept in a component with `use_hook(|| Ctx::new(..))` can still [`provide`](Ctx::provide) and
/// [`use_ctx`](Ctx::use_ctx), as long as readers get that same context.
///
/// ```rust, no_run
/// # use dioxus::prelude::*;
/// # use dioxus_ctx::Ctx;
/// # use std::sync::LazyLock;
/// #[derive(Clone, PartialEq)]
/// struct GreetingProps {
///     name: String,
/// }
///
/// static GREETING: LazyLock<Ctx<String, GreetingProps>> =
///     LazyLock::new(|| Ctx::new(|props: &GreetingProps| format!("Hello, {}!", props.name)).named("Greeting"));
///
/// fn App() -> Element {
///     GREETING.provide(GreetingProps { name: "Mike".into() }, rsx! { Message {} })
/// }
///
/// fn Message() -> Element {
///     let greeting = GREETING.use_ctx()?;
///     rsx! { p { "{greeting}" } }
/// }
/// ```
pub struct Ctx<V, P = ()> {
    id: ChannelId,
    display_name: Arc<str>,
    compute: Arc<dyn Fn(&P) -> V + Send + Sync>,
}

impl<V: Clone + 'static, P: Clone + PartialEq + 'static> Ctx<V, P> {
    /// Create a new context. `compute` runs on every render of the provider, inside the provider's scope, so it may
    /// call hooks like `use_signal` or `use_memo`.
    pub fn new(compute: impl Fn(&P) -> V + Send + Sync + 'static) -> Self {
        Self {
            id: ChannelId::next(),
            display_name: Arc::from("Ctx"),
            compute: Arc::new(compute),
        }
    }

    /// Name the context for diagnostics. The display name becomes `Ctx(<name>)`.
    ///
    /// The channel is unchanged: clones taken before renaming still read and provide the same context.
    pub fn named(mut self, name: impl AsRef<str>) -> Self {
        self.display_name = Arc::from(format!("Ctx({})", name.as_ref()));
        self
    }

    /// `Ctx` or `Ctx(<name>)`.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Mount a provider of this context with the given props.
    ///
    /// `child` is either nothing (`()`), an [`Element`], or a function that receives the freshly computed value:
    ///
    /// ```rust, no_run
    /// # use dioxus::prelude::*;
    /// # use dioxus_ctx::Ctx;
    /// # use std::sync::LazyLock;
    /// static COUNT: LazyLock<Ctx<usize>> = LazyLock::new(|| Ctx::new(|_| 3));
    ///
    /// fn App() -> Element {
    ///     COUNT.provide((), |count: usize| rsx! { "{count} items" })
    /// }
    /// ```
    pub fn provide(&self, props: P, child: impl IntoRenderChild<V>) -> Element {
        let child = child.into_render_child();
        rsx! {
            CtxProvider::<V, P> { ctx: self.clone(), input: props, child }
        }
    }

    /// Read the value published by the nearest provider of this context.
    ///
    /// Call it while a component renders. The calling component subscribes to the provider and re-renders whenever
    /// the provider publishes a new value. A reader that renders in the same pass as its provider sees the new value
    /// right away. A reader skipped by prop memoization is queued and re-renders with the new value on the next
    /// scheduler flush.
    ///
    /// Returns [`MissingProviderError`] if no provider of this context is mounted above the caller, or if it is called
    /// outside of a render, for example from an event handler, an effect or a spawned task. Read the value during
    /// render and move it into those closures instead.
    #[doc = include_str!("../docs/rules_of_hooks.md")]
    pub fn use_ctx(&self) -> Result<V, MissingProviderError> {
        let in_scope = Runtime::try_current().is_some_and(|rt| rt.try_current_scope_id().is_some());
        if !in_scope || ReactiveContext::current().is_none() {
            tracing::warn!(
                ctx = self.display_name(),
                "context was read outside of a component render"
            );
            return Err(self.missing());
        }

        match channel::lookup::<V>(self.id) {
            Some(signal) => Ok(signal.cloned()),
            None => Err(self.missing()),
        }
    }

    pub(crate) fn compute(&self, props: &P) -> V {
        (self.compute)(props)
    }

    pub(crate) fn channel(&self) -> ChannelId {
        self.id
    }

    fn missing(&self) -> MissingProviderError {
        MissingProviderError::new(self.display_name())
    }
}

impl<V, P> Clone for Ctx<V, P> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            display_name: self.display_name.clone(),
            compute: self.compute.clone(),
        }
    }
}

impl<V, P> PartialEq for Ctx<V, P> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<V, P> Debug for Ctx<V, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ctx")
            .field("channel", &self.id)
            .field("display_name", &self.display_name)
            .finish()
    }
}
