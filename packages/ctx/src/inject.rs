use std::convert::identity;

use dioxus::prelude::*;
use dioxus_core::{ComponentFunction, DynamicNode, Properties, VComponent};

use crate::Ctx;

/// Props that can be assembled from a context-derived part and the props passed explicitly at render time.
///
/// Implement this for the props of a component you want to [`inject`](Ctx::inject). `D` is what the context
/// provides: the context value itself for [`Ctx::inject`], or the output of the mapper for [`Ctx::inject_map`].
/// When a field can come from both sides, the explicit value must win.
///
/// ```rust
/// # use dioxus::prelude::*;
/// # use dioxus_ctx::InjectProps;
/// #[derive(Clone)]
/// struct Greeting {
///     message: String,
/// }
///
/// #[derive(Props, Clone, PartialEq)]
/// struct ChildProps {
///     message: String,
///     name: String,
/// }
///
/// #[derive(Props, Clone, PartialEq)]
/// struct ChildExplicit {
///     name: String,
///     message: Option<String>,
/// }
///
/// impl InjectProps<Greeting> for ChildProps {
///     type Explicit = ChildExplicit;
///
///     fn inject(derived: Greeting, explicit: ChildExplicit) -> Self {
///         Self {
///             message: explicit.message.unwrap_or(derived.message),
///             name: explicit.name,
///         }
///     }
/// }
/// ```
pub trait InjectProps<D>: Properties {
    /// The props the injected component still takes at render time.
    type Explicit: Properties;

    /// Merge the derived props with the explicit ones. Explicit values take precedence.
    fn inject(derived: D, explicit: Self::Explicit) -> Self;
}

impl<V: Clone + 'static, P: Clone + PartialEq + 'static> Ctx<V, P> {
    /// Bind `component` to this context: the returned component reads the context value and merges it into the
    /// component's props with [`InjectProps::inject`].
    ///
    /// The returned component only takes the [`Explicit`](InjectProps::Explicit) props and can be used in `rsx!` like
    /// any other component. It must be rendered below a provider of this context, otherwise it fails to render with
    /// [`MissingProviderError`](crate::MissingProviderError).
    ///
    /// ```rust, no_run
    /// # use dioxus::prelude::*;
    /// # use dioxus_ctx::{Ctx, InjectProps};
    /// # use std::sync::LazyLock;
    /// #[derive(Props, Clone, PartialEq)]
    /// struct MessageProps {
    ///     message: String,
    /// }
    ///
    /// impl InjectProps<String> for MessageProps {
    ///     type Explicit = ();
    ///
    ///     fn inject(message: String, _: ()) -> Self {
    ///         Self { message }
    ///     }
    /// }
    ///
    /// fn Message(props: MessageProps) -> Element {
    ///     rsx! { "{props.message}" }
    /// }
    ///
    /// static MESSAGE: LazyLock<Ctx<String>> = LazyLock::new(|| Ctx::new(|_| "Hello!".to_string()));
    ///
    /// fn App() -> Element {
    ///     let BoundMessage = MESSAGE.inject(Message);
    ///     MESSAGE.provide((), rsx! { BoundMessage {} })
    /// }
    /// ```
    pub fn inject<Q, C, M>(&'static self, component: C) -> impl Fn(Q::Explicit) -> Element + Copy + 'static
    where
        Q: InjectProps<V>,
        C: ComponentFunction<Q, M> + Copy,
        M: 'static,
    {
        self.inject_map(identity::<V>, component)
    }

    /// Like [`Ctx::inject`], but the props are derived from `mapper(value)` instead of the value itself.
    pub fn inject_map<D, Q, F, C, M>(
        &'static self,
        mapper: F,
        component: C,
    ) -> impl Fn(Q::Explicit) -> Element + Copy + 'static
    where
        F: Fn(V) -> D + Copy + 'static,
        Q: InjectProps<D>,
        C: ComponentFunction<Q, M> + Copy,
        M: 'static,
    {
        let name = component_name::<C>();

        move |explicit: Q::Explicit| -> Element {
            let derived = mapper(self.use_ctx()?);
            let props = Q::inject(derived, explicit);

            // Render the target as its own component so it keeps its own scope and prop memoization
            let target = VComponent::new(component, props, name);
            rsx! { {DynamicNode::Component(target)} }
        }
    }
}

fn component_name<C>() -> &'static str {
    let path = std::any::type_name::<C>();
    path.rsplit("::").next().unwrap_or(path)
}
