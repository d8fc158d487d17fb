use std::rc::Rc;

use dioxus::prelude::*;

use crate::{channel, Ctx};

/// What a provider renders below itself.
pub enum RenderChild<V> {
    /// A subtree rendered as-is.
    Node(Element),

    /// A function of the value the provider computed in this render.
    Render(Rc<dyn Fn(V) -> Element>),
}

impl<V> RenderChild<V> {
    /// Render the result of `f` with the value the provider computed.
    pub fn render(f: impl Fn(V) -> Element + 'static) -> Self {
        Self::Render(Rc::new(f))
    }
}

impl<V> Clone for RenderChild<V> {
    fn clone(&self) -> Self {
        match self {
            Self::Node(node) => Self::Node(node.clone()),
            Self::Render(render) => Self::Render(render.clone()),
        }
    }
}

impl<V> PartialEq for RenderChild<V> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Node(a), Self::Node(b)) => a == b,
            (Self::Render(a), Self::Render(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Anything that can sit in a provider's child slot.
///
/// Implemented for `()` (no children), [`Element`], [`RenderChild`] and any `Fn(V) -> Element` closure.
pub trait IntoRenderChild<V> {
    /// Convert into the child slot. `None` renders nothing.
    fn into_render_child(self) -> Option<RenderChild<V>>;
}

impl<V> IntoRenderChild<V> for () {
    fn into_render_child(self) -> Option<RenderChild<V>> {
        None
    }
}

impl<V> IntoRenderChild<V> for Element {
    fn into_render_child(self) -> Option<RenderChild<V>> {
        Some(RenderChild::Node(self))
    }
}

impl<V> IntoRenderChild<V> for RenderChild<V> {
    fn into_render_child(self) -> Option<RenderChild<V>> {
        Some(self)
    }
}

impl<V> IntoRenderChild<V> for Option<RenderChild<V>> {
    fn into_render_child(self) -> Option<RenderChild<V>> {
        self
    }
}

impl<V, F> IntoRenderChild<V> for F
where
    F: Fn(V) -> Element + 'static,
{
    fn into_render_child(self) -> Option<RenderChild<V>> {
        Some(RenderChild::render(self))
    }
}

/// The props of [`CtxProvider`]. Usually built for you by [`Ctx::provide`].
#[derive(Props)]
pub struct CtxProviderProps<V: Clone + 'static, P: Clone + PartialEq + 'static> {
    /// The context this provider publishes.
    pub ctx: Ctx<V, P>,

    /// Passed to the context's compute function on every render.
    pub input: P,

    /// Rendered below the provider.
    #[props(!optional)]
    pub child: Option<RenderChild<V>>,
}

impl<V: Clone + 'static, P: Clone + PartialEq + 'static> Clone for CtxProviderProps<V, P> {
    fn clone(&self) -> Self {
        Self {
            ctx: self.ctx.clone(),
            input: self.input.clone(),
            child: self.child.clone(),
        }
    }
}

impl<V: Clone + 'static, P: Clone + PartialEq + 'static> PartialEq for CtxProviderProps<V, P> {
    fn eq(&self, other: &Self) -> bool {
        self.ctx == other.ctx && self.input == other.input && self.child == other.child
    }
}

/// Publishes the value of a [`Ctx`] to everything rendered below it.
///
/// The value is computed from `input` on every render and replaces the previously published one. Components reading
/// it with [`Ctx::use_ctx`] re-render after each publish: in the same pass if their own props changed, otherwise on
/// the next scheduler flush, where the write has queued them.
#[allow(non_snake_case)]
pub fn CtxProvider<V: Clone + 'static, P: Clone + PartialEq + 'static>(
    props: CtxProviderProps<V, P>,
) -> Element {
    let CtxProviderProps { ctx, input, child } = props;
    let value = ctx.compute(&input);

    let mut opened = false;
    let published = use_hook(|| {
        opened = true;
        channel::open(ctx.channel(), ctx.display_name(), value.clone())
    });
    if !opened {
        channel::publish(published, ctx.channel(), ctx.display_name(), value.clone());
    }

    match child {
        None => rsx! {},
        Some(RenderChild::Node(node)) => rsx! { {node} },
        Some(RenderChild::Render(render)) => rsx! { {render(value)} },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_children_compare_by_identity() {
        let render: RenderChild<u8> = RenderChild::render(|_| rsx! {});
        let other: RenderChild<u8> = RenderChild::render(|_| rsx! {});

        assert!(render == render.clone());
        assert!(render != other);
    }

    #[test]
    fn unit_means_no_child() {
        assert!(IntoRenderChild::<u8>::into_render_child(()).is_none());
        assert!(IntoRenderChild::<u8>::into_render_child(|n: u8| rsx! { "{n}" }).is_some());
    }
}
