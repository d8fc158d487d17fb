#![allow(non_snake_case)]

use std::{cell::Cell, sync::LazyLock};

use dioxus::prelude::*;
use dioxus_core::{current_scope_id, NoOpMutations};
use dioxus_ctx::{Ctx, MissingProviderError};
use pretty_assertions::assert_eq;

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn hello(_: &()) -> &'static str {
    "Hello!"
}

#[test]
fn missing_provider_without_a_name() {
    static CTX: LazyLock<Ctx<&'static str>> = LazyLock::new(|| Ctx::new(hello));

    fn app() -> Element {
        match CTX.use_ctx() {
            Ok(value) => rsx! { div { "{value}" } },
            Err(err) => rsx! { "{err}" },
        }
    }

    assert_eq!(
        render(app),
        "Context provider is missing. Please mount Ctx component above in the component tree."
    );
}

#[test]
fn missing_provider_with_a_name() {
    static CTX: LazyLock<Ctx<&'static str>> = LazyLock::new(|| Ctx::new(hello).named("ContextName"));

    fn app() -> Element {
        match CTX.use_ctx() {
            Ok(value) => rsx! { div { "{value}" } },
            Err(err) => rsx! { "{err}" },
        }
    }

    assert_eq!(
        render(app),
        "Context provider is missing. Please mount Ctx(ContextName) component above in the component tree."
    );
}

#[test]
fn sibling_providers_do_not_count() {
    static CTX: LazyLock<Ctx<&'static str>> = LazyLock::new(|| Ctx::new(hello));

    fn app() -> Element {
        rsx! {
            {CTX.provide((), ())}
            Child {}
        }
    }

    fn Child() -> Element {
        match CTX.use_ctx() {
            Ok(value) => rsx! { "{value}" },
            Err(err) => {
                let name = err.display_name();
                rsx! { "{name}" }
            }
        }
    }

    assert_eq!(render(app), "Ctx");
}

#[test]
fn error_is_returned_from_the_component() {
    thread_local! {
        static RENDERED: Cell<bool> = const { Cell::new(false) };
    }

    static CTX: LazyLock<Ctx<&'static str>> = LazyLock::new(|| Ctx::new(hello));

    fn app() -> Element {
        rsx! { Child {} }
    }

    fn Child() -> Element {
        let value = CTX.use_ctx()?;
        RENDERED.with(|r| r.set(true));
        rsx! { "{value}" }
    }

    let html = render(app);
    assert!(!html.contains("Hello!"));
    assert!(!RENDERED.with(|r| r.get()));
}

#[test]
fn missing_provider_becomes_a_render_error() {
    let err: dioxus_core::RenderError = MissingProviderError::new("Ctx(Theme)").into();

    assert!(err
        .to_string()
        .contains("Context provider is missing. Please mount Ctx(Theme) component above in the component tree."));
}

#[test]
fn reading_outside_of_a_render_leaves_the_hooks_alone() {
    thread_local! {
        static CHILD: Cell<Option<ScopeId>> = const { Cell::new(None) };
    }

    static CTX: LazyLock<Ctx<&'static str>> = LazyLock::new(|| Ctx::new(hello).named("Handler"));

    fn app() -> Element {
        CTX.provide((), rsx! { Child {} })
    }

    fn Child() -> Element {
        CHILD.with(|c| c.set(Some(current_scope_id())));
        let value = CTX.use_ctx()?;
        let label = use_hook(|| "read");
        rsx! { div { "{label}: {value}" } }
    }

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    assert_eq!(dioxus_ssr::render(&dom), "<div>read: Hello!</div>");

    // Same situation as an event handler: the child's scope is current but nothing is rendering
    let child = CHILD.with(|c| c.get()).expect("child rendered");
    let read = dom.in_runtime(|| dom.in_scope(child, || CTX.use_ctx()));
    assert_eq!(read, Err(MissingProviderError::new("Ctx(Handler)")));

    dom.mark_dirty(child);
    dom.render_immediate(&mut NoOpMutations);
    assert_eq!(dioxus_ssr::render(&dom), "<div>read: Hello!</div>");
}
