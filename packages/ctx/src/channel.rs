//! Channels are how a provider hands its value to the components below it.
//!
//! Dioxus keys context by type, so two contexts that carry the same value type would collide. Instead each provider
//! publishes one [`Channels`] map: the map it inherited from the nearest provider above it, plus its own entry. The
//! nearest map therefore knows every channel published above a scope, with inner providers shadowing outer ones.

use std::{
    any::Any,
    collections::HashMap,
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};

use dioxus_core::{provide_context, try_consume_context};
use dioxus_signals::*;

/// Identifies the channel of one [`Ctx`](crate::Ctx). Allocated once per context and never reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct ChannelId(u64);

impl ChannelId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Every channel published above the scope that provided this map.
#[derive(Clone, Default)]
pub(crate) struct Channels {
    entries: Rc<HashMap<ChannelId, Rc<dyn Any>>>,
}

impl Channels {
    fn with<T: Any>(&self, id: ChannelId, entry: T) -> Self {
        let mut entries = self.entries.clone();
        Rc::make_mut(&mut entries).insert(id, Rc::new(entry));
        Self { entries }
    }

    fn get<T: Any + Copy>(&self, id: ChannelId) -> Option<T> {
        let entry = self.entries.get(&id)?;
        (**entry).downcast_ref::<T>().copied()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Open `id` in the current scope with its first value.
///
/// Must run once per provider scope, inside `use_hook`. The returned signal is owned by the provider scope, so the
/// published value is dropped when the provider unmounts.
pub(crate) fn open<V: 'static>(id: ChannelId, name: &str, initial: V) -> Signal<V> {
    let signal = Signal::new(initial);
    let inherited = try_consume_context::<Channels>().unwrap_or_default();
    let channels = provide_context(inherited.with(id, signal));

    tracing::trace!(channel = ?id, ctx = name, depth = channels.len(), "opened context channel");

    signal
}

/// Replace the value a provider publishes. Readers subscribed to the signal re-render.
pub(crate) fn publish<V: 'static>(mut signal: Signal<V>, id: ChannelId, name: &str, value: V) {
    signal.set(value);

    tracing::trace!(channel = ?id, ctx = name, "republished context value");
}

/// Find the signal for `id` published by the nearest provider above the current scope.
pub(crate) fn lookup<V: 'static>(id: ChannelId) -> Option<Signal<V>> {
    try_consume_context::<Channels>()?.get(id)
}
