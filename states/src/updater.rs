use std::any::{Any, TypeId, type_name};

use flume::Sender;
use log::warn;

use crate::{Command, Compute, State};

/// A message queued for the next [`crate::StateCtx::sync`].
pub(crate) enum Message {
    /// Mutate a registered state or replace a registered cache in place.
    Update {
        type_id: TypeId,
        type_name: &'static str,
        apply: Box<dyn FnOnce(&mut dyn Any) + Send>,
    },
    /// Reset a cache to its `Default` (idle) shape.
    Invalidate {
        type_id: TypeId,
        type_name: &'static str,
    },
    /// Run a command.
    Dispatch(Box<dyn Command>),
}

/// Write handle for the state registry.
///
/// Clonable and `Send`: UI callbacks and HTTP completion callbacks hold one
/// of these instead of borrowing the [`crate::StateCtx`]. Everything sent
/// here is applied in send order by `sync`.
#[derive(Clone)]
pub struct Updater {
    tx: Sender<Message>,
}

impl Updater {
    pub(crate) fn new(tx: Sender<Message>) -> Self {
        Self { tx }
    }

    /// Queue an in-place mutation of a registered state.
    pub fn update<T: State>(&self, f: impl FnOnce(&mut T) + Send + 'static) {
        self.send(Message::Update {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            apply: Box::new(move |any| match any.downcast_mut::<T>() {
                Some(state) => f(state),
                None => warn!("update for `{}` hit a different type", type_name::<T>()),
            }),
        });
    }

    /// Queue a full replacement of a query cache.
    pub fn set<T: Compute>(&self, value: T) {
        self.send(Message::Update {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            apply: Box::new(move |any| match any.downcast_mut::<T>() {
                Some(cache) => *cache = value,
                None => warn!("set for `{}` hit a different type", type_name::<T>()),
            }),
        });
    }

    /// Queue a cache invalidation; the cache reads as `Default` afterwards.
    pub fn invalidate<T: Compute>(&self) {
        self.send(Message::Invalidate {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        });
    }

    /// Queue a command for the next sync pass.
    pub fn dispatch(&self, command: impl Command) {
        self.send(Message::Dispatch(Box::new(command)));
    }

    fn send(&self, message: Message) {
        // The receiver lives inside StateCtx; a closed channel means the app
        // is shutting down while an HTTP callback completes. Drop the update.
        if self.tx.send(message).is_err() {
            warn!("state channel closed; dropping update");
        }
    }
}
