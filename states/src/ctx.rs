use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;

use flume::{Receiver, Sender};
use log::{debug, warn};

use crate::updater::Message;
use crate::{Command, Compute, State, StateError, Updater};

fn fresh<T: Compute>() -> Box<dyn Any> {
    Box::new(T::default())
}

/// Registry of states and query caches, keyed by type.
///
/// The owning side of the [`Updater`] channel. The app calls [`Self::sync`]
/// once per frame, before rendering, so every frame sees a consistent
/// snapshot and rendering itself never mutates the registry.
pub struct StateCtx {
    tx: Sender<Message>,
    rx: Receiver<Message>,
    states: HashMap<TypeId, Box<dyn Any>>,
    computes: HashMap<TypeId, Box<dyn Any>>,
    resetters: HashMap<TypeId, fn() -> Box<dyn Any>>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            tx,
            rx,
            states: HashMap::new(),
            computes: HashMap::new(),
            resetters: HashMap::new(),
        }
    }

    /// Register a state with its `Default` value.
    pub fn register_state<T: State>(&mut self) {
        self.add_state(T::default());
    }

    /// Register a state with a specific initial value.
    pub fn add_state<T: State>(&mut self, value: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(value));
    }

    /// Register a query cache in its idle shape.
    pub fn register_compute<T: Compute>(&mut self) {
        self.computes
            .insert(TypeId::of::<T>(), Box::new(T::default()));
        self.resetters.insert(TypeId::of::<T>(), fresh::<T>);
    }

    /// Read a registered state.
    ///
    /// # Panics
    /// Panics if `T` was never registered; that is a wiring bug, not a
    /// runtime condition. Use [`Self::try_state`] where absence is expected.
    pub fn state<T: State>(&self) -> &T {
        match self.try_state::<T>() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_state<T: State>(&self) -> Result<&T, StateError> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.downcast_ref::<T>())
            .ok_or(StateError::NotRegistered(type_name::<T>()))
    }

    /// Mutable access to a registered state, for code that owns the context
    /// (tests, app setup). UI callbacks go through [`Updater`] instead.
    ///
    /// # Panics
    /// Panics if `T` was never registered.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        match self
            .states
            .get_mut(&TypeId::of::<T>())
            .and_then(|slot| slot.downcast_mut::<T>())
        {
            Some(state) => state,
            None => panic!("{}", StateError::NotRegistered(type_name::<T>())),
        }
    }

    /// Read a query cache. `None` means the cache type was never registered.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.downcast_ref::<T>())
    }

    /// A write handle that can outlive any borrow of `self`.
    pub fn updater(&self) -> Updater {
        Updater::new(self.tx.clone())
    }

    /// Queue a command for the next [`Self::sync`].
    pub fn dispatch(&self, command: impl Command) {
        self.updater().dispatch(command);
    }

    /// Drain the channel and apply messages in send order.
    ///
    /// Commands run inline; updates they publish synchronously are picked up
    /// by the next drain iteration of the same call, so a command's
    /// `Pending` marker is visible as soon as `sync` returns. Results of
    /// asynchronous callbacks land on whichever later `sync` follows them.
    pub fn sync(&mut self) {
        loop {
            let batch: Vec<Message> = self.rx.try_iter().collect();
            if batch.is_empty() {
                break;
            }
            for message in batch {
                self.apply(message);
            }
        }
    }

    fn apply(&mut self, message: Message) {
        match message {
            Message::Update {
                type_id,
                type_name,
                apply,
            } => {
                let slot = self
                    .states
                    .get_mut(&type_id)
                    .or_else(|| self.computes.get_mut(&type_id));
                match slot {
                    Some(slot) => apply(slot.as_mut()),
                    None => warn!("dropping update for unregistered type `{type_name}`"),
                }
            }
            Message::Invalidate { type_id, type_name } => {
                match (self.computes.get_mut(&type_id), self.resetters.get(&type_id)) {
                    (Some(slot), Some(reset)) => *slot = reset(),
                    _ => warn!("dropping invalidate for unregistered cache `{type_name}`"),
                }
            }
            Message::Dispatch(command) => {
                debug!("running command {}", command.name());
                let updater = self.updater();
                command.run(self, updater);
            }
        }
    }
}
