use std::any::Any;

/// Plain application state held by a [`crate::StateCtx`].
///
/// `Default` is the value a state is registered with before anything has
/// happened (e.g. the landing route, an empty notice queue).
pub trait State: Any + Default {}

/// A query cache held by a [`crate::StateCtx`].
///
/// `Default` doubles as the invalidated shape: after
/// [`crate::Updater::invalidate`] the cache reads as if no query had run yet,
/// which is what prompts dependent views to refetch.
///
/// Caches are written exclusively through [`crate::Updater::set`] from
/// commands; rendering code only reads them via [`crate::StateCtx::cached`].
/// `Send` because replacement values cross the updater channel, usually from
/// an HTTP completion callback on another thread.
pub trait Compute: Any + Default + Send {}
