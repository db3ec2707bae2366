use crate::{StateCtx, Updater};

/// A manually dispatched unit of side effects.
///
/// Commands are values: they carry their own parameters (a record id, a
/// search term) and are queued with [`Updater::dispatch`] or
/// [`StateCtx::dispatch`]. [`StateCtx::sync`] runs them with read access to
/// the registry and a fresh [`Updater`] for publishing results.
///
/// Network IO must happen here and nowhere else. A command that starts an
/// asynchronous request moves the `Updater` into the completion callback; the
/// result lands on a later `sync` pass.
pub trait Command: Send + 'static {
    fn run(self: Box<Self>, ctx: &StateCtx, updater: Updater);

    /// Name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
