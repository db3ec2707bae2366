//! Typed state registry with query caches and side-effecting commands.
//!
//! The crate separates three concerns:
//! - [`State`]: plain application state (route, config, notices).
//! - [`Compute`]: a query cache whose `Default` is its invalidated shape.
//!   Caches are only ever written by commands, never by rendering code.
//! - [`Command`]: an explicitly dispatched unit of side effects (network IO).
//!
//! All writes travel through an [`Updater`] handle over a channel and are
//! applied by [`StateCtx::sync`] at frame boundaries, so UI callbacks can be
//! plain `Fn` closures holding a cloned `Updater` instead of borrowing the
//! context.

mod command;
mod ctx;
mod error;
mod query;
mod state;
mod updater;

pub use command::Command;
pub use ctx::StateCtx;
pub use error::StateError;
pub use query::QueryStatus;
pub use state::{Compute, State};
pub use updater::Updater;

#[cfg(test)]
mod state_ctx_test {
    use super::*;

    #[derive(Debug, Default, PartialEq, Eq)]
    struct Counter {
        value: i32,
    }

    impl State for Counter {}

    #[derive(Debug, Default, PartialEq, Eq)]
    struct AnswerCache {
        answer: Option<i32>,
    }

    impl Compute for AnswerCache {}

    struct AddCommand {
        amount: i32,
    }

    impl Command for AddCommand {
        fn run(self: Box<Self>, ctx: &StateCtx, updater: Updater) {
            let base = ctx.state::<Counter>().value;
            updater.set(AnswerCache {
                answer: Some(base + self.amount),
            });
        }
    }

    fn ctx() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.register_state::<Counter>();
        ctx.register_compute::<AnswerCache>();
        ctx
    }

    #[test]
    fn update_is_applied_on_sync() {
        let mut ctx = ctx();
        ctx.updater().update::<Counter>(|c| c.value = 42);

        assert_eq!(ctx.state::<Counter>().value, 0);
        ctx.sync();
        assert_eq!(ctx.state::<Counter>().value, 42);
    }

    #[test]
    fn updates_apply_in_send_order() {
        let mut ctx = ctx();
        let updater = ctx.updater();
        updater.update::<Counter>(|c| c.value = 1);
        updater.update::<Counter>(|c| c.value *= 10);

        ctx.sync();
        assert_eq!(ctx.state::<Counter>().value, 10);
    }

    #[test]
    fn command_output_is_visible_after_the_same_sync() {
        let mut ctx = ctx();
        ctx.updater().update::<Counter>(|c| c.value = 40);
        ctx.dispatch(AddCommand { amount: 2 });

        ctx.sync();
        assert_eq!(
            ctx.cached::<AnswerCache>(),
            Some(&AnswerCache { answer: Some(42) })
        );
    }

    #[test]
    fn invalidate_resets_a_cache_to_default() {
        let mut ctx = ctx();
        let updater = ctx.updater();
        updater.set(AnswerCache { answer: Some(7) });
        ctx.sync();
        assert_eq!(ctx.cached::<AnswerCache>().and_then(|c| c.answer), Some(7));

        updater.invalidate::<AnswerCache>();
        ctx.sync();
        assert_eq!(ctx.cached::<AnswerCache>(), Some(&AnswerCache::default()));
    }

    #[test]
    fn unregistered_types_are_dropped_not_fatal() {
        let _ = env_logger::builder().is_test(true).try_init();

        #[derive(Debug, Default)]
        struct Orphan;
        impl State for Orphan {}

        let mut ctx = StateCtx::new();
        ctx.updater().update::<Orphan>(|_| {});
        ctx.sync();

        assert!(ctx.try_state::<Orphan>().is_err());
    }

    #[test]
    fn add_state_keeps_the_given_value() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter { value: 9 });
        assert_eq!(ctx.state::<Counter>().value, 9);
    }
}
