use thiserror::Error;

/// Errors from the state registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    /// The requested type was never registered on the [`crate::StateCtx`].
    #[error("state type `{0}` is not registered")]
    NotRegistered(&'static str),
}
