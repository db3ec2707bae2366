/// Lifecycle of a query cache.
///
/// Every cache in the app stores one of these: `Idle` means "never fetched
/// (or invalidated)", which is the signal for fetch-on-idle views to dispatch
/// the corresponding command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QueryStatus<T> {
    /// No query attempted yet, or the cache was invalidated.
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    /// The last query succeeded.
    Success(T),
    /// The last query failed.
    Error(String),
}

impl<T> QueryStatus<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The cached value, if the last query succeeded.
    pub fn value(&self) -> Option<&T> {
        if let Self::Success(value) = self {
            Some(value)
        } else {
            None
        }
    }

    /// The error message, if the last query failed.
    pub fn error_message(&self) -> Option<&str> {
        if let Self::Error(message) = self {
            Some(message)
        } else {
            None
        }
    }
}
