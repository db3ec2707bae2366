//! Route state for page navigation.

use campusdesk_states::State;

use crate::EntityKind;

/// The current page of the application.
///
/// Edit routes carry the record's designated identifier as a string, exactly
/// as it appears in the rendered path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Index(EntityKind),
    Create(EntityKind),
    Edit(EntityKind, String),
}

impl Route {
    pub fn edit(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::Edit(kind, id.into())
    }

    /// The literal path of this route, e.g. `/menuitemreview/edit/6`.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Index(kind) => format!("/{}", kind.route_prefix()),
            Self::Create(kind) => format!("/{}/create", kind.route_prefix()),
            Self::Edit(kind, id) => format!("/{}/edit/{}", kind.route_prefix(), id),
        }
    }
}

impl State for Route {}
