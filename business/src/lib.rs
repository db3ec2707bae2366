//! Business layer for CampusDesk: entity records, REST commands, and the
//! app-level states (route, config, notices, session).
//!
//! Network IO lives exclusively in [`campusdesk_states::Command`]
//! implementations here; UI code dispatches commands and reads the resulting
//! query caches.

mod api;
mod collection;
mod config;
mod entity;
mod notice;
mod route;
mod session;
mod status;

pub mod entities;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

pub use campusdesk_utils::version_info;
pub use collection::{
    CollectionCache, DeleteRecord, FetchCollection, FetchRecord, RecordCache,
};
pub use config::BusinessConfig;
pub use entities::{
    Article, DiningCommonsMenuItem, HelpRequest, MenuItemReview, Organization,
    RecommendationRequest,
};
pub use entity::{Entity, EntityKind};
pub use notice::{Notice, NoticeLevel, Notices};
pub use route::Route;
pub use session::{CurrentUser, FetchCurrentUser, Role, SessionCache};
pub use status::{BackendAvailability, BackendStatus, PingBackend};
