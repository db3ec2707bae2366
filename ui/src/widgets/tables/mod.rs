//! Entity table adapters.
//!
//! One module per entity family. Each adapter supplies the entity's field
//! columns (headers and accessors matching the backend field names) and
//! appends the Edit/Delete action columns when the caller holds the admin
//! role. The adapters own no state; clicks flow through the
//! [`campusdesk_states::Updater`] they were built with.

mod articles;
mod dining_commons_menu_items;
mod help_requests;
mod menu_item_reviews;
mod organizations;
mod recommendation_requests;

pub use articles::article_columns;
pub use dining_commons_menu_items::dining_commons_menu_item_columns;
pub use help_requests::help_request_columns;
pub use menu_item_reviews::menu_item_review_columns;
pub use organizations::organization_columns;
pub use recommendation_requests::recommendation_request_columns;

use campusdesk_business::{CurrentUser, Entity, Role};
use campusdesk_states::Updater;
use chrono::NaiveDateTime;

use super::table::{ColumnDef, append_action_columns};

/// Datetimes are displayed the way the backend serializes them.
pub(crate) fn iso(datetime: NaiveDateTime) -> String {
    datetime.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Append Edit/Delete if `user` holds the admin role.
pub(crate) fn gate_action_columns<E: Entity>(
    columns: &mut Vec<ColumnDef<E>>,
    user: Option<&CurrentUser>,
    updater: &Updater,
) {
    if user.is_some_and(|user| user.has_role(Role::Admin)) {
        append_action_columns(columns, updater);
    }
}
