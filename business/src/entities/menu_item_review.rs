use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{Entity, EntityKind};

/// A diner's star rating of one dining-commons menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReview {
    pub id: i64,
    /// The reviewed [`crate::DiningCommonsMenuItem`].
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

impl Entity for MenuItemReview {
    const KIND: EntityKind = EntityKind::MenuItemReviews;

    fn id_value(&self) -> String {
        self.id.to_string()
    }
}
