use campusdesk_business::{CurrentUser, MenuItemReview};
use campusdesk_states::Updater;

use super::{gate_action_columns, iso};
use crate::widgets::table::ColumnDef;

pub fn menu_item_review_columns(
    user: Option<&CurrentUser>,
    updater: &Updater,
) -> Vec<ColumnDef<MenuItemReview>> {
    let mut columns = vec![
        ColumnDef::field("id", "id", |review: &MenuItemReview| review.id.to_string()),
        ColumnDef::field("Item Id", "itemId", |review: &MenuItemReview| {
            review.item_id.to_string()
        }),
        ColumnDef::field("Reviewer Email", "reviewerEmail", |review: &MenuItemReview| {
            review.reviewer_email.clone()
        }),
        ColumnDef::field("Stars", "stars", |review: &MenuItemReview| {
            review.stars.to_string()
        }),
        ColumnDef::field("Date Reviewed", "dateReviewed", |review: &MenuItemReview| {
            iso(review.date_reviewed)
        }),
        ColumnDef::field("Comments", "comments", |review: &MenuItemReview| {
            review.comments.clone()
        }),
    ];

    gate_action_columns(&mut columns, user, updater);
    columns
}
