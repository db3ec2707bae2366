use campusdesk_business::{Article, CurrentUser};
use campusdesk_states::Updater;

use super::{gate_action_columns, iso};
use crate::widgets::table::ColumnDef;

pub fn article_columns(
    user: Option<&CurrentUser>,
    updater: &Updater,
) -> Vec<ColumnDef<Article>> {
    let mut columns = vec![
        ColumnDef::field("id", "id", |article: &Article| article.id.to_string()),
        ColumnDef::field("Title", "title", |article: &Article| article.title.clone()),
        ColumnDef::field("Url", "url", |article: &Article| article.url.clone()),
        ColumnDef::field("Explanation", "explanation", |article: &Article| {
            article.explanation.clone()
        }),
        ColumnDef::field("Email", "email", |article: &Article| article.email.clone()),
        ColumnDef::field("Date Added", "dateAdded", |article: &Article| {
            iso(article.date_added)
        }),
    ];

    gate_action_columns(&mut columns, user, updater);
    columns
}
