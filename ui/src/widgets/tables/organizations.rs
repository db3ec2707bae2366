use campusdesk_business::{CurrentUser, Organization};
use campusdesk_states::Updater;

use super::gate_action_columns;
use crate::widgets::table::ColumnDef;

pub fn organization_columns(
    user: Option<&CurrentUser>,
    updater: &Updater,
) -> Vec<ColumnDef<Organization>> {
    let mut columns = vec![
        ColumnDef::field("Org Code", "orgCode", |org: &Organization| {
            org.org_code.clone()
        }),
        ColumnDef::field(
            "Org Translation Short",
            "orgTranslationShort",
            |org: &Organization| org.org_translation_short.clone(),
        ),
        ColumnDef::field("Org Translation", "orgTranslation", |org: &Organization| {
            org.org_translation.clone()
        }),
        ColumnDef::yes_no("Inactive", "inactive", |org: &Organization| org.inactive),
    ];

    gate_action_columns(&mut columns, user, updater);
    columns
}
