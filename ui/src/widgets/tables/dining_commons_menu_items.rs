use campusdesk_business::{CurrentUser, DiningCommonsMenuItem};
use campusdesk_states::Updater;

use super::gate_action_columns;
use crate::widgets::table::ColumnDef;

pub fn dining_commons_menu_item_columns(
    user: Option<&CurrentUser>,
    updater: &Updater,
) -> Vec<ColumnDef<DiningCommonsMenuItem>> {
    let mut columns = vec![
        ColumnDef::field("id", "id", |item: &DiningCommonsMenuItem| {
            item.id.to_string()
        }),
        ColumnDef::field(
            "Dining Commons Code",
            "diningCommonsCode",
            |item: &DiningCommonsMenuItem| item.dining_commons_code.clone(),
        ),
        ColumnDef::field("Name", "name", |item: &DiningCommonsMenuItem| {
            item.name.clone()
        }),
        ColumnDef::field("Station", "station", |item: &DiningCommonsMenuItem| {
            item.station.clone()
        }),
    ];

    gate_action_columns(&mut columns, user, updater);
    columns
}
