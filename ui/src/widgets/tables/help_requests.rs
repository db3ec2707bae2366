use campusdesk_business::{CurrentUser, HelpRequest};
use campusdesk_states::Updater;

use super::{gate_action_columns, iso};
use crate::widgets::table::ColumnDef;

pub fn help_request_columns(
    user: Option<&CurrentUser>,
    updater: &Updater,
) -> Vec<ColumnDef<HelpRequest>> {
    let mut columns = vec![
        ColumnDef::field("Id", "id", |request: &HelpRequest| request.id.to_string()),
        ColumnDef::field("Requester Email", "requesterEmail", |request: &HelpRequest| {
            request.requester_email.clone()
        }),
        ColumnDef::field("Team ID", "teamId", |request: &HelpRequest| {
            request.team_id.clone()
        }),
        ColumnDef::field(
            "Table or Breakout Room",
            "tableOrBreakoutRoom",
            |request: &HelpRequest| request.table_or_breakout_room.clone(),
        ),
        ColumnDef::field("Request Time (ISO)", "requestTime", |request: &HelpRequest| {
            iso(request.request_time)
        }),
        ColumnDef::field("Explanation", "explanation", |request: &HelpRequest| {
            request.explanation.clone()
        }),
    ];

    gate_action_columns(&mut columns, user, updater);
    columns
}
