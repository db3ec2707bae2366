use campusdesk_business::{CurrentUser, RecommendationRequest};
use campusdesk_states::Updater;

use super::{gate_action_columns, iso};
use crate::widgets::table::ColumnDef;

pub fn recommendation_request_columns(
    user: Option<&CurrentUser>,
    updater: &Updater,
) -> Vec<ColumnDef<RecommendationRequest>> {
    let mut columns = vec![
        ColumnDef::field("id", "id", |request: &RecommendationRequest| {
            request.id.to_string()
        }),
        ColumnDef::field(
            "Requester Email",
            "requesterEmail",
            |request: &RecommendationRequest| request.requester_email.clone(),
        ),
        ColumnDef::field(
            "Professor Email",
            "professorEmail",
            |request: &RecommendationRequest| request.professor_email.clone(),
        ),
        ColumnDef::field(
            "Explanation",
            "explanation",
            |request: &RecommendationRequest| request.explanation.clone(),
        ),
        ColumnDef::field(
            "Date Requested",
            "dateRequested",
            |request: &RecommendationRequest| iso(request.date_requested),
        ),
        ColumnDef::field(
            "Date Needed",
            "dateNeeded",
            |request: &RecommendationRequest| iso(request.date_needed),
        ),
        ColumnDef::yes_no("Done", "done", |request: &RecommendationRequest| {
            request.done
        }),
    ];

    gate_action_columns(&mut columns, user, updater);
    columns
}
