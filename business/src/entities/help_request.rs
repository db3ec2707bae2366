use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{Entity, EntityKind};

/// A request for help from course staff during a lab session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequest {
    pub id: i64,
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    pub request_time: NaiveDateTime,
    pub explanation: String,
    pub solved: bool,
}

impl Entity for HelpRequest {
    const KIND: EntityKind = EntityKind::HelpRequests;

    fn id_value(&self) -> String {
        self.id.to_string()
    }
}
