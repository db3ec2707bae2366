use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{Entity, EntityKind};

/// A student's request for a letter of recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub id: i64,
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    pub date_requested: NaiveDateTime,
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

impl Entity for RecommendationRequest {
    const KIND: EntityKind = EntityKind::RecommendationRequests;

    fn id_value(&self) -> String {
        self.id.to_string()
    }
}
