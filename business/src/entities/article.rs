use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{Entity, EntityKind};

/// A curated news article about campus life.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    pub date_added: NaiveDateTime,
}

impl Entity for Article {
    const KIND: EntityKind = EntityKind::Articles;

    fn id_value(&self) -> String {
        self.id.to_string()
    }
}
