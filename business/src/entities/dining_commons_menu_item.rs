use serde::{Deserialize, Serialize};

use crate::{Entity, EntityKind};

/// One item on a dining commons menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningCommonsMenuItem {
    pub id: i64,
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

impl Entity for DiningCommonsMenuItem {
    const KIND: EntityKind = EntityKind::DiningCommonsMenuItems;

    fn id_value(&self) -> String {
        self.id.to_string()
    }
}
