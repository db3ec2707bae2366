use serde::{Deserialize, Serialize};

use crate::{Entity, EntityKind};

/// A registered student organization.
///
/// The natural key is `org_code`; there is no numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

impl Entity for Organization {
    const KIND: EntityKind = EntityKind::Organizations;

    fn id_param() -> &'static str {
        "orgCode"
    }

    fn id_value(&self) -> String {
        self.org_code.clone()
    }
}
