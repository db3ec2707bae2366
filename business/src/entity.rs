use std::fmt;

use serde::{Serialize, de::DeserializeOwned};

/// The entity families served by the backend.
///
/// Per-entity strings (resource, route prefix, table id) live here so the
/// generic collection commands, the router, and the table adapters all agree
/// on one spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Articles,
    HelpRequests,
    MenuItemReviews,
    RecommendationRequests,
    DiningCommonsMenuItems,
    Organizations,
}

impl EntityKind {
    pub const ALL: [Self; 6] = [
        Self::Articles,
        Self::HelpRequests,
        Self::MenuItemReviews,
        Self::RecommendationRequests,
        Self::DiningCommonsMenuItems,
        Self::Organizations,
    ];

    /// REST resource under the API base.
    pub fn resource(self) -> &'static str {
        match self {
            Self::Articles => "/articles",
            Self::HelpRequests => "/helprequests",
            Self::MenuItemReviews => "/menuitemreviews",
            Self::RecommendationRequests => "/recommendationrequests",
            Self::DiningCommonsMenuItems => "/diningcommonsmenuitems",
            Self::Organizations => "/organizations",
        }
    }

    /// The "list all" resource, which is also the collection cache key that
    /// gets invalidated after a successful delete.
    pub fn collection_key(self) -> String {
        format!("{}/all", self.resource())
    }

    /// First segment of the in-app routes (`/{prefix}`, `/{prefix}/edit/{id}`).
    pub fn route_prefix(self) -> &'static str {
        match self {
            Self::Articles => "articles",
            Self::HelpRequests => "helprequests",
            Self::MenuItemReviews => "menuitemreview",
            Self::RecommendationRequests => "recommendationrequest",
            Self::DiningCommonsMenuItems => "diningcommonsmenuitems",
            Self::Organizations => "organizations",
        }
    }

    /// Singular record name used in notices ("Article with id 1 deleted").
    pub fn record_name(self) -> &'static str {
        match self {
            Self::Articles => "Article",
            Self::HelpRequests => "HelpRequest",
            Self::MenuItemReviews => "MenuItemReview",
            Self::RecommendationRequests => "RecommendationRequest",
            Self::DiningCommonsMenuItems => "DiningCommonsMenuItem",
            Self::Organizations => "Organization",
        }
    }

    /// Page heading.
    pub fn title(self) -> &'static str {
        match self {
            Self::Articles => "Articles",
            Self::HelpRequests => "Help Requests",
            Self::MenuItemReviews => "Menu Item Reviews",
            Self::RecommendationRequests => "Recommendation Requests",
            Self::DiningCommonsMenuItems => "Dining Commons Menu Items",
            Self::Organizations => "Organizations",
        }
    }

    /// Default table identifier; prefixes every generated cell identifier.
    pub fn table_id(self) -> &'static str {
        match self {
            Self::Articles => "ArticlesTable",
            Self::HelpRequests => "HelpRequestTable",
            Self::MenuItemReviews => "MenuItemReviewTable",
            Self::RecommendationRequests => "RecommendationRequestTable",
            Self::DiningCommonsMenuItems => "DiningCommonsMenuItemTable",
            Self::Organizations => "OrganizationTable",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.record_name())
    }
}

/// A backend record family.
///
/// Each entity designates exactly one identifier, used consistently for
/// fetch-one, update targeting, and delete (`?{id_param}={id_value}`).
pub trait Entity:
    Clone + fmt::Debug + Serialize + DeserializeOwned + Send + 'static
{
    const KIND: EntityKind;

    /// Query-parameter name of the designated identifier.
    fn id_param() -> &'static str {
        "id"
    }

    /// Identifier value of this record.
    fn id_value(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_key_is_resource_slash_all() {
        assert_eq!(EntityKind::Articles.collection_key(), "/articles/all");
        assert_eq!(
            EntityKind::Organizations.collection_key(),
            "/organizations/all"
        );
    }

    #[test]
    fn test_every_kind_has_distinct_strings() {
        for accessor in [
            EntityKind::resource as fn(EntityKind) -> &'static str,
            EntityKind::route_prefix,
            EntityKind::table_id,
        ] {
            let mut seen: Vec<&str> = EntityKind::ALL.iter().map(|k| accessor(*k)).collect();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), EntityKind::ALL.len());
        }
    }
}
