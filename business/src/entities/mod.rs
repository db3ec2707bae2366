//! Entity records, mirroring the backend's JSON wire format (camelCase
//! field names, ISO-8601 local datetimes).

mod article;
mod dining_commons_menu_item;
mod help_request;
mod menu_item_review;
mod organization;
mod recommendation_request;

pub use article::Article;
pub use dining_commons_menu_item::DiningCommonsMenuItem;
pub use help_request::HelpRequest;
pub use menu_item_review::MenuItemReview;
pub use organization::Organization;
pub use recommendation_request::RecommendationRequest;

#[cfg(test)]
mod wire_format_tests {
    use crate::{Entity, MenuItemReview, Organization};

    #[test]
    fn test_menu_item_review_decodes_backend_json() {
        let json = r#"{
            "id": 6,
            "itemId": 20,
            "reviewerEmail": "somwest@gmail.com",
            "stars": 3,
            "dateReviewed": "2025-05-01T22:48:12",
            "comments": "it was alright"
        }"#;
        let review: MenuItemReview = serde_json::from_str(json).unwrap();
        assert_eq!(review.id, 6);
        assert_eq!(review.item_id, 20);
        assert_eq!(review.reviewer_email, "somwest@gmail.com");
        assert_eq!(review.id_value(), "6");
    }

    #[test]
    fn test_organization_identifier_is_org_code() {
        let json = r#"{
            "orgCode": "AS",
            "orgTranslationShort": "Assoc Students",
            "orgTranslation": "Associated Students",
            "inactive": true
        }"#;
        let org: Organization = serde_json::from_str(json).unwrap();
        assert_eq!(Organization::id_param(), "orgCode");
        assert_eq!(org.id_value(), "AS");
        assert!(org.inactive);
    }

    #[test]
    fn test_encoding_uses_camel_case_names() {
        let org = Organization {
            org_code: "RHA".to_owned(),
            org_translation_short: "Res Hall Assoc".to_owned(),
            org_translation: "Residence Halls Association".to_owned(),
            inactive: false,
        };
        let value = serde_json::to_value(&org).unwrap();
        assert!(value.get("orgTranslationShort").is_some());
        assert!(value.get("org_translation_short").is_none());
    }
}
