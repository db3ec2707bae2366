//! Canonical sample records, compiled only for tests (or the `fixtures`
//! feature) so unit and integration tests across the workspace agree on the
//! same literals.

use chrono::NaiveDateTime;

use crate::{
    Article, CurrentUser, DiningCommonsMenuItem, HelpRequest, MenuItemReview, Organization,
    RecommendationRequest, Role,
};

fn dt(s: &str) -> NaiveDateTime {
    s.parse().expect("fixture datetime")
}

pub fn admin_user() -> CurrentUser {
    CurrentUser::with_roles(
        "phtcon@example.edu",
        "Phill Conrad",
        [Role::Admin, Role::User],
    )
}

pub fn regular_user() -> CurrentUser {
    CurrentUser::with_roles("cgaucho@example.edu", "Chris Gaucho", [Role::User])
}

pub fn one_article() -> Article {
    Article {
        id: 1,
        title: "Ranking the most vegetarian-friendly dining halls".to_owned(),
        url: "https://dailynexus.com/2023-08-24/ranking-most-vegetarian-friendly-dining-halls/"
            .to_owned(),
        explanation: "Daily Nexus article 1".to_owned(),
        email: "karenyuan@example.edu".to_owned(),
        date_added: dt("2023-08-24T09:00:00"),
    }
}

pub fn three_articles() -> Vec<Article> {
    vec![
        one_article(),
        Article {
            id: 3,
            title: "What food is offered at the dining halls?".to_owned(),
            url: "https://dailynexus.com/2025-02-28/what-food-is-offered-at-the-dining-halls/"
                .to_owned(),
            explanation: "Daily Nexus article 2".to_owned(),
            email: "karenyuan@example.edu".to_owned(),
            date_added: dt("2025-02-28T09:00:00"),
        },
        Article {
            id: 4,
            title: "Dining halls ranked by someone who hasn't been to any of them".to_owned(),
            url: "https://dailynexus.com/2021-04-27/dining-halls-ranked/".to_owned(),
            explanation: "Daily Nexus article 3".to_owned(),
            email: "karenyuan@example.edu".to_owned(),
            date_added: dt("2021-04-27T09:00:00"),
        },
    ]
}

pub fn one_help_request() -> HelpRequest {
    HelpRequest {
        id: 1,
        requester_email: "student1@example.edu".to_owned(),
        team_id: "team1".to_owned(),
        table_or_breakout_room: "Table 3".to_owned(),
        request_time: dt("2023-10-01T14:30:00"),
        explanation: "Need help with Spring Boot setup.".to_owned(),
        solved: false,
    }
}

pub fn three_help_requests() -> Vec<HelpRequest> {
    vec![
        one_help_request(),
        HelpRequest {
            id: 2,
            requester_email: "student2@example.edu".to_owned(),
            team_id: "team2".to_owned(),
            table_or_breakout_room: "Breakout Room 2".to_owned(),
            request_time: dt("2023-10-01T14:45:00"),
            explanation: "Getting a 500 error on POST request.".to_owned(),
            solved: true,
        },
        HelpRequest {
            id: 3,
            requester_email: "student3@example.edu".to_owned(),
            team_id: "team3".to_owned(),
            table_or_breakout_room: "Table 1".to_owned(),
            request_time: dt("2023-10-01T15:00:00"),
            explanation: "Confused about how to write JPA queries.".to_owned(),
            solved: false,
        },
    ]
}

pub fn one_menu_item_review() -> MenuItemReview {
    MenuItemReview {
        id: 6,
        item_id: 20,
        reviewer_email: "somwest@gmail.com".to_owned(),
        stars: 3,
        date_reviewed: dt("2025-05-01T22:48:12"),
        comments: "it was alright".to_owned(),
    }
}

pub fn three_menu_item_reviews() -> Vec<MenuItemReview> {
    vec![
        one_menu_item_review(),
        MenuItemReview {
            id: 7,
            item_id: 25,
            reviewer_email: "swaggypomme@gmail.com".to_owned(),
            stars: 5,
            date_reviewed: dt("2025-05-24T11:40:00"),
            comments: "good price, great taste".to_owned(),
        },
        MenuItemReview {
            id: 8,
            item_id: 30,
            reviewer_email: "eding42@gmail.com".to_owned(),
            stars: 1,
            date_reviewed: dt("2025-03-01T07:48:00"),
            comments: "might be the worst thing i've ever put in my mouth".to_owned(),
        },
    ]
}

pub fn one_recommendation_request() -> RecommendationRequest {
    RecommendationRequest {
        id: 1,
        requester_email: "tina@example.edu".to_owned(),
        professor_email: "professor@example.edu".to_owned(),
        explanation: "bs/ms program letter of rec".to_owned(),
        date_requested: dt("2025-04-28T18:07:00"),
        date_needed: dt("2025-05-10T18:07:00"),
        done: true,
    }
}

pub fn three_recommendation_requests() -> Vec<RecommendationRequest> {
    vec![
        RecommendationRequest {
            id: 2,
            requester_email: "chloe@example.edu".to_owned(),
            professor_email: "prof@example.edu".to_owned(),
            explanation: "grad school application".to_owned(),
            date_requested: dt("2024-04-28T11:56:04"),
            date_needed: dt("2024-05-28T11:56:04"),
            done: false,
        },
        RecommendationRequest {
            id: 3,
            requester_email: "mary@example.edu".to_owned(),
            professor_email: "prof1@example.edu".to_owned(),
            explanation: "phd school application".to_owned(),
            date_requested: dt("2024-04-15T11:56:04"),
            date_needed: dt("2024-05-13T11:56:04"),
            done: false,
        },
        RecommendationRequest {
            id: 4,
            requester_email: "nina@example.edu".to_owned(),
            professor_email: "prof2@example.edu".to_owned(),
            explanation: "job letter of recommendation".to_owned(),
            date_requested: dt("2024-04-20T11:56:04"),
            date_needed: dt("2024-04-27T11:56:04"),
            done: true,
        },
    ]
}

pub fn three_dining_commons_menu_items() -> Vec<DiningCommonsMenuItem> {
    vec![
        DiningCommonsMenuItem {
            id: 2,
            dining_commons_code: "B1".to_owned(),
            name: "Boss".to_owned(),
            station: "Portola".to_owned(),
        },
        DiningCommonsMenuItem {
            id: 3,
            dining_commons_code: "C3".to_owned(),
            name: "Crawfish".to_owned(),
            station: "Portola".to_owned(),
        },
        DiningCommonsMenuItem {
            id: 4,
            dining_commons_code: "D4".to_owned(),
            name: "Mate".to_owned(),
            station: "Portola".to_owned(),
        },
    ]
}

pub fn one_organization() -> Organization {
    Organization {
        org_code: "RHA".to_owned(),
        org_translation_short: "Res Hall Assoc".to_owned(),
        org_translation: "Residence Halls Association".to_owned(),
        inactive: false,
    }
}

pub fn three_organizations() -> Vec<Organization> {
    vec![
        Organization {
            org_code: "AS".to_owned(),
            org_translation_short: "Assoc Students".to_owned(),
            org_translation: "Associated Students".to_owned(),
            inactive: false,
        },
        Organization {
            org_code: "ASBS".to_owned(),
            org_translation_short: "AS Bike Shop".to_owned(),
            org_translation: "Associated Students Bike Shop".to_owned(),
            inactive: true,
        },
        Organization {
            org_code: "ARC".to_owned(),
            org_translation_short: "Asian Resource Center".to_owned(),
            org_translation: "Asian Resource Center".to_owned(),
            inactive: false,
        },
    ]
}
