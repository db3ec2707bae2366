//! Home page: a directory of the entity families.

use campusdesk_business::{EntityKind, Route, SessionCache};
use egui::{Response, Ui};

use crate::state::AppState;

pub fn home_page(state: &mut AppState, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.heading("CampusDesk");

        if let Some(user) = state.ctx.cached::<SessionCache>().and_then(|s| s.user()) {
            ui.label(format!("Welcome, {}", user.email));
        }

        ui.add_space(8.0);

        for kind in EntityKind::ALL {
            if ui.link(kind.title()).clicked() {
                state
                    .ctx
                    .updater()
                    .update::<Route>(move |route| *route = Route::Index(kind));
            }
        }
    })
    .response
}

#[cfg(test)]
mod home_page_test {
    use egui_kittest::Harness;
    use kittest::Queryable;

    use crate::state::AppState;

    #[test]
    fn test_home_page_lists_every_entity_family() {
        let state = AppState::test("http://127.0.0.1:1".to_owned());

        let harness = Harness::new_ui_state(
            |ui, state| {
                super::home_page(state, ui);
            },
            state,
        );

        for title in ["Articles", "Help Requests", "Organizations"] {
            assert!(
                harness.query_by_label_contains(title).is_some(),
                "home page should link to {title}"
            );
        }
    }
}
