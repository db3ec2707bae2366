//! Placeholder page for record creation.

use campusdesk_business::{EntityKind, Route};
use egui::{Response, Ui};

use crate::state::AppState;

pub fn create_page(state: &mut AppState, ui: &mut Ui, kind: EntityKind) -> Response {
    ui.vertical(|ui| {
        ui.heading(format!("Create New {}", kind.record_name()));
        ui.label("Coming soon.");

        if ui.button("Back").clicked() {
            state
                .ctx
                .updater()
                .update::<Route>(move |route| *route = Route::Index(kind));
        }
    })
    .response
}
