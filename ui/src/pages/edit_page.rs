//! Detail page for a single record, reached through `/{prefix}/edit/{id}`.
//!
//! Form editing is out of scope; the page fetches the record by its
//! designated identifier and shows a read-only field list built from the same
//! column model the index table uses.

use campusdesk_business::{CurrentUser, Entity, FetchRecord, RecordCache, Route};
use campusdesk_states::{QueryStatus, Updater};
use egui::{Response, Ui};

use crate::state::AppState;
use crate::utils::colors::COLOR_RED;
use crate::widgets::table::{ColumnDef, ColumnKind};

pub fn edit_page<E: Entity>(
    state: &mut AppState,
    ui: &mut Ui,
    id: &str,
    columns_for: impl Fn(Option<&CurrentUser>, &Updater) -> Vec<ColumnDef<E>>,
) -> Response {
    let updater = state.ctx.updater();

    // Fetch when the cache is idle or was last fetched for a different id.
    // A failed fetch stays put for its own id (Retry refires it) but never
    // blocks navigation to another record.
    let needs_fetch = match state.ctx.cached::<RecordCache<E>>() {
        None => true,
        Some(cache) => match cache.status {
            QueryStatus::Idle => true,
            _ => !cache.is_for(id),
        },
    };
    if needs_fetch {
        state.ctx.dispatch(FetchRecord::<E>::new(id));
    }

    ui.vertical(|ui| {
        ui.heading(format!("Edit {}", E::KIND.record_name()));

        if ui.button("Back").clicked() {
            updater.update::<Route>(|route| *route = Route::Index(E::KIND));
        }

        ui.add_space(4.0);

        match state.ctx.cached::<RecordCache<E>>() {
            Some(cache) if cache.is_for(id) => match &cache.status {
                QueryStatus::Success(record) => {
                    for column in columns_for(None, &updater) {
                        if let ColumnKind::Field(extract) = &column.kind {
                            ui.horizontal(|ui| {
                                ui.strong(format!("{}:", column.header));
                                ui.label(extract(record));
                            });
                        }
                    }
                }
                QueryStatus::Error(message) => {
                    ui.horizontal(|ui| {
                        ui.colored_label(COLOR_RED, message);
                        if ui.button("Retry").clicked() {
                            updater.dispatch(FetchRecord::<E>::new(id));
                        }
                    });
                }
                _ => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading...");
                    });
                }
            },
            _ => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading...");
                });
            }
        }
    })
    .response
}
