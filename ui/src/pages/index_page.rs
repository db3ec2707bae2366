//! Generic index page: one entity family's records in a table.

use campusdesk_business::{
    CollectionCache, CurrentUser, Entity, FetchCollection, Route, SessionCache,
};
use campusdesk_states::Updater;
use egui::{Response, Ui};

use crate::state::AppState;
use crate::utils::colors::COLOR_RED;
use crate::widgets::table::{ColumnDef, data_table};

/// Render the index page for `E`, building columns through the entity's
/// adapter.
///
/// The collection is fetched on first view (cache idle); a successful delete
/// resets the cache to idle, so the next frame refetches. A failed fetch
/// stays cached and the error banner carries a Retry button.
pub fn index_page<E: Entity>(
    state: &mut AppState,
    ui: &mut Ui,
    columns_for: impl Fn(Option<&CurrentUser>, &Updater) -> Vec<ColumnDef<E>>,
) -> Response {
    let updater = state.ctx.updater();

    if state
        .ctx
        .cached::<CollectionCache<E>>()
        .is_none_or(|cache| cache.status.is_idle())
    {
        state.ctx.dispatch(FetchCollection::<E>::new());
    }

    ui.vertical(|ui| {
        ui.heading(E::KIND.title());

        let user = state.ctx.cached::<SessionCache>().and_then(|s| s.user());

        if user.is_some_and(CurrentUser::is_admin)
            && ui
                .button(format!("Create {}", E::KIND.record_name()))
                .clicked()
        {
            updater.update::<Route>(|route| *route = Route::Create(E::KIND));
        }

        ui.add_space(4.0);

        match state.ctx.cached::<CollectionCache<E>>() {
            Some(cache) if cache.status.is_pending() => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading...");
                });
            }
            Some(cache) => {
                if let Some(message) = cache.status.error_message() {
                    ui.horizontal(|ui| {
                        ui.colored_label(COLOR_RED, message);
                        if ui.button("Retry").clicked() {
                            updater.dispatch(FetchCollection::<E>::new());
                        }
                    });
                }
                let rows = cache.rows().unwrap_or(&[]);
                let columns = columns_for(user, &updater);
                data_table(ui, E::KIND.table_id(), &columns, rows);
            }
            None => {
                ui.colored_label(COLOR_RED, "Collection cache is not registered");
            }
        }
    })
    .response
}

#[cfg(test)]
mod index_page_test {
    use campusdesk_business::{CollectionCache, Organization, fixtures};
    use campusdesk_states::QueryStatus;
    use egui_kittest::Harness;
    use kittest::Queryable;

    use crate::state::AppState;
    use crate::widgets::tables::organization_columns;

    fn state_with_rows() -> AppState {
        let mut state = AppState::test("http://127.0.0.1:1".to_owned());
        state
            .ctx
            .updater()
            .set(CollectionCache::success(fixtures::three_organizations()));
        state.ctx.sync();
        state
    }

    #[test]
    fn test_index_page_shows_fetched_rows() {
        let state = state_with_rows();

        let harness = Harness::new_ui_state(
            |ui, state| {
                super::index_page(state, ui, organization_columns);
            },
            state,
        );

        assert!(harness.query_by_label_contains("Organizations").is_some());
        assert!(harness.query_by_label_contains("Assoc Students").is_some());
        assert!(harness.query_by_label_contains("AS Bike Shop").is_some());
    }

    #[test]
    fn test_index_page_retry_refetches_after_an_error() {
        let mut state = AppState::test("http://127.0.0.1:1".to_owned());
        state.ctx.updater().set(CollectionCache::<Organization> {
            status: QueryStatus::Error("API returned status: 500".to_owned()),
        });
        state.ctx.sync();

        let mut harness = Harness::new_ui_state(
            |ui, state| {
                state.ctx.sync();
                super::index_page(state, ui, organization_columns);
            },
            state,
        );

        assert!(
            harness
                .query_by_label_contains("API returned status: 500")
                .is_some()
        );

        harness.get_by_label("Retry").click();
        harness.step();
        harness.step();

        // The fresh fetch is pending, or already failed against the
        // unreachable test address. Either way the seeded error is gone.
        let cache = harness
            .state()
            .ctx
            .cached::<CollectionCache<Organization>>()
            .unwrap();
        match &cache.status {
            QueryStatus::Pending => {}
            QueryStatus::Error(message) => assert_ne!(message, "API returned status: 500"),
            other => panic!("Retry should dispatch a fresh fetch, got {other:?}"),
        }
    }

    #[test]
    fn test_index_page_hides_create_button_for_anonymous() {
        let state = state_with_rows();

        let harness = Harness::new_ui_state(
            |ui, state| {
                super::index_page(state, ui, organization_columns);
            },
            state,
        );

        assert!(
            harness
                .query_by_label_contains("Create Organization")
                .is_none(),
            "Create button should be admin-only"
        );
    }
}
