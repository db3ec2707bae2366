use campusdesk_business::{
    Article, DiningCommonsMenuItem, EntityKind, FetchCurrentUser, HelpRequest, MenuItemReview,
    Organization, PingBackend, RecommendationRequest, Route,
};
use egui::Ui;

use crate::{pages, state::AppState, widgets};

pub struct CampusDeskApp {
    state: AppState,
}

impl CampusDeskApp {
    /// Called once before the first frame.
    pub fn new(state: AppState) -> Self {
        // Startup queries; applied on the first sync.
        state.ctx.dispatch(FetchCurrentUser);
        state.ctx.dispatch(PingBackend);

        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    fn route_page(&mut self, ui: &mut Ui) {
        // Clone so render code is free to update the route through the channel.
        let route = self.state.ctx.state::<Route>().clone();
        let state = &mut self.state;

        match route {
            Route::Home => {
                pages::home_page(state, ui);
            }
            Route::Index(kind) => index_for(state, ui, kind),
            Route::Create(kind) => {
                pages::create_page(state, ui, kind);
            }
            Route::Edit(kind, id) => edit_for(state, ui, kind, &id),
        }
    }
}

fn index_for(state: &mut AppState, ui: &mut Ui, kind: EntityKind) {
    match kind {
        EntityKind::Articles => {
            pages::index_page::<Article>(state, ui, widgets::tables::article_columns);
        }
        EntityKind::HelpRequests => {
            pages::index_page::<HelpRequest>(state, ui, widgets::tables::help_request_columns);
        }
        EntityKind::MenuItemReviews => {
            pages::index_page::<MenuItemReview>(
                state,
                ui,
                widgets::tables::menu_item_review_columns,
            );
        }
        EntityKind::RecommendationRequests => {
            pages::index_page::<RecommendationRequest>(
                state,
                ui,
                widgets::tables::recommendation_request_columns,
            );
        }
        EntityKind::DiningCommonsMenuItems => {
            pages::index_page::<DiningCommonsMenuItem>(
                state,
                ui,
                widgets::tables::dining_commons_menu_item_columns,
            );
        }
        EntityKind::Organizations => {
            pages::index_page::<Organization>(state, ui, widgets::tables::organization_columns);
        }
    }
}

fn edit_for(state: &mut AppState, ui: &mut Ui, kind: EntityKind, id: &str) {
    match kind {
        EntityKind::Articles => {
            pages::edit_page::<Article>(state, ui, id, widgets::tables::article_columns);
        }
        EntityKind::HelpRequests => {
            pages::edit_page::<HelpRequest>(state, ui, id, widgets::tables::help_request_columns);
        }
        EntityKind::MenuItemReviews => {
            pages::edit_page::<MenuItemReview>(
                state,
                ui,
                id,
                widgets::tables::menu_item_review_columns,
            );
        }
        EntityKind::RecommendationRequests => {
            pages::edit_page::<RecommendationRequest>(
                state,
                ui,
                id,
                widgets::tables::recommendation_request_columns,
            );
        }
        EntityKind::DiningCommonsMenuItems => {
            pages::edit_page::<DiningCommonsMenuItem>(
                state,
                ui,
                id,
                widgets::tables::dining_commons_menu_item_columns,
            );
        }
        EntityKind::Organizations => {
            pages::edit_page::<Organization>(state, ui, id, widgets::tables::organization_columns);
        }
    }
}

impl eframe::App for CampusDeskApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply queued updates and run dispatched commands before rendering.
        self.state.ctx.sync();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                if ui.button("Home").clicked() {
                    self.state
                        .ctx
                        .updater()
                        .update::<Route>(|route| *route = Route::Home);
                }
                widgets::backend_status(&self.state.ctx, ui);
                widgets::version_badge(ui);
            });
        });

        egui::TopBottomPanel::bottom("notice_panel").show(ctx, |ui| {
            widgets::notice_bar(&self.state.ctx, ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.route_page(ui);
        });
    }
}
