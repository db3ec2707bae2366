use campusdesk_business::{BackendAvailability, BackendStatus, version_info};
use campusdesk_states::StateCtx;
use egui::{Color32, Response, Ui};

use crate::utils::colors::{COLOR_AMBER, COLOR_GREEN, COLOR_RED};

/// Radius of the status indicator circle (in pixels)
const STATUS_DOT_RADIUS: f32 = 5.0;

/// Cached UI version string to avoid repeated computation
fn ui_version() -> &'static str {
    use std::sync::OnceLock;
    static UI_VERSION: OnceLock<String> = OnceLock::new();
    UI_VERSION.get_or_init(version_info::format_env_version)
}

fn format_tooltip(status: &str) -> String {
    format!("UI: {}\nBackend: {status}", ui_version())
}

/// Renders a single status dot with tooltip using a drawn circle
fn status_dot(ui: &mut Ui, tooltip_text: String, dot_color: Color32) -> Response {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(STATUS_DOT_RADIUS * 2.0, STATUS_DOT_RADIUS * 2.0),
        egui::Sense::hover(),
    );

    let center = rect.center();
    ui.painter()
        .circle(center, STATUS_DOT_RADIUS, dot_color, egui::Stroke::NONE);

    response.on_hover_text(tooltip_text)
}

fn status_info(state_ctx: &StateCtx) -> (String, Color32) {
    match state_ctx
        .cached::<BackendStatus>()
        .map(|status| &status.availability)
    {
        Some(BackendAvailability::Available { commit }) => {
            let commit = commit.as_deref().unwrap_or("unknown");
            (format_tooltip(&format!("up ({commit})")), COLOR_GREEN)
        }
        Some(BackendAvailability::Unavailable { error }) => {
            (format_tooltip(&format!("down ({error})")), COLOR_RED)
        }
        _ => (format_tooltip("checking"), COLOR_AMBER),
    }
}

/// Displays the backend reachability indicator.
///
/// The dot's tooltip shows the UI version and, when the backend is up, the
/// backend's reported commit.
pub fn backend_status(state_ctx: &StateCtx, ui: &mut Ui) -> Response {
    let (tooltip, color) = status_info(state_ctx);
    status_dot(ui, tooltip, color)
}

#[cfg(test)]
mod backend_status_widget_test {
    use campusdesk_business::BusinessConfig;

    use super::*;

    #[test]
    fn test_status_info_tracks_availability() {
        let mut ctx = StateCtx::new();
        ctx.add_state(BusinessConfig::new("http://127.0.0.1:1"));
        ctx.register_compute::<BackendStatus>();

        let (tooltip, color) = status_info(&ctx);
        assert!(tooltip.contains("checking"));
        assert_eq!(color, COLOR_AMBER);

        ctx.updater().set(BackendStatus {
            availability: BackendAvailability::Available {
                commit: Some("abc1234".to_owned()),
            },
        });
        ctx.sync();

        let (tooltip, color) = status_info(&ctx);
        assert!(tooltip.contains("abc1234"));
        assert_eq!(color, COLOR_GREEN);
    }
}
