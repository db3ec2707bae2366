use campusdesk_business::version_info;
use egui::{Color32, Response, Ui};

/// Displays the current environment and version/info in the UI.
///
/// Display format varies by environment:
/// - Prod (stable): `stable:{version}`
/// - Test: `test:{commit}`
pub fn version_badge(ui: &mut Ui) -> Response {
    let display_text = version_info::format_env_version();
    let (env_name, _) = version_info::env_version_info();

    let color = match env_name {
        "stable" => Color32::GREEN,
        "test" => Color32::from_rgb(200, 200, 200), // Light gray
        _ => Color32::WHITE,
    };

    ui.colored_label(color, display_text)
}
