use campusdesk_business::{NoticeLevel, Notices};
use campusdesk_states::StateCtx;
use egui::Ui;

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};

/// Displays the most recent notices, newest last, with a Clear button.
///
/// Delete confirmations ("Organization with id AS deleted") and failures
/// surface here.
pub fn notice_bar(state_ctx: &StateCtx, ui: &mut Ui) {
    let notices = state_ctx.state::<Notices>();
    if notices.is_empty() {
        return;
    }

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            for notice in notices.iter() {
                let color = match notice.level {
                    NoticeLevel::Info => COLOR_GREEN,
                    NoticeLevel::Error => COLOR_RED,
                };
                ui.colored_label(color, &notice.text);
            }
        });

        if ui.button("Clear").clicked() {
            state_ctx
                .updater()
                .update::<Notices>(|notices| notices.clear());
        }
    });
}
