//! egui painter for the data table.

use egui::{Color32, RichText, Ui};

use super::columns::{ButtonStyle, ColumnDef, ColumnKind};
use crate::utils::colors::{COLOR_DANGER, COLOR_PRIMARY};

fn button_fill(style: ButtonStyle) -> Color32 {
    match style {
        ButtonStyle::Primary => COLOR_PRIMARY,
        ButtonStyle::Danger => COLOR_DANGER,
    }
}

/// Paint `rows` under `columns` as a striped grid.
///
/// Each cell is painted inside a `push_id` scope keyed by the same identifier
/// `build_grid` generates, so egui's widget ids line up with the documented
/// cell addresses. Button clicks invoke the column's callback with the row;
/// the table itself holds no state.
pub fn data_table<R>(ui: &mut Ui, table_id: &str, columns: &[ColumnDef<R>], rows: &[R]) {
    egui::Grid::new(table_id)
        .striped(true)
        .min_col_width(60.0)
        .show(ui, |ui| {
            for column in columns {
                ui.push_id(super::grid::header_id(table_id, &column.accessor), |ui| {
                    ui.strong(&column.header);
                });
            }
            ui.end_row();

            for (row_index, row) in rows.iter().enumerate() {
                for column in columns {
                    let id = super::grid::cell_id(table_id, row_index, &column.accessor);
                    ui.push_id(id, |ui| match &column.kind {
                        ColumnKind::Field(extract) => {
                            ui.label(extract(row));
                        }
                        ColumnKind::Button { style, on_click } => {
                            let text = RichText::new(&column.header).color(Color32::WHITE);
                            let button = egui::Button::new(text).fill(button_fill(*style));
                            if ui.add(button).clicked() {
                                on_click(row);
                            }
                        }
                    });
                }
                ui.end_row();
            }
        });
}
