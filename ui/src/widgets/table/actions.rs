//! Button columns and the role-gated Edit/Delete pair.

use campusdesk_business::{DeleteRecord, Entity, Route};
use campusdesk_states::Updater;

use super::columns::{ButtonStyle, ColumnDef, ColumnKind};

/// Build a button column.
///
/// The accessor is synthesized as `{label}-button`, so an Edit button in row 3
/// of `ArticlesTable` is addressable as
/// `ArticlesTable-cell-row-3-col-Edit-button`.
pub fn button_column<R>(
    label: impl Into<String>,
    style: ButtonStyle,
    on_click: impl Fn(&R) + 'static,
) -> ColumnDef<R> {
    let label = label.into();
    ColumnDef {
        accessor: format!("{label}-button"),
        header: label,
        kind: ColumnKind::Button {
            style,
            on_click: Box::new(on_click),
        },
    }
}

/// Append the Edit and Delete action columns, in that order.
///
/// Callers gate this on the session's admin role; the columns themselves do
/// not check authorization. Edit navigates to `/{prefix}/edit/{id}` by
/// updating the [`Route`] state; Delete dispatches a [`DeleteRecord`] carrying
/// the row's designated identifier.
pub fn append_action_columns<E: Entity>(columns: &mut Vec<ColumnDef<E>>, updater: &Updater) {
    let edit_updater = updater.clone();
    columns.push(button_column(
        "Edit",
        ButtonStyle::Primary,
        move |row: &E| {
            let route = Route::edit(E::KIND, row.id_value());
            edit_updater.update::<Route>(move |current| *current = route);
        },
    ));

    let delete_updater = updater.clone();
    columns.push(button_column(
        "Delete",
        ButtonStyle::Danger,
        move |row: &E| {
            delete_updater.dispatch(DeleteRecord::<E>::new(row.id_value()));
        },
    ));
}
