//! Pure grid construction.
//!
//! `build_grid` turns a column model and a row slice into a value the egui
//! painter and the tests both consume. Every header and cell carries a
//! predictable identifier; downstream tests assert on these literally, so the
//! formats are part of the public contract:
//!
//! - header: `{table_id}-header-{accessor}`
//! - cell:   `{table_id}-cell-row-{row_index}-col-{accessor}` (zero-based)

use super::columns::{ButtonStyle, ColumnDef, ColumnKind};

/// A rendered header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub id: String,
    pub label: String,
}

/// What a body cell displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    Text(String),
    Button { label: String, style: ButtonStyle },
}

/// A rendered body cell, addressable by its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyCell {
    pub id: String,
    pub content: CellContent,
}

/// The structured output of [`build_grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGrid {
    pub table_id: String,
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<Vec<BodyCell>>,
}

impl RenderedGrid {
    /// Look up a body cell by its identifier.
    pub fn cell(&self, id: &str) -> Option<&BodyCell> {
        self.rows.iter().flatten().find(|cell| cell.id == id)
    }

    /// The displayed text of a cell, if it is a text cell.
    pub fn cell_text(&self, id: &str) -> Option<&str> {
        match self.cell(id)?.content {
            CellContent::Text(ref text) => Some(text),
            CellContent::Button { .. } => None,
        }
    }
}

pub fn cell_id(table_id: &str, row_index: usize, accessor: &str) -> String {
    format!("{table_id}-cell-row-{row_index}-col-{accessor}")
}

pub fn header_id(table_id: &str, accessor: &str) -> String {
    format!("{table_id}-header-{accessor}")
}

/// Build the grid for `rows` under `columns`.
///
/// Empty rows render headers only. Identifiers are stable across re-renders
/// as long as row order is stable.
pub fn build_grid<R>(table_id: &str, columns: &[ColumnDef<R>], rows: &[R]) -> RenderedGrid {
    let headers = columns
        .iter()
        .map(|column| HeaderCell {
            id: header_id(table_id, &column.accessor),
            label: column.header.clone(),
        })
        .collect();

    let rows = rows
        .iter()
        .enumerate()
        .map(|(row_index, row)| {
            columns
                .iter()
                .map(|column| BodyCell {
                    id: cell_id(table_id, row_index, &column.accessor),
                    content: match &column.kind {
                        ColumnKind::Field(extract) => CellContent::Text(extract(row)),
                        ColumnKind::Button { style, .. } => CellContent::Button {
                            label: column.header.clone(),
                            style: *style,
                        },
                    },
                })
                .collect()
        })
        .collect();

    RenderedGrid {
        table_id: table_id.to_owned(),
        headers,
        rows,
    }
}

#[cfg(test)]
mod grid_tests {
    use campusdesk_business::{Organization, fixtures};

    use super::*;

    fn organization_columns() -> Vec<ColumnDef<Organization>> {
        vec![
            ColumnDef::field("Org Code", "orgCode", |org: &Organization| {
                org.org_code.clone()
            }),
            ColumnDef::yes_no("Inactive", "inactive", |org: &Organization| org.inactive),
        ]
    }

    #[test]
    fn test_grid_has_one_header_per_column_and_one_row_per_record() {
        let grid = build_grid(
            "OrganizationTable",
            &organization_columns(),
            &fixtures::three_organizations(),
        );

        assert_eq!(grid.headers.len(), 2);
        assert_eq!(grid.rows.len(), 3);
        assert_eq!(grid.headers[0].id, "OrganizationTable-header-orgCode");
        assert_eq!(grid.headers[0].label, "Org Code");
        assert_eq!(
            grid.cell_text("OrganizationTable-cell-row-0-col-orgCode"),
            Some("AS")
        );
    }

    #[test]
    fn test_boolean_cells_render_yes_no() {
        let grid = build_grid(
            "OrganizationTable",
            &organization_columns(),
            &fixtures::three_organizations(),
        );

        // ASBS is the inactive fixture.
        assert_eq!(
            grid.cell_text("OrganizationTable-cell-row-1-col-inactive"),
            Some("Yes")
        );
        assert_eq!(
            grid.cell_text("OrganizationTable-cell-row-0-col-inactive"),
            Some("No")
        );
    }

    #[test]
    fn test_empty_rows_render_headers_only() {
        let grid = build_grid("OrganizationTable", &organization_columns(), &[]);

        assert_eq!(grid.headers.len(), 2);
        assert!(grid.rows.is_empty());
        assert!(grid.cell("OrganizationTable-cell-row-0-col-orgCode").is_none());
    }

    #[test]
    fn test_rendering_twice_is_identical() {
        let columns = organization_columns();
        let rows = fixtures::three_organizations();

        let first = build_grid("OrganizationTable", &columns, &rows);
        let second = build_grid("OrganizationTable", &columns, &rows);
        assert_eq!(first, second);
    }
}
