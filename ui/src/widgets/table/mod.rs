//! The generic data table.
//!
//! This module is split into focused components:
//! - `columns`: the declarative column model (`ColumnDef`)
//! - `actions`: the button-column factory and role-gated Edit/Delete columns
//! - `grid`: the pure renderer producing addressable cell identifiers
//! - `widget`: the egui painter consuming a column model and rows

mod actions;
mod columns;
mod grid;
mod widget;

pub use actions::{append_action_columns, button_column};
pub use columns::{ButtonStyle, ColumnDef, ColumnKind};
pub use grid::{BodyCell, CellContent, HeaderCell, RenderedGrid, build_grid};
pub use widget::data_table;
