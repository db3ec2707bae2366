//! Column definitions for the generic data table.

/// Visual style tag for button columns.
///
/// Destructive actions are rendered visually distinct from navigation, and
/// tests assert on this tag rather than on pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Danger,
}

/// How a column turns a row into a cell.
pub enum ColumnKind<R> {
    /// Display a value extracted from the row.
    Field(Box<dyn Fn(&R) -> String>),
    /// Display a clickable button; the callback receives the clicked row.
    Button {
        style: ButtonStyle,
        on_click: Box<dyn Fn(&R)>,
    },
}

/// One column of a table: a header label, a stable accessor used in generated
/// cell identifiers, and a kind.
pub struct ColumnDef<R> {
    pub header: String,
    pub accessor: String,
    pub kind: ColumnKind<R>,
}

impl<R> ColumnDef<R> {
    /// A plain data column.
    pub fn field(
        header: impl Into<String>,
        accessor: impl Into<String>,
        extract: impl Fn(&R) -> String + 'static,
    ) -> Self {
        Self {
            header: header.into(),
            accessor: accessor.into(),
            kind: ColumnKind::Field(Box::new(extract)),
        }
    }

    /// A boolean column rendered as `"Yes"` / `"No"`.
    pub fn yes_no(
        header: impl Into<String>,
        accessor: impl Into<String>,
        extract: impl Fn(&R) -> bool + 'static,
    ) -> Self {
        Self::field(header, accessor, move |row| {
            if extract(row) { "Yes" } else { "No" }.to_owned()
        })
    }

    pub fn is_button(&self) -> bool {
        matches!(self.kind, ColumnKind::Button { .. })
    }

    pub fn button_style(&self) -> Option<ButtonStyle> {
        match self.kind {
            ColumnKind::Button { style, .. } => Some(style),
            ColumnKind::Field(_) => None,
        }
    }
}
