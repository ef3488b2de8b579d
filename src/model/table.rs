//! Table types.

use super::{Paragraph, StructuralElement};
use serde::{Deserialize, Serialize};

/// A table structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Table {
    /// Declared row count
    pub rows: u32,

    /// Declared column count
    pub columns: u32,

    /// Rows in the table
    pub table_rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.columns = self.columns.max(row.table_cells.len() as u32);
        self.table_rows.push(row);
        self.rows = self.table_rows.len() as u32;
    }

    /// Builder variant of [`Table::add_row`].
    pub fn with_row(mut self, row: TableRow) -> Self {
        self.add_row(row);
        self
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.table_rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.table_rows.is_empty()
    }
}

/// A table row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableRow {
    /// Cells in the row
    pub table_cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { table_cells: cells }
    }

    /// Create a row of single-paragraph text cells.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }
}

/// A table cell. Its content is a nested body: paragraphs, lists, even tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableCell {
    /// Structural elements inside the cell
    pub content: Vec<StructuralElement>,
}

impl TableCell {
    /// Create a cell holding one plain paragraph.
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_paragraph(Paragraph::with_text(text))
    }

    /// Create a cell holding one paragraph.
    pub fn with_paragraph(paragraph: Paragraph) -> Self {
        Self {
            content: vec![StructuralElement::paragraph(paragraph)],
        }
    }

    /// Append a structural element.
    pub fn add_element(&mut self, element: StructuralElement) {
        self.content.push(element);
    }
}
