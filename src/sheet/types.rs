//! Core value types for tabular documents.
//!
//! Workbooks are value-semantics aggregates constructed once per parse and
//! handed wholesale to the caller; nothing here is mutated after
//! finalization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Types of data that can be stored in a cell.
///
/// `String` is the default; parsers downgrade to it whenever a richer
/// interpretation fails to parse cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DataType {
    /// Plain text
    #[default]
    String,
    /// Numeric value
    Number,
    /// Date/time value
    DateTime,
    /// Boolean value
    Boolean,
    /// Error value
    Error,
}

impl DataType {
    /// Map a markup `Type` attribute value to a data type.
    ///
    /// Unknown tags map to `String` rather than erroring.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "String" => DataType::String,
            "Number" => DataType::Number,
            "DateTime" => DataType::DateTime,
            "Boolean" => DataType::Boolean,
            "Error" => DataType::Error,
            _ => DataType::String,
        }
    }
}

/// An individual cell in a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Zero-based column index
    pub column_index: usize,
    /// Raw decoded text of the cell
    pub value: String,
    /// Data type tag assigned at parse time
    pub data_type: DataType,
    /// Formula attribute, when present in the source markup
    pub formula: Option<String>,
    /// Style identifier, when present in the source markup
    pub style_id: Option<String>,
    /// Horizontal merge span count (0 = no merge)
    pub merge_across: usize,
    /// Vertical merge span count (0 = no merge)
    pub merge_down: usize,
}

impl Cell {
    /// Create a new cell with a value and data type.
    pub fn new(column_index: usize, value: String, data_type: DataType) -> Self {
        Cell {
            column_index,
            value,
            data_type,
            formula: None,
            style_id: None,
            merge_across: 0,
            merge_down: 0,
        }
    }

    /// Create an empty string cell, used when synthesizing sparse positions.
    pub fn empty(column_index: usize) -> Self {
        Self::new(column_index, String::new(), DataType::String)
    }

    /// Derive the display text from the stored value and type.
    ///
    /// Pure function of `(value, data_type)`; re-deriving from the same pair
    /// is idempotent.
    pub fn display_value(&self) -> String {
        match self.data_type {
            DataType::Number | DataType::DateTime => self.value.trim().to_string(),
            DataType::Boolean => {
                let trimmed = self.value.trim();
                if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
                    "true".to_string()
                } else if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
                    "false".to_string()
                } else {
                    trimmed.to_string()
                }
            }
            DataType::String | DataType::Error => self.value.clone(),
        }
    }

    /// Render the cell position as an Excel-style coordinate (column `0`,
    /// row `0` becomes `A1`).
    pub fn coordinate(&self, row_index: usize) -> String {
        let mut col_str = String::new();
        let mut col = self.column_index + 1;

        while col > 0 {
            col -= 1;
            let c = (b'A' + (col % 26) as u8) as char;
            col_str.insert(0, c);
            col /= 26;
        }

        format!("{}{}", col_str, row_index + 1)
    }
}

/// A single row of cells.
///
/// Rows may be sparse: a cell need not exist for every column index up to the
/// worksheet's column count. Missing positions are synthesized as empty cells
/// at render time via [`Row::materialized_cells`], never omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Zero-based row index
    pub row_index: usize,
    /// Cells present in the source, in document order
    pub cells: Vec<Cell>,
    /// Display height, when the source specifies one
    pub height: Option<f64>,
    /// Whether the source marks the row hidden
    pub hidden: bool,
}

impl Row {
    /// Create an empty row at the given index.
    pub fn new(row_index: usize) -> Self {
        Row {
            row_index,
            cells: Vec::new(),
            height: None,
            hidden: false,
        }
    }

    /// Look up the cell at a logical column position, if present.
    pub fn cell_at(&self, column_index: usize) -> Option<&Cell> {
        self.cells.iter().find(|c| c.column_index == column_index)
    }

    /// Produce the full logical cell sequence for rendering, synthesizing an
    /// empty cell for every column position the source left out.
    pub fn materialized_cells(&self, column_count: usize) -> Vec<Cell> {
        (0..column_count)
            .map(|col| match self.cell_at(col) {
                Some(cell) => cell.clone(),
                None => Cell::empty(col),
            })
            .collect()
    }
}

/// A named sheet of rows with cached dimensions.
///
/// Built incrementally during parsing (rows appended as they complete), then
/// finalized when the sheet's closing boundary is reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worksheet {
    /// Worksheet name
    pub name: String,
    /// Rows in document order
    pub rows: Vec<Row>,
    row_count: usize,
    column_count: usize,
}

impl Worksheet {
    /// Create an empty in-progress worksheet.
    pub fn new(name: impl Into<String>) -> Self {
        Worksheet {
            name: name.into(),
            rows: Vec::new(),
            row_count: 0,
            column_count: 0,
        }
    }

    /// Append a completed row.
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Compute the cached dimensions at the sheet's closing boundary.
    ///
    /// `row_count` is one past the last row index seen; `column_count` is one
    /// past the maximum cell column index seen anywhere in the sheet, which
    /// may exceed any individual row's local width.
    pub fn finalize(&mut self) {
        self.row_count = self.rows.last().map(|r| r.row_index + 1).unwrap_or(0);
        self.column_count = self
            .rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .map(|c| c.column_index + 1)
            .max()
            .unwrap_or(0);
    }

    /// Number of rows, as computed at finalization.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns, as computed at finalization.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Total number of cells present in the source.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).sum()
    }

    /// Extract the sheet as plain text: tab-separated display values, one
    /// line per row, sparse positions included as empty fields.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let fields: Vec<String> = row
                .materialized_cells(self.column_count)
                .iter()
                .map(Cell::display_value)
                .collect();
            out.push_str(&fields.join("\t"));
            out.push('\n');
        }
        out
    }
}

/// A parsed tabular document: an ordered sequence of worksheets plus source
/// bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    /// Document name (source file name with its extension stripped)
    pub name: String,
    /// Path the document was read from, when known
    pub source: Option<PathBuf>,
    /// Worksheets in document order
    pub worksheets: Vec<Worksheet>,
    /// Whether row 0 of the first sheet was detected or forced as a header.
    /// The row itself is still materialized as data; this flag is
    /// presentation-side bookkeeping only.
    pub header_row: bool,
    /// Creation timestamp of this parse result
    pub created_at: DateTime<Utc>,
}

impl Workbook {
    /// Create an empty workbook.
    pub fn new(name: impl Into<String>) -> Self {
        Workbook {
            name: name.into(),
            source: None,
            worksheets: Vec::new(),
            header_row: false,
            created_at: Utc::now(),
        }
    }

    /// Sum of cell counts across all worksheets.
    pub fn total_cell_count(&self) -> usize {
        self.worksheets.iter().map(Worksheet::cell_count).sum()
    }

    /// True when every worksheet has zero rows, or every row has zero cells.
    pub fn is_empty(&self) -> bool {
        self.worksheets
            .iter()
            .all(|ws| ws.rows.is_empty() || ws.rows.iter().all(|r| r.cells.is_empty()))
    }

    /// Names of all worksheets, in order.
    pub fn worksheet_names(&self) -> Vec<String> {
        self.worksheets.iter().map(|ws| ws.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_conversion() {
        let cell = Cell::new(0, "test".to_string(), DataType::String);
        assert_eq!(cell.coordinate(0), "A1");

        let cell = Cell::empty(4);
        assert_eq!(cell.coordinate(9), "E10");

        let cell = Cell::empty(26); // AA
        assert_eq!(cell.coordinate(99), "AA100");
    }

    #[test]
    fn test_display_value_idempotent() {
        let cell = Cell::new(0, "  42.5 ".to_string(), DataType::Number);
        let first = cell.display_value();
        assert_eq!(first, "42.5");
        assert_eq!(cell.display_value(), first);
    }

    #[test]
    fn test_display_value_boolean_canonicalized() {
        let cell = Cell::new(0, "TRUE".to_string(), DataType::Boolean);
        assert_eq!(cell.display_value(), "true");
    }

    #[test]
    fn test_sparse_row_materialization() {
        let mut row = Row::new(2);
        row.cells.push(Cell::new(0, "a".to_string(), DataType::String));
        row.cells.push(Cell::new(3, "d".to_string(), DataType::String));

        let cells = row.materialized_cells(4);
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0].value, "a");
        assert_eq!(cells[1].value, "");
        assert_eq!(cells[2].value, "");
        assert_eq!(cells[3].value, "d");
    }

    #[test]
    fn test_worksheet_counts_track_sparse_columns() {
        let mut ws = Worksheet::new("data");
        let mut row = Row::new(0);
        row.cells.push(Cell::new(7, "x".to_string(), DataType::String));
        ws.push_row(row);
        ws.finalize();

        assert_eq!(ws.row_count(), 1);
        assert_eq!(ws.column_count(), 8);
        assert_eq!(ws.cell_count(), 1);
    }

    #[test]
    fn test_workbook_emptiness() {
        let mut workbook = Workbook::new("empty");
        assert!(workbook.is_empty());
        assert_eq!(workbook.total_cell_count(), 0);

        let mut ws = Worksheet::new("s");
        ws.push_row(Row::new(0));
        ws.finalize();
        workbook.worksheets.push(ws);
        assert!(workbook.is_empty());

        let mut ws = Worksheet::new("t");
        let mut row = Row::new(0);
        row.cells.push(Cell::new(0, "v".to_string(), DataType::String));
        ws.push_row(row);
        ws.finalize();
        workbook.worksheets.push(ws);
        assert!(!workbook.is_empty());
        assert_eq!(workbook.total_cell_count(), 1);
    }
}
