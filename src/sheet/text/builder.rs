//! Assembly of tokenized rows into a workbook.

use crate::common::{Error, Result};
use crate::sheet::header::detect_header_row;
use crate::sheet::infer::infer_data_type;
use crate::sheet::text::config::TextConfig;
use crate::sheet::types::{Cell, Row, Workbook, Worksheet};

/// Resolve whether row 0 should be recorded as a header.
///
/// The explicit force flag wins; otherwise the heuristic runs only when
/// auto-detection is enabled.
pub fn resolve_header_row(rows: &[Vec<String>], config: &TextConfig) -> bool {
    if config.force_header_row {
        return true;
    }
    if config.auto_detect_headers {
        return detect_header_row(rows);
    }
    false
}

/// Build a single-worksheet workbook from tokenized rows.
///
/// Every row is materialized as data, including a detected header row; the
/// header outcome is recorded on the workbook for presentation-side use
/// only. Fails with [`Error::EmptyDocument`] when no rows were emitted.
pub fn build_workbook(rows: &[Vec<String>], has_header: bool, source_name: &str) -> Result<Workbook> {
    if rows.is_empty() {
        return Err(Error::EmptyDocument);
    }

    let stem = file_stem(source_name);
    let mut worksheet = Worksheet::new(stem);

    for (row_index, fields) in rows.iter().enumerate() {
        let mut row = Row::new(row_index);
        for (column_index, field) in fields.iter().enumerate() {
            row.cells.push(Cell::new(
                column_index,
                field.clone(),
                infer_data_type(field),
            ));
        }
        worksheet.push_row(row);
    }
    worksheet.finalize();

    let mut workbook = Workbook::new(stem);
    workbook.header_row = has_header;
    workbook.worksheets.push(worksheet);
    Ok(workbook)
}

/// Source file name with its final extension stripped.
fn file_stem(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}
