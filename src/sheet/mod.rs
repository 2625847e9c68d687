//! Tabular document parsing.
//!
//! Two paths produce the same workbook structure: delimited text (CSV, TSV,
//! custom delimiters) and SpreadsheetML-flavored XML. Cell data types are
//! assigned by a shared inference ladder, and header detection is a
//! heuristic the caller can force or disable.
//!
//! # Quick Start
//!
//! ```rust
//! use loquat::sheet::markup;
//!
//! let xml = r#"<Workbook><Worksheet ss:Name="Data"><Table>
//!   <Row><Cell><Data ss:Type="Number">42</Data></Cell></Row>
//! </Table></Worksheet></Workbook>"#;
//!
//! let workbook = markup::parse(xml.as_bytes(), "data.xml")?;
//! assert_eq!(workbook.total_cell_count(), 1);
//! assert_eq!(workbook.worksheets[0].name, "Data");
//! # Ok::<(), loquat::Error>(())
//! ```

// Submodule declarations
pub mod header;
pub mod infer;
pub mod markup;
pub mod text;
pub mod types;

// Re-exports
pub use header::detect_header_row;
pub use infer::infer_data_type;
pub use types::{Cell, DataType, Row, Workbook, Worksheet};
