//! Loquat - tiered format detection and parsing for viewable documents
//!
//! This library takes raw document bytes (from a share sheet, a mail
//! attachment, a file picker) and turns them into one renderable result:
//! a spreadsheet grid, a collapsible tree, or plain text.
//!
//! # Supported Formats
//!
//! - **SpreadsheetML** - Microsoft's XML spreadsheet vocabulary (`.xml`, `.xls`)
//! - **Delimited text** - CSV, TSV, pipe/semicolon/custom delimiters
//! - **Generic XML** - any well-formed document, shown as a tree
//! - **JSON** - object or array roots, shown as a tree
//! - **Raw text** - the terminal fallback for everything else
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use loquat::dispatch::{ParseOutcome, dispatch_path};
//! use loquat::sheet::text::TextConfig;
//!
//! # fn main() -> loquat::Result<()> {
//! match dispatch_path("report.xml", &TextConfig::default())? {
//!     ParseOutcome::Spreadsheet(workbook) => {
//!         for sheet in &workbook.worksheets {
//!             println!("{}: {} rows", sheet.name, sheet.row_count());
//!         }
//!     }
//!     ParseOutcome::Tree { items, .. } => println!("{} top-level nodes", items.len()),
//!     ParseOutcome::RawText(text) => println!("{text}"),
//!     other => println!("{other:?}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! The dispatcher walks a fixed tier sequence with no backtracking:
//! delimited text for `.csv` inputs, otherwise SpreadsheetML, then generic
//! XML, then JSON, then raw text. A tier that produces nothing displayable
//! hands the unchanged bytes to the next one. Parsers are constructed fresh
//! per call and share no state; configuration travels as a plain argument.

/// Common types: errors, BOM handling, and the text decoding ladder
pub mod common;

/// Tiered dispatch to spreadsheet, tree, or raw-text display
pub mod dispatch;

/// Tabular parsing: delimited text and SpreadsheetML
pub mod sheet;

/// Generic XML/JSON tree decoding
pub mod tree;

// Re-export the most commonly used types at the crate root.
pub use common::{Error, Result};
pub use dispatch::{ParseOutcome, dispatch, dispatch_path};
pub use sheet::{Cell, DataType, Row, Workbook, Worksheet};
pub use tree::{DisplayItem, TreeValue};
