//! The tagged result handed to the presentation layer.

use crate::sheet::types::Workbook;
use crate::tree::display::DisplayItem;

/// Outcome of dispatching a document through the parsing tiers.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// The document parsed as a spreadsheet with at least one cell.
    Spreadsheet(Workbook),
    /// The document decoded as a generic XML or JSON tree. The raw bytes are
    /// retained so a raw view stays available after a successful decode.
    Tree {
        /// Flattened display items, ready to render
        items: Vec<DisplayItem>,
        /// Original document bytes
        raw: Vec<u8>,
    },
    /// Terminal fallback: the bytes decoded as plain UTF-8 text.
    RawText(String),
    /// The input was zero bytes long.
    Empty,
    /// The path referred to a directory, not a document.
    Directory,
    /// Nothing could display the input; carries a user-facing message.
    Error(String),
}

impl ParseOutcome {
    /// The parsed workbook, when the spreadsheet tier won.
    pub fn workbook(&self) -> Option<&Workbook> {
        match self {
            ParseOutcome::Spreadsheet(workbook) => Some(workbook),
            _ => None,
        }
    }

    /// The display items, when a tree tier won.
    pub fn tree_items(&self) -> Option<&[DisplayItem]> {
        match self {
            ParseOutcome::Tree { items, .. } => Some(items),
            _ => None,
        }
    }
}
