//! Tiered format dispatch.
//!
//! The decision procedure that routes a document to spreadsheet, tree, or
//! raw-text display: CSV extensions take the delimited path, everything else
//! tries SpreadsheetML, then generic XML, then JSON, then raw text. Each
//! tier's failure is recoverable and simply advances to the next; only a
//! hard decode failure at the terminal tier is surfaced as an error.
//!
//! # Example
//!
//! ```rust
//! use loquat::dispatch::{ParseOutcome, dispatch};
//! use loquat::sheet::text::TextConfig;
//!
//! let outcome = dispatch(b"<root><a>1</a></root>", "data.xml", &TextConfig::default());
//! assert!(matches!(outcome, ParseOutcome::Tree { .. }));
//! ```

// Submodule declarations
pub mod dispatcher;
pub mod outcome;

// Re-exports
pub use dispatcher::{dispatch, dispatch_path};
pub use outcome::ParseOutcome;
