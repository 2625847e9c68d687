//! Delimited text support (CSV, TSV, and custom delimiters).
//!
//! This module turns raw text into a single-worksheet workbook: the
//! tokenizer produces rows of fields, the header heuristic decides whether
//! row 0 is a label row, and the builder assembles typed cells.
//!
//! # Example
//!
//! ```rust
//! use loquat::sheet::text::{TextConfig, build_workbook, resolve_header_row, tokenize};
//!
//! let config = TextConfig::new();
//! let tokens = tokenize("Name,Age\nBob,30", config.delimiter_str());
//! let has_header = resolve_header_row(&tokens.rows, &config);
//! let workbook = build_workbook(&tokens.rows, has_header, "people.csv")?;
//! assert_eq!(workbook.worksheets[0].row_count(), 2);
//! # Ok::<(), loquat::Error>(())
//! ```

// Submodule declarations
pub mod builder;
pub mod config;
pub mod tokenizer;

// Re-exports
pub use builder::{build_workbook, resolve_header_row};
pub use config::{DelimiterKind, TextConfig};
pub use tokenizer::{TokenizedText, tokenize};
