//! Tiered format dispatch.
//!
//! Purely sequential with no backtracking: once a tier produces a
//! displayable result the later tiers never run. CSV-extension inputs are a
//! closed world: when the delimited path fails they drop straight to the
//! raw-text tier, never into the XML or JSON tiers.

use std::path::Path;

use crate::common::Result;
use crate::common::encoding::decode_text;
use crate::dispatch::outcome::ParseOutcome;
use crate::sheet::markup;
use crate::sheet::text::{TextConfig, build_workbook, resolve_header_row, tokenize};
use crate::tree;

/// Dispatch document bytes through the parsing tiers.
///
/// `file_name` supplies the extension used for CSV routing and the document
/// name recorded on a parsed workbook. Configuration arrives as a plain
/// argument; the dispatcher holds no global state.
pub fn dispatch(bytes: &[u8], file_name: &str, config: &TextConfig) -> ParseOutcome {
    if bytes.is_empty() {
        return ParseOutcome::Empty;
    }

    if has_extension(file_name, "csv") {
        if let Some(outcome) = delimited_tier(bytes, file_name, config) {
            return outcome;
        }
        return raw_text_tier(bytes);
    }

    if let Ok(workbook) = markup::parse(bytes, file_name)
        && workbook.total_cell_count() > 0
    {
        return ParseOutcome::Spreadsheet(workbook);
    }

    let items = tree::xml::to_display_items(bytes);
    if !items.is_empty() {
        return ParseOutcome::Tree {
            items,
            raw: bytes.to_vec(),
        };
    }

    if let Ok(value) = tree::json::to_tree(bytes) {
        let items = tree::display_items(&value);
        if !items.is_empty() {
            return ParseOutcome::Tree {
                items,
                raw: bytes.to_vec(),
            };
        }
    }

    raw_text_tier(bytes)
}

/// Dispatch a document read from the filesystem.
///
/// Directory paths short-circuit before any tier runs; IO failures surface
/// as errors rather than outcomes.
pub fn dispatch_path(path: impl AsRef<Path>, config: &TextConfig) -> Result<ParseOutcome> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(ParseOutcome::Directory);
    }

    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut outcome = dispatch(&bytes, &file_name, config);
    if let ParseOutcome::Spreadsheet(workbook) = &mut outcome {
        workbook.source = Some(path.to_path_buf());
    }
    Ok(outcome)
}

/// The delimited tier succeeds only with a nonzero-cell workbook; any other
/// result sends the caller to raw text.
fn delimited_tier(bytes: &[u8], file_name: &str, config: &TextConfig) -> Option<ParseOutcome> {
    let text = decode_text(bytes).ok()?;
    let tokens = tokenize(&text, config.delimiter_str());
    let has_header = resolve_header_row(&tokens.rows, config);
    let workbook = build_workbook(&tokens.rows, has_header, file_name).ok()?;
    (workbook.total_cell_count() > 0).then(|| ParseOutcome::Spreadsheet(workbook))
}

/// Terminal tier: a strict UTF-8 decode of the full buffer. Only a hard
/// decode failure is user-visible as an error.
fn raw_text_tier(bytes: &[u8]) -> ParseOutcome {
    match std::str::from_utf8(bytes) {
        Ok(text) => ParseOutcome::RawText(text.to_string()),
        Err(_) => ParseOutcome::Error(crate::common::Error::InputDecoding.to_string()),
    }
}

fn has_extension(file_name: &str, extension: &str) -> bool {
    Path::new(file_name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
