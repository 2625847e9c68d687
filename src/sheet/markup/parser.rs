//! Event-driven parser for SpreadsheetML-flavored XML.
//!
//! Drives a quick-xml pull loop over the fixed `Workbook` / `Worksheet` /
//! `Table` / `Row` / `Cell` / `Data` vocabulary. The nesting flags and the
//! running row/column counters are the whole state machine; explicit 1-based
//! `Index` attributes override the counters, which is how sparse rows and
//! columns are expressed in the source format.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::common::{Error, Result};
use crate::sheet::infer::infer_data_type;
use crate::sheet::markup::repair::repair_document;
use crate::sheet::types::{Cell, DataType, Row, Workbook, Worksheet};

/// Parse SpreadsheetML bytes into a workbook.
///
/// A structurally valid document with zero cells parses successfully; the
/// caller decides whether an empty workbook counts as a failure.
pub fn parse(bytes: &[u8], source_name: &str) -> Result<Workbook> {
    let repaired = repair_document(bytes);
    let mut reader = Reader::from_reader(repaired.as_ref());

    let mut state = ParserState::new(source_name);
    let mut buf = Vec::with_capacity(1024);

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => state.element_start(e)?,
            Ok(Event::Empty(ref e)) => {
                // Self-closing elements run the start and end transitions
                // back to back; `<Cell ss:Index="5"/>` is how column gaps
                // are usually written.
                state.element_start(e)?;
                let name = e.local_name().as_ref().to_vec();
                state.element_end(&name);
            }
            Ok(Event::End(ref e)) => {
                state.element_end(e.local_name().as_ref());
            }
            Ok(Event::Text(ref t)) => {
                if state.in_data {
                    let text = t.xml_content().map_err(|e| {
                        Error::MalformedMarkup(format!(
                            "XML parsing error at position {}: {}",
                            reader.buffer_position(),
                            e
                        ))
                    })?;
                    state.data_text.push_str(&text);
                }
            }
            Ok(Event::CData(ref t)) => {
                if state.in_data {
                    state
                        .data_text
                        .push_str(&String::from_utf8_lossy(t.as_ref()));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::MalformedMarkup(format!(
                    "XML parsing error at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {} // Skip comments, processing instructions, declarations
        }
        buf.clear();
    }

    Ok(state.workbook)
}

/// Mutable parse state: nesting flags, running counters, and the in-progress
/// aggregates.
struct ParserState {
    workbook: Workbook,
    worksheet: Option<Worksheet>,
    row: Option<Row>,
    cell: Option<Cell>,
    data_text: String,

    in_workbook: bool,
    in_worksheet: bool,
    in_table: bool,
    in_row: bool,
    in_cell: bool,
    in_data: bool,

    /// Whether the open `Data` element carried no `Type` attribute, in which
    /// case the type is inferred from the text when the element closes.
    infer_type: bool,

    next_row_index: usize,
    next_column_index: usize,
}

impl ParserState {
    fn new(source_name: &str) -> Self {
        let stem = match source_name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => source_name,
        };
        ParserState {
            workbook: Workbook::new(stem),
            worksheet: None,
            row: None,
            cell: None,
            data_text: String::new(),
            in_workbook: false,
            in_worksheet: false,
            in_table: false,
            in_row: false,
            in_cell: false,
            in_data: false,
            infer_type: false,
            next_row_index: 0,
            next_column_index: 0,
        }
    }

    fn element_start(&mut self, e: &BytesStart) -> Result<()> {
        match e.local_name().as_ref() {
            b"Workbook" => self.in_workbook = true,
            b"Worksheet" if self.in_workbook => {
                let name = attribute(e, "Name")?
                    .unwrap_or_else(|| format!("Sheet{}", self.workbook.worksheets.len() + 1));
                self.worksheet = Some(Worksheet::new(name));
                self.next_row_index = 0;
                self.next_column_index = 0;
                self.in_worksheet = true;
            }
            b"Table" if self.in_worksheet => self.in_table = true,
            b"Row" if self.in_table => {
                // An explicit 1-based Index overrides the running counter.
                let row_index = match parse_index(attribute(e, "Index")?) {
                    Some(idx) => idx,
                    None => self.next_row_index,
                };
                let mut row = Row::new(row_index);
                row.height = attribute(e, "Height")?.and_then(|h| h.parse().ok());
                row.hidden = attribute(e, "Hidden")?.as_deref() == Some("1");
                self.row = Some(row);
                self.next_column_index = 0;
                self.in_row = true;
            }
            b"Cell" if self.in_row => {
                let column_index = match parse_index(attribute(e, "Index")?) {
                    Some(idx) => idx,
                    None => self.next_column_index,
                };
                let mut cell = Cell::empty(column_index);
                cell.style_id = attribute(e, "StyleID")?;
                cell.formula = attribute(e, "Formula")?;
                cell.merge_across = attribute(e, "MergeAcross")?
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0);
                cell.merge_down = attribute(e, "MergeDown")?
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0);
                self.cell = Some(cell);
                self.in_cell = true;
            }
            b"Data" if self.in_cell => {
                match attribute(e, "Type")? {
                    Some(tag) => {
                        if let Some(cell) = self.cell.as_mut() {
                            cell.data_type = DataType::from_tag(&tag);
                        }
                        self.infer_type = false;
                    }
                    // No Type attribute: fall back to inference over the
                    // accumulated text once the element closes.
                    None => self.infer_type = true,
                }
                self.data_text.clear();
                self.in_data = true;
            }
            _ => {}
        }
        Ok(())
    }

    fn element_end(&mut self, name: &[u8]) {
        match name {
            b"Workbook" => self.in_workbook = false,
            b"Worksheet" => {
                if let Some(mut worksheet) = self.worksheet.take() {
                    worksheet.finalize();
                    self.workbook.worksheets.push(worksheet);
                }
                self.in_worksheet = false;
            }
            b"Table" => self.in_table = false,
            b"Row" => {
                if let Some(row) = self.row.take()
                    && let Some(worksheet) = self.worksheet.as_mut()
                {
                    self.next_row_index = row.row_index + 1;
                    worksheet.push_row(row);
                }
                self.in_row = false;
            }
            b"Cell" => {
                if let Some(cell) = self.cell.take()
                    && let Some(row) = self.row.as_mut()
                {
                    self.next_column_index = cell.column_index + 1;
                    row.cells.push(cell);
                }
                self.in_cell = false;
            }
            b"Data" => {
                if let Some(cell) = self.cell.as_mut() {
                    cell.value = self.data_text.trim().to_string();
                    if self.infer_type {
                        cell.data_type = infer_data_type(&cell.value);
                    }
                }
                self.data_text.clear();
                self.in_data = false;
            }
            _ => {}
        }
    }
}

/// Look up an attribute, trying the `ss:`-prefixed name before the bare one;
/// the source format applies its namespace prefix inconsistently.
fn attribute(e: &BytesStart, name: &str) -> Result<Option<String>> {
    let prefixed = format!("ss:{name}");
    let mut bare = None;

    for attr in e.attributes() {
        let attr = attr.map_err(|err| Error::MalformedMarkup(err.to_string()))?;
        let key = attr.key.as_ref();
        if key == prefixed.as_bytes() {
            let value = attr
                .unescape_value()
                .map_err(|err| Error::MalformedMarkup(err.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
        if key == name.as_bytes() && bare.is_none() {
            let value = attr
                .unescape_value()
                .map_err(|err| Error::MalformedMarkup(err.to_string()))?;
            bare = Some(value.into_owned());
        }
    }
    Ok(bare)
}

/// Convert a 1-based `Index` attribute to a zero-based index.
fn parse_index(value: Option<String>) -> Option<usize> {
    let idx: usize = value?.parse().ok()?;
    (idx > 0).then(|| idx - 1)
}
