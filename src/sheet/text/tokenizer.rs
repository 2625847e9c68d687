//! Character-level tokenizer for delimited text.
//!
//! A single left-to-right scan with an explicit index rather than an
//! iterator: delimiter matches may span several characters, and doubled-quote
//! escapes consume an extra position, so the scan must be free to advance by
//! more than one character per step.

/// Result of tokenizing a delimited text buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizedText {
    /// Emitted rows of raw field text
    pub rows: Vec<Vec<String>>,
    /// Maximum field count across all emitted rows
    pub max_columns: usize,
}

/// Tokenize text into rows of fields.
///
/// The delimiter may be multi-character; matching checks the full delimiter
/// substring at each position. The quote character is fixed at `"`; a
/// doubled quote inside a quoted field is an escaped literal quote. `\r\n`
/// counts as one line terminator. Rows consisting of a single empty field
/// (fully blank lines) are silently dropped.
///
/// Never fails: malformed quoting degrades to best-effort field boundaries.
pub fn tokenize(text: &str, delimiter: &str) -> TokenizedText {
    let chars: Vec<char> = text.chars().collect();
    let delim: Vec<char> = delimiter.chars().collect();

    let mut result = TokenizedText::default();
    let mut current_field = String::new();
    let mut current_row: Vec<String> = Vec::new();
    let mut inside_quotes = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '"' {
            if inside_quotes {
                if chars.get(i + 1) == Some(&'"') {
                    // Escaped literal quote
                    current_field.push('"');
                    i += 2;
                } else {
                    inside_quotes = false;
                    i += 1;
                }
            } else {
                inside_quotes = true;
                i += 1;
            }
            continue;
        }

        if !inside_quotes && matches_delimiter(&chars, i, &delim) {
            current_row.push(std::mem::take(&mut current_field));
            i += delim.len();
            continue;
        }

        if !inside_quotes && (c == '\n' || c == '\r') {
            current_row.push(std::mem::take(&mut current_field));
            flush_row(&mut current_row, &mut result);
            if c == '\r' && chars.get(i + 1) == Some(&'\n') {
                i += 2;
            } else {
                i += 1;
            }
            continue;
        }

        current_field.push(c);
        i += 1;
    }

    // Flush whatever the scan left pending.
    if !current_field.is_empty() || !current_row.is_empty() {
        current_row.push(current_field);
        flush_row(&mut current_row, &mut result);
    }

    result
}

fn matches_delimiter(chars: &[char], at: usize, delim: &[char]) -> bool {
    !delim.is_empty()
        && at + delim.len() <= chars.len()
        && chars[at..at + delim.len()] == *delim
}

/// Emit the row unless it is trivial: a row is kept when it has more than one
/// field, or its single field is non-empty.
fn flush_row(row: &mut Vec<String>, result: &mut TokenizedText) {
    let non_trivial = row.len() > 1 || row.first().is_some_and(|f| !f.is_empty());
    if non_trivial {
        result.max_columns = result.max_columns.max(row.len());
        result.rows.push(std::mem::take(row));
    } else {
        row.clear();
    }
}
