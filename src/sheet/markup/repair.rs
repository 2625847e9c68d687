//! Pre-parse repair for known document defects.
//!
//! Some producers emit an XML declaration with no space before the
//! `encoding=` or `standalone=` attributes, which strict parsers reject, and
//! some prepend a BOM. Both defects are corrected here before the markup
//! engine sees the bytes. The buffer is re-encoded only when a fix was
//! actually applied; untouched input passes through borrowed.

use std::borrow::Cow;

/// Repair the raw document bytes if the known defects are present.
pub fn repair_document(bytes: &[u8]) -> Cow<'_, [u8]> {
    // Repairs operate on text; bytes that are not UTF-8 pass through for the
    // markup engine to judge.
    let Ok(text) = std::str::from_utf8(bytes) else {
        return Cow::Borrowed(bytes);
    };

    let had_bom = text.starts_with('\u{feff}');
    let body = text.trim_start_matches('\u{feff}');

    match (had_bom, repair_declaration(body)) {
        (_, Some(fixed)) => Cow::Owned(fixed.into_bytes()),
        (true, None) => Cow::Owned(body.as_bytes().to_vec()),
        (false, None) => Cow::Borrowed(bytes),
    }
}

/// Insert the missing space before `encoding=`/`standalone=` inside the XML
/// declaration. Returns `None` when the declaration is absent or well formed.
fn repair_declaration(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let decl_start = memchr::memmem::find(bytes, b"<?xml")?;
    let decl_end = decl_start + memchr::memmem::find(&bytes[decl_start..], b"?>")?;
    let decl = &bytes[decl_start..decl_end];

    let mut insertions: Vec<usize> = Vec::new();
    for attr in [b"encoding=".as_slice(), b"standalone=".as_slice()] {
        for pos in memchr::memmem::find_iter(decl, attr) {
            if pos > 0 && !decl[pos - 1].is_ascii_whitespace() {
                insertions.push(decl_start + pos);
            }
        }
    }
    if insertions.is_empty() {
        return None;
    }
    insertions.sort_unstable();

    let mut fixed = String::with_capacity(text.len() + insertions.len());
    let mut last = 0;
    for pos in insertions {
        fixed.push_str(&text[last..pos]);
        fixed.push(' ');
        last = pos;
    }
    fixed.push_str(&text[last..]);
    Some(fixed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_space_before_encoding() {
        let input = br#"<?xml version="1.0"encoding="UTF-8"?><a/>"#;
        let repaired = repair_document(input);
        let text = std::str::from_utf8(&repaired).unwrap();
        assert!(text.contains(r#"version="1.0" encoding="UTF-8""#));
    }

    #[test]
    fn test_missing_space_before_standalone() {
        let input = br#"<?xml version="1.0" encoding="UTF-8"standalone="yes"?><a/>"#;
        let repaired = repair_document(input);
        let text = std::str::from_utf8(&repaired).unwrap();
        assert!(text.contains(r#""UTF-8" standalone="yes""#));
    }

    #[test]
    fn test_well_formed_declaration_is_borrowed() {
        let input = br#"<?xml version="1.0" encoding="UTF-8"?><a/>"#;
        assert!(matches!(repair_document(input), Cow::Borrowed(_)));
    }

    #[test]
    fn test_bom_is_stripped() {
        let mut input = vec![0xEF, 0xBB, 0xBF];
        input.extend_from_slice(b"<a/>");
        let repaired = repair_document(&input);
        assert_eq!(repaired.as_ref(), b"<a/>");
    }

    #[test]
    fn test_no_declaration_passes_through() {
        let input = b"<root><a>1</a></root>";
        assert!(matches!(repair_document(input), Cow::Borrowed(_)));
    }

    #[test]
    fn test_non_utf8_passes_through() {
        let input = [0xFF, 0xFE, 0x00];
        assert!(matches!(repair_document(&input), Cow::Borrowed(_)));
    }
}
