//! Character encoding tiers for raw document bytes.
//!
//! Text-based inputs arrive as untyped byte buffers from share sheets and
//! file pickers, so decoding walks a fixed ladder: strict UTF-8 first, then
//! UTF-16 (BOM-directed, little-endian when no BOM is present), then
//! ISO-8859-1. A leading U+FEFF is stripped after a successful decode.

use crate::common::bom::{BomKind, strip_bom};
use crate::common::{Error, Result};

/// Decode document bytes into text using the UTF-8 / UTF-16 / ISO-8859-1
/// ladder.
///
/// The ladder order is part of the dispatcher contract: a buffer that decodes
/// under more than one tier is always interpreted by the earliest one.
pub fn decode_text(bytes: &[u8]) -> Result<String> {
    let (body, bom) = strip_bom(bytes);

    let decoded = match bom {
        Some(BomKind::Utf8) => decode_utf8(body),
        Some(BomKind::Utf16Le) => decode_utf16(body, encoding_rs::UTF_16LE),
        Some(BomKind::Utf16Be) => decode_utf16(body, encoding_rs::UTF_16BE),
        None => decode_utf8(body)
            .or_else(|| decode_utf16(body, encoding_rs::UTF_16LE))
            .or_else(|| decode_latin1(body)),
    };

    match decoded {
        Some(text) => Ok(strip_feff(text)),
        None => Err(Error::InputDecoding),
    }
}

fn decode_utf8(bytes: &[u8]) -> Option<String> {
    std::str::from_utf8(bytes).ok().map(str::to_owned)
}

fn decode_utf16(bytes: &[u8], encoding: &'static encoding_rs::Encoding) -> Option<String> {
    // UTF-16 code units come in pairs; an odd-length buffer is not UTF-16.
    if bytes.is_empty() || !bytes.len().is_multiple_of(2) {
        return None;
    }
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|cow| cow.into_owned())
}

fn decode_latin1(bytes: &[u8]) -> Option<String> {
    // WINDOWS_1252 stands in for ISO-8859-1, the same mapping the codepage
    // table uses for 28591.
    encoding_rs::WINDOWS_1252
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|cow| cow.into_owned())
}

fn strip_feff(text: String) -> String {
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_owned(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_text("héllo".as_bytes()).unwrap(), "héllo");
    }

    #[test]
    fn test_decode_utf8_with_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"a,b,c");
        assert_eq!(decode_text(&bytes).unwrap(), "a,b,c");
    }

    #[test]
    fn test_decode_utf16le_with_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "hi".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(decode_text(&bytes).unwrap(), "hi");
    }

    #[test]
    fn test_decode_utf16be_with_bom() {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in "hi".encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        assert_eq!(decode_text(&bytes).unwrap(), "hi");
    }

    #[test]
    fn test_decode_latin1_fallback() {
        // 0xE9 is 'é' in ISO-8859-1 and invalid as standalone UTF-8.
        let bytes = [b'c', b'a', b'f', 0xE9];
        assert_eq!(decode_text(&bytes).unwrap(), "café");
    }

    #[test]
    fn test_empty_input_decodes_to_empty_string() {
        assert_eq!(decode_text(b"").unwrap(), "");
    }
}
