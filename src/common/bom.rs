//! Byte Order Mark (BOM) utilities shared across parsing tiers.
//!
//! Provides detection and stripping helpers for the Unicode encodings that
//! show up in text-based documents handed to the dispatcher.

/// Supported BOM encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BomKind {
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl BomKind {
    /// Returns the byte representation of the BOM.
    #[inline]
    pub const fn as_bytes(&self) -> &'static [u8] {
        match self {
            BomKind::Utf8 => &UTF8_BOM,
            BomKind::Utf16Le => &UTF16_LE_BOM,
            BomKind::Utf16Be => &UTF16_BE_BOM,
        }
    }

    /// Returns the length in bytes of the BOM.
    #[inline]
    #[allow(clippy::len_without_is_empty)] // No need to check for empty BOMs
    pub const fn len(&self) -> usize {
        self.as_bytes().len()
    }
}

/// UTF-8 BOM bytes.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
/// UTF-16 little-endian BOM bytes.
pub const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
/// UTF-16 big-endian BOM bytes.
pub const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Detects a BOM at the start of the buffer.
///
/// UTF-16 variants are checked before UTF-8 so the two-byte marks are not
/// shadowed by a partial UTF-8 match.
pub fn detect_bom(bytes: &[u8]) -> Option<BomKind> {
    if bytes.starts_with(&UTF8_BOM) {
        return Some(BomKind::Utf8);
    }
    if bytes.starts_with(&UTF16_BE_BOM) {
        return Some(BomKind::Utf16Be);
    }
    if bytes.starts_with(&UTF16_LE_BOM) {
        return Some(BomKind::Utf16Le);
    }
    None
}

/// Returns the buffer with any leading BOM removed, along with the detected
/// kind. Zero-copy; the returned slice borrows from the input.
pub fn strip_bom(bytes: &[u8]) -> (&[u8], Option<BomKind>) {
    match detect_bom(bytes) {
        Some(kind) => (&bytes[kind.len()..], Some(kind)),
        None => (bytes, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_utf8_bom() {
        let bytes = [0xEF, 0xBB, 0xBF, b'h', b'i'];
        assert_eq!(detect_bom(&bytes), Some(BomKind::Utf8));
    }

    #[test]
    fn test_detect_utf16_boms() {
        assert_eq!(detect_bom(&[0xFF, 0xFE, 0x41, 0x00]), Some(BomKind::Utf16Le));
        assert_eq!(detect_bom(&[0xFE, 0xFF, 0x00, 0x41]), Some(BomKind::Utf16Be));
    }

    #[test]
    fn test_no_bom() {
        assert_eq!(detect_bom(b"hello"), None);
        assert_eq!(detect_bom(b""), None);
    }

    #[test]
    fn test_strip_bom() {
        let (rest, kind) = strip_bom(&[0xEF, 0xBB, 0xBF, b'x']);
        assert_eq!(rest, b"x");
        assert_eq!(kind, Some(BomKind::Utf8));

        let (rest, kind) = strip_bom(b"plain");
        assert_eq!(rest, b"plain");
        assert_eq!(kind, None);
    }
}
