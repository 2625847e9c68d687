//! Configuration for parsing delimited text documents.
//!
//! Mirrors the persisted viewer settings: delimiter choice plus the two
//! mutually exclusive header flags. Passed by value into the dispatcher; the
//! parsing core holds no global settings state.

use serde::{Deserialize, Serialize};

/// Field delimiter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DelimiterKind {
    /// `,` (CSV default)
    #[default]
    Comma,
    /// `|`
    Pipe,
    /// `;`
    Semicolon,
    /// Tab character
    Tab,
    /// User-supplied delimiter string, possibly multi-character
    Custom,
}

/// Configuration for parsing delimited text documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextConfig {
    /// Which delimiter to split fields on
    pub delimiter: DelimiterKind,
    /// Delimiter string used when `delimiter` is [`DelimiterKind::Custom`]
    pub custom_delimiter: String,
    /// Whether to run the header-row heuristic
    pub auto_detect_headers: bool,
    /// Treat row 0 as a header unconditionally; takes precedence over
    /// auto-detection
    pub force_header_row: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            delimiter: DelimiterKind::Comma,
            custom_delimiter: String::new(),
            auto_detect_headers: true,
            force_header_row: false,
        }
    }
}

impl TextConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: DelimiterKind) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set a custom delimiter string (switches the kind to `Custom`).
    pub fn with_custom_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = DelimiterKind::Custom;
        self.custom_delimiter = delimiter.into();
        self
    }

    /// Enable/disable the header-row heuristic.
    pub fn with_auto_detect_headers(mut self, auto_detect: bool) -> Self {
        self.auto_detect_headers = auto_detect;
        self
    }

    /// Force row 0 to be treated as a header. Clears auto-detection, since
    /// the two settings are mutually exclusive upstream.
    pub fn with_force_header_row(mut self, force: bool) -> Self {
        self.force_header_row = force;
        if force {
            self.auto_detect_headers = false;
        }
        self
    }

    /// Create a tab-separated configuration.
    pub fn tsv() -> Self {
        Self::new().with_delimiter(DelimiterKind::Tab)
    }

    /// Create a semicolon-separated configuration.
    pub fn semicolon() -> Self {
        Self::new().with_delimiter(DelimiterKind::Semicolon)
    }

    /// Create a pipe-separated configuration.
    pub fn pipe() -> Self {
        Self::new().with_delimiter(DelimiterKind::Pipe)
    }

    /// The delimiter string to scan for. An empty custom delimiter falls
    /// back to comma so the tokenizer always has something to match.
    pub fn delimiter_str(&self) -> &str {
        match self.delimiter {
            DelimiterKind::Comma => ",",
            DelimiterKind::Pipe => "|",
            DelimiterKind::Semicolon => ";",
            DelimiterKind::Tab => "\t",
            DelimiterKind::Custom => {
                if self.custom_delimiter.is_empty() {
                    ","
                } else {
                    &self.custom_delimiter
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_strings() {
        assert_eq!(TextConfig::new().delimiter_str(), ",");
        assert_eq!(TextConfig::tsv().delimiter_str(), "\t");
        assert_eq!(TextConfig::pipe().delimiter_str(), "|");
        assert_eq!(TextConfig::semicolon().delimiter_str(), ";");
        assert_eq!(
            TextConfig::new().with_custom_delimiter("->;").delimiter_str(),
            "->;"
        );
    }

    #[test]
    fn test_empty_custom_delimiter_falls_back_to_comma() {
        let config = TextConfig::new().with_custom_delimiter("");
        assert_eq!(config.delimiter_str(), ",");
    }

    #[test]
    fn test_force_header_clears_auto_detect() {
        let config = TextConfig::new().with_force_header_row(true);
        assert!(config.force_header_row);
        assert!(!config.auto_detect_headers);
    }
}
