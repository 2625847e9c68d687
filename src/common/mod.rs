//! Common types and utilities shared across parsing tiers.
//!
//! This module provides the unified error type, BOM handling, and the text
//! decoding ladder used by both the tabular and tree parsing paths.

// Submodule declarations
pub mod bom;
pub mod encoding;
pub mod error;

// Re-exports for convenience
pub use encoding::decode_text;
pub use error::{Error, Result};
