//! Generic tree decoding for XML and JSON fallback tiers.
//!
//! Files that are not spreadsheets flow through here: arbitrary XML decodes
//! into a [`GenericElement`], JSON decodes through serde, and both flatten
//! into the closed [`TreeValue`] sum type before becoming [`DisplayItem`]s
//! for the presentation layer. Each representation is derived functionally
//! from the previous one; none is mutated in place.

// Submodule declarations
pub mod display;
pub mod element;
pub mod json;
pub mod value;
pub mod xml;

// Re-exports
pub use display::{DisplayItem, display_items};
pub use element::GenericElement;
pub use value::TreeValue;
