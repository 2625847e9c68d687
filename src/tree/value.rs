//! Closed recursive value type for generic document trees.
//!
//! Both the XML and JSON fallback tiers converge on this one shape, so the
//! display flattening downstream has a single input to care about.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A value in a generic document tree.
///
/// `BTreeMap` keys give every level a deterministic lexicographic order, so
/// flattening the same tree twice yields structurally identical output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeValue {
    /// Scalar text content
    Leaf(String),
    /// Keyed container
    Node(BTreeMap<String, TreeValue>),
    /// Ordered sequence
    List(Vec<TreeValue>),
}

impl TreeValue {
    /// Scalar content, when this value is a leaf.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            TreeValue::Leaf(text) => Some(text),
            _ => None,
        }
    }

    /// True for a node or list with no entries, or an empty leaf.
    pub fn is_empty(&self) -> bool {
        match self {
            TreeValue::Leaf(text) => text.is_empty(),
            TreeValue::Node(map) => map.is_empty(),
            TreeValue::List(items) => items.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let leaf = TreeValue::Leaf("x".to_string());
        assert_eq!(leaf.as_leaf(), Some("x"));
        assert!(!leaf.is_empty());

        let node = TreeValue::Node(BTreeMap::new());
        assert_eq!(node.as_leaf(), None);
        assert!(node.is_empty());
    }
}
