//! Flattening of tree values into renderable display items.

use serde::{Deserialize, Serialize};

use crate::tree::value::TreeValue;

/// A flattened tree node handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayItem {
    /// Dotted/bracketed path (`parent.child`, `parent[0]`); used only as a
    /// stable identity for expansion state, never shown to the user
    pub key_path: String,
    /// Key or index label shown next to the value
    pub label: String,
    /// Scalar rendering for leaf items; `None` for expandable items
    pub value: Option<String>,
    /// Child items, in display order
    pub children: Vec<DisplayItem>,
}

impl DisplayItem {
    /// True when the item expands into children instead of showing a value.
    pub fn is_expandable(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Flatten a tree value into top-level display items.
///
/// Node keys are iterated in lexicographic order at every level (the backing
/// map is ordered), so repeated flattening of the same tree is reproducible.
pub fn display_items(tree: &TreeValue) -> Vec<DisplayItem> {
    match tree {
        TreeValue::Node(map) => map
            .iter()
            .map(|(key, value)| build_item(key.clone(), key, value))
            .collect(),
        TreeValue::List(items) => items
            .iter()
            .enumerate()
            .map(|(i, value)| build_item(format!("[{i}]"), &format!("[{i}]"), value))
            .collect(),
        TreeValue::Leaf(text) => vec![DisplayItem {
            key_path: String::new(),
            label: String::new(),
            value: Some(text.clone()),
            children: Vec::new(),
        }],
    }
}

fn build_item(key_path: String, label: &str, value: &TreeValue) -> DisplayItem {
    match value {
        TreeValue::Leaf(text) => DisplayItem {
            key_path,
            label: label.to_string(),
            value: Some(text.clone()),
            children: Vec::new(),
        },
        TreeValue::Node(map) => {
            let children = map
                .iter()
                .map(|(key, child)| build_item(format!("{key_path}.{key}"), key, child))
                .collect();
            DisplayItem {
                key_path,
                label: label.to_string(),
                value: None,
                children,
            }
        }
        TreeValue::List(items) => {
            let children = items
                .iter()
                .enumerate()
                .map(|(i, child)| {
                    build_item(format!("{key_path}[{i}]"), &format!("[{i}]"), child)
                })
                .collect();
            DisplayItem {
                key_path,
                label: label.to_string(),
                value: None,
                children,
            }
        }
    }
}
