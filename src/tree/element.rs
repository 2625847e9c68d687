//! Generic XML element node and its flattening into [`TreeValue`].

use std::collections::BTreeMap;

use crate::tree::value::TreeValue;

/// A decoded XML element: optional text content, attributes, and named child
/// lists (repeated sibling tags share one entry).
///
/// Built bottom-up by the XML decoder, then converted exactly once into a
/// [`TreeValue`]; neither representation is mutated in place afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericElement {
    /// Trimmed text content, when non-empty
    pub text: Option<String>,
    /// Attribute name to value
    pub attributes: BTreeMap<String, String>,
    /// Child element name to ordered occurrences
    pub children: BTreeMap<String, Vec<GenericElement>>,
}

impl GenericElement {
    /// True when the element carries only text: no attributes, no children.
    pub fn is_textual(&self) -> bool {
        self.attributes.is_empty() && self.children.is_empty()
    }

    /// Flatten into a [`TreeValue`].
    ///
    /// Attributes become `@name` entries and non-empty text becomes a
    /// `#text` entry. Child lists collapse: a purely-textual singleton
    /// flattens to its text, a structural singleton keeps its node, and a
    /// repeated tag becomes a list.
    pub fn into_tree_value(self) -> TreeValue {
        if self.is_textual() {
            return TreeValue::Leaf(self.text.unwrap_or_default());
        }

        let mut map = BTreeMap::new();
        for (name, value) in self.attributes {
            map.insert(format!("@{name}"), TreeValue::Leaf(value));
        }
        if let Some(text) = self.text
            && !text.is_empty()
        {
            map.insert("#text".to_string(), TreeValue::Leaf(text));
        }
        for (name, mut occurrences) in self.children {
            let value = if occurrences.len() == 1 {
                // Singleton collapse: a textual child flattens straight to
                // its text, avoiding needless nesting.
                occurrences.remove(0).into_tree_value()
            } else {
                TreeValue::List(
                    occurrences
                        .into_iter()
                        .map(GenericElement::into_tree_value)
                        .collect(),
                )
            };
            map.insert(name, value);
        }
        TreeValue::Node(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textual(text: &str) -> GenericElement {
        GenericElement {
            text: Some(text.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_textual_element_becomes_leaf() {
        assert_eq!(
            textual("hello").into_tree_value(),
            TreeValue::Leaf("hello".to_string())
        );
    }

    #[test]
    fn test_attributes_and_text_entries() {
        let mut element = textual("body");
        element.attributes.insert("id".to_string(), "7".to_string());

        let TreeValue::Node(map) = element.into_tree_value() else {
            panic!("expected a node");
        };
        assert_eq!(map.get("@id"), Some(&TreeValue::Leaf("7".to_string())));
        assert_eq!(map.get("#text"), Some(&TreeValue::Leaf("body".to_string())));
    }

    #[test]
    fn test_singleton_textual_child_collapses() {
        let mut parent = GenericElement::default();
        parent.children.insert("a".to_string(), vec![textual("1")]);

        let TreeValue::Node(map) = parent.into_tree_value() else {
            panic!("expected a node");
        };
        assert_eq!(map.get("a"), Some(&TreeValue::Leaf("1".to_string())));
    }

    #[test]
    fn test_repeated_children_become_list() {
        let mut parent = GenericElement::default();
        parent
            .children
            .insert("item".to_string(), vec![textual("1"), textual("2")]);

        let TreeValue::Node(map) = parent.into_tree_value() else {
            panic!("expected a node");
        };
        assert_eq!(
            map.get("item"),
            Some(&TreeValue::List(vec![
                TreeValue::Leaf("1".to_string()),
                TreeValue::Leaf("2".to_string()),
            ]))
        );
    }

    #[test]
    fn test_flattening_is_deterministic() {
        let mut parent = GenericElement::default();
        parent.attributes.insert("z".to_string(), "26".to_string());
        parent.attributes.insert("a".to_string(), "1".to_string());
        parent.children.insert("mid".to_string(), vec![textual("m")]);

        let first = parent.clone().into_tree_value();
        let second = parent.into_tree_value();
        assert_eq!(first, second);
    }
}
