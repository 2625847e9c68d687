//! Decoder from JSON into the generic tree.

use serde_json::Value;
use std::collections::BTreeMap;

use crate::common::{Error, Result};
use crate::tree::value::TreeValue;

/// Decode JSON bytes into a tree value.
///
/// Only object and array roots are accepted; an array root is wrapped under
/// a synthetic `"root"` key so the display builder sees a keyed top level
/// either way.
pub fn to_tree(bytes: &[u8]) -> Result<TreeValue> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| Error::MalformedMarkup(format!("JSON error: {e}")))?;

    match value {
        Value::Object(_) => Ok(convert(value)),
        Value::Array(items) => {
            let mut map = BTreeMap::new();
            map.insert(
                "root".to_string(),
                TreeValue::List(items.into_iter().map(convert).collect()),
            );
            Ok(TreeValue::Node(map))
        }
        other => Err(Error::UnsupportedRoot(type_name(&other).to_string())),
    }
}

fn convert(value: Value) -> TreeValue {
    match value {
        Value::Null => TreeValue::Leaf("null".to_string()),
        Value::Bool(b) => TreeValue::Leaf(b.to_string()),
        Value::Number(n) => TreeValue::Leaf(n.to_string()),
        Value::String(s) => TreeValue::Leaf(s),
        Value::Array(items) => TreeValue::List(items.into_iter().map(convert).collect()),
        Value::Object(map) => TreeValue::Node(
            map.into_iter().map(|(k, v)| (k, convert(v))).collect(),
        ),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_root() {
        let tree = to_tree(br#"{"b": 2, "a": "x", "flag": true}"#).unwrap();
        let TreeValue::Node(map) = tree else {
            panic!("expected node");
        };
        assert_eq!(map["a"], TreeValue::Leaf("x".to_string()));
        assert_eq!(map["b"], TreeValue::Leaf("2".to_string()));
        assert_eq!(map["flag"], TreeValue::Leaf("true".to_string()));
    }

    #[test]
    fn test_array_root_is_wrapped() {
        let tree = to_tree(b"[1, 2]").unwrap();
        let TreeValue::Node(map) = tree else {
            panic!("expected node");
        };
        assert_eq!(
            map["root"],
            TreeValue::List(vec![
                TreeValue::Leaf("1".to_string()),
                TreeValue::Leaf("2".to_string()),
            ])
        );
    }

    #[test]
    fn test_scalar_root_is_unsupported() {
        assert!(matches!(
            to_tree(b"42"),
            Err(Error::UnsupportedRoot(_))
        ));
        assert!(matches!(
            to_tree(b"\"text\""),
            Err(Error::UnsupportedRoot(_))
        ));
    }

    #[test]
    fn test_syntax_error() {
        assert!(matches!(
            to_tree(b"{not json"),
            Err(Error::MalformedMarkup(_))
        ));
    }

    #[test]
    fn test_nested_structures() {
        let tree = to_tree(br#"{"user": {"name": "ada", "tags": ["x", null]}}"#).unwrap();
        let TreeValue::Node(map) = tree else {
            panic!("expected node");
        };
        let TreeValue::Node(user) = &map["user"] else {
            panic!("expected nested node");
        };
        assert_eq!(user["name"], TreeValue::Leaf("ada".to_string()));
        assert_eq!(
            user["tags"],
            TreeValue::List(vec![
                TreeValue::Leaf("x".to_string()),
                TreeValue::Leaf("null".to_string()),
            ])
        );
    }
}
