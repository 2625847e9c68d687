//! Decoder from arbitrary XML into the generic tree.
//!
//! This is a fallback tier: any decode error yields `None`/empty rather than
//! propagating, because the dispatcher still has further tiers to try.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::common::bom::strip_bom;
use crate::tree::display::{DisplayItem, display_items};
use crate::tree::element::GenericElement;
use crate::tree::value::TreeValue;

/// Decode XML bytes into a tree value, rooted at a single entry named after
/// the document's root element. Returns `None` on any decode error or when
/// the document has no root element.
pub fn to_tree(bytes: &[u8]) -> Option<TreeValue> {
    let (root_name, root) = parse_root(bytes)?;

    let mut wrapper = GenericElement::default();
    wrapper.children.insert(root_name, vec![root]);
    let value = wrapper.into_tree_value();
    (!value.is_empty()).then_some(value)
}

/// Decode XML bytes straight into display items. Returns an empty list when
/// the bytes are not displayable XML.
pub fn to_display_items(bytes: &[u8]) -> Vec<DisplayItem> {
    match to_tree(bytes) {
        Some(tree) => display_items(&tree),
        None => Vec::new(),
    }
}

fn parse_root(bytes: &[u8]) -> Option<(String, GenericElement)> {
    let (body, _) = strip_bom(bytes);
    let mut reader = Reader::from_reader(body);

    let mut buf = Vec::with_capacity(1024);
    let mut stack: Vec<(String, GenericElement, String)> = Vec::new();
    let mut root: Option<(String, GenericElement)> = None;

    loop {
        match reader.read_event_into(&mut buf).ok()? {
            Event::Start(ref e) => {
                // Content after the root element closed is not a tree.
                if root.is_some() {
                    return None;
                }
                let (name, element) = open_element(e)?;
                stack.push((name, element, String::new()));
            }
            Event::Empty(ref e) => {
                if root.is_some() {
                    return None;
                }
                let (name, element) = open_element(e)?;
                match stack.last_mut() {
                    Some((_, parent, _)) => {
                        parent.children.entry(name).or_default().push(element);
                    }
                    None => root = Some((name, element)),
                }
            }
            Event::Text(ref t) => {
                if let Some((_, _, text)) = stack.last_mut() {
                    text.push_str(&t.xml_content().ok()?);
                }
            }
            Event::CData(ref t) => {
                if let Some((_, _, text)) = stack.last_mut() {
                    text.push_str(&String::from_utf8_lossy(t.as_ref()));
                }
            }
            Event::End(_) => {
                let (name, mut element, text) = stack.pop()?;
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    element.text = Some(trimmed.to_string());
                }
                match stack.last_mut() {
                    Some((_, parent, _)) => {
                        parent.children.entry(name).or_default().push(element);
                    }
                    None => root = Some((name, element)),
                }
            }
            Event::Eof => break,
            _ => {} // Skip comments, processing instructions, declarations
        }
        buf.clear();
    }

    // Unclosed elements mean the document was truncated.
    if !stack.is_empty() {
        return None;
    }
    root
}

fn open_element(e: &quick_xml::events::BytesStart) -> Option<(String, GenericElement)> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut element = GenericElement::default();
    for attr in e.attributes() {
        let attr = attr.ok()?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().ok()?.into_owned();
        element.attributes.insert(key, value);
    }
    Some((name, element))
}
