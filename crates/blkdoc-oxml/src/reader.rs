//! XML reading into a [`Tree`]
//!
//! The reader keeps every element and attribute it sees, in document order.
//! Character content is kept for `w:t` runs verbatim and elsewhere only when
//! it is not pure indentation.
//!
//! Mixed content is flattened: every text fragment of an element, including
//! text that follows a child element, is appended to the element's single
//! text slot, and the writer emits that slot before the children. Text in
//! WordprocessingML sits in leaf elements (`w:t`, `w:instrText`, ...), so
//! parts round-trip unchanged; other mixed-content XML does not.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{OxmlError, Result};
use crate::tree::{NodeId, Tree};
use crate::wml;

impl Tree {
    /// Parse a tree from XML bytes
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        // Don't trim text - preserve whitespace in runs
        reader.config_mut().trim_text(false);

        let mut tree: Option<Tree> = None;
        let mut stack: Vec<NodeId> = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    let id = open_element(&mut tree, &stack, e)?;
                    stack.push(id);
                }
                Ok(Event::Empty(ref e)) => {
                    open_element(&mut tree, &stack, e)?;
                }
                Ok(Event::End(_)) => {
                    if stack.pop().is_none() {
                        return Err(OxmlError::Malformed("unexpected closing tag".into()));
                    }
                }
                Ok(Event::Text(ref e)) => {
                    if let (Some(tree), Some(&current)) = (tree.as_mut(), stack.last()) {
                        let text = e.unescape()?;
                        push_text(tree, current, &text);
                    }
                }
                Ok(Event::CData(e)) => {
                    if let (Some(tree), Some(&current)) = (tree.as_mut(), stack.last()) {
                        let text = std::str::from_utf8(&e)?.to_string();
                        push_text(tree, current, &text);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(OxmlError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        if !stack.is_empty() {
            return Err(OxmlError::Malformed(format!(
                "{} element(s) left open at end of input",
                stack.len()
            )));
        }
        let tree = tree.ok_or_else(|| OxmlError::Malformed("no root element".into()))?;
        log::debug!(
            "Parsed <{}> with {} elements",
            tree.name(tree.root()),
            tree.len()
        );
        Ok(tree)
    }
}

/// Create the element for a start or empty tag and link it under the current parent
fn open_element(tree: &mut Option<Tree>, stack: &[NodeId], e: &BytesStart) -> Result<NodeId> {
    let name = std::str::from_utf8(e.name().as_ref())?.to_string();

    let (tree, id) = match tree {
        None => {
            let tree = tree.insert(Tree::new(name));
            let root = tree.root();
            (tree, root)
        }
        Some(tree) => {
            let parent = stack.last().copied().ok_or_else(|| {
                OxmlError::Malformed(format!("second root element <{}>", name))
            })?;
            let id = tree.create(name);
            tree.append_child(parent, id);
            (tree, id)
        }
    };

    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr.unescape_value()?;
        tree.set_attr(id, key, value.into_owned());
    }
    Ok(id)
}

fn push_text(tree: &mut Tree, id: NodeId, text: &str) {
    let keep = tree.is(id, wml::T) || !text.trim().is_empty();
    if keep {
        let element = tree.get_mut(id);
        element.text.get_or_insert_with(String::new).push_str(text);
    }
}
