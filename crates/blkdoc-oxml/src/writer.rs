//! XML serialization of a [`Tree`]
//!
//! Output is deterministic: attributes and children are written in the
//! order they are stored, elements without content are self-closed.

use crate::tree::{NodeId, Tree};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

impl Tree {
    /// Serialize the whole tree, with an XML declaration
    pub fn to_xml(&self) -> String {
        let mut output = String::new();
        output.push_str(XML_DECLARATION);
        output.push('\n');
        self.write_element(self.root(), &mut output);
        output
    }

    /// Serialize one element and its subtree, without a declaration
    pub fn element_to_xml(&self, id: NodeId) -> String {
        let mut output = String::new();
        self.write_element(id, &mut output);
        output
    }

    fn write_element(&self, id: NodeId, output: &mut String) {
        let element = self.get(id);
        output.push('<');
        output.push_str(&element.name);
        for (key, value) in &element.attributes {
            output.push_str(&format!(r#" {}="{}""#, key, escape_xml(value)));
        }

        let text = element.text.as_deref().unwrap_or_default();
        if element.children().is_empty() && text.is_empty() {
            output.push_str("/>");
            return;
        }

        output.push('>');
        output.push_str(&escape_xml(text));
        for &child in element.children() {
            self.write_element(child, output);
        }
        output.push_str("</");
        output.push_str(&element.name);
        output.push('>');
    }
}

/// Escape special XML characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
