//! Paragraph views
//!
//! [`Paragraph`] reads a `w:p` element, [`ParagraphMut`] edits one. Both are
//! thin handles over the document tree and hold no state of their own.

use std::fmt;

use blkdoc_oxml::{wml, NodeId, Tree};

use crate::numbering::NumberingId;

/// Read-only view of a paragraph
#[derive(Clone, Copy)]
pub struct Paragraph<'a> {
    tree: &'a Tree,
    node: NodeId,
}

impl<'a> Paragraph<'a> {
    pub(crate) fn new(tree: &'a Tree, node: NodeId) -> Self {
        Self { tree, node }
    }

    /// Handle of the underlying `w:p` element
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Runs in document order
    pub fn runs(&self) -> Vec<Run<'a>> {
        wml::runs(self.tree, self.node)
            .into_iter()
            .map(|node| Run {
                tree: self.tree,
                node,
            })
            .collect()
    }

    /// Plain text of all runs
    pub fn text(&self) -> String {
        self.runs().iter().map(Run::text).collect()
    }

    /// Explicit paragraph style id; `None` means the document default
    pub fn style(&self) -> Option<&'a str> {
        wml::p_style(self.tree, self.node)
    }

    /// Numbering identifier, `None` when the paragraph is not in a list
    pub fn numbering_id(&self) -> Option<NumberingId> {
        wml::p_num_id(self.tree, self.node).map(NumberingId)
    }

    /// Indentation level within its list
    pub fn level(&self) -> Option<u32> {
        wml::p_ilvl(self.tree, self.node)
    }
}

impl PartialEq for Paragraph<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.node == other.node
    }
}

impl Eq for Paragraph<'_> {}

impl fmt::Debug for Paragraph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paragraph")
            .field("node", &self.node)
            .field("style", &self.style())
            .field("numbering_id", &self.numbering_id())
            .field("text", &self.text())
            .finish()
    }
}

/// Read-only view of a text run
#[derive(Clone, Copy)]
pub struct Run<'a> {
    tree: &'a Tree,
    node: NodeId,
}

impl Run<'_> {
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn text(&self) -> String {
        wml::run_text(self.tree, self.node)
    }
}

impl fmt::Debug for Run<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Run")
            .field("node", &self.node)
            .field("text", &self.text())
            .finish()
    }
}

/// Mutable handle to a paragraph
pub struct ParagraphMut<'a> {
    tree: &'a mut Tree,
    node: NodeId,
}

impl<'a> ParagraphMut<'a> {
    pub(crate) fn new(tree: &'a mut Tree, node: NodeId) -> Self {
        Self { tree, node }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Read view of the same paragraph
    pub fn as_paragraph(&self) -> Paragraph<'_> {
        Paragraph::new(self.tree, self.node)
    }

    /// Append a run holding `text`
    pub fn add_run(&mut self, text: &str) -> &mut Self {
        wml::add_r(self.tree, self.node, text);
        self
    }

    /// Set or clear the paragraph style id
    pub fn set_style(&mut self, style: Option<&str>) -> &mut Self {
        wml::set_p_style(self.tree, self.node, style);
        self
    }

    /// Put the paragraph in the list `num_id` at indentation `level`
    pub fn set_numbering(&mut self, num_id: NumberingId, level: u32) -> &mut Self {
        wml::set_num_pr(self.tree, self.node, num_id.value(), level);
        self
    }

    /// Take the paragraph out of its list
    pub fn clear_numbering(&mut self) -> &mut Self {
        wml::clear_num_pr(self.tree, self.node);
        self
    }
}

impl fmt::Debug for ParagraphMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_paragraph(), f)
    }
}
