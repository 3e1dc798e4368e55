//! Arena-backed element tree
//!
//! Every element lives in a single `Vec` owned by the [`Tree`]; callers hold
//! copyable [`NodeId`] handles. Detaching an element unlinks it from its
//! parent but keeps it in the arena, so stale handles stay valid to read but
//! are no longer reachable from the root.

use std::collections::BTreeSet;

use crate::wml;

/// Handle to an element inside a [`Tree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Get the raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single markup element
#[derive(Debug, Clone)]
pub struct Element {
    /// Qualified name (e.g. `w:p`)
    pub name: String,
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
    /// Character content (only kept for text-bearing elements such as `w:t`)
    ///
    /// An element has a single text slot, written before its children, so
    /// text interleaved with child elements is not kept in place.
    pub text: Option<String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl Element {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
            parent: None,
        }
    }

    /// Child handles in document order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Parent handle, `None` for the root and for detached elements
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Owner of all elements of one document part
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Element>,
    root: NodeId,
}

impl Tree {
    /// Create a tree holding only a root element
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            nodes: vec![Element::new(root_name)],
            root: NodeId(0),
        }
    }

    /// Handle of the root element
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of elements in the arena, attached or not
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create a detached element and return its handle
    pub fn create(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Element::new(name));
        id
    }

    /// Check whether `id` addresses an element of this tree
    ///
    /// Handles are plain indices: one taken from another tree passes this
    /// check whenever that tree was at least as large.
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Element behind `id`; panics for a handle this tree never issued
    pub fn get(&self, id: NodeId) -> &Element {
        &self.nodes[id.index()]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Element {
        &mut self.nodes[id.index()]
    }

    /// Qualified name of an element
    pub fn name(&self, id: NodeId) -> &str {
        &self.get(id).name
    }

    /// Check the qualified name of an element
    pub fn is(&self, id: NodeId, name: &str) -> bool {
        self.name(id) == name
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).children()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).parent()
    }

    /// Direct children with the given qualified name, in document order
    pub fn children_named<'a>(
        &'a self,
        id: NodeId,
        name: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.children(id)
            .iter()
            .copied()
            .filter(move |&child| self.is(child, name))
    }

    pub fn first_child_named(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.children_named(id, name).next()
    }

    /// Attribute value by qualified name
    pub fn attr(&self, id: NodeId, key: &str) -> Option<&str> {
        self.get(id)
            .attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing an existing value in place
    pub fn set_attr(&mut self, id: NodeId, key: &str, value: impl Into<String>) {
        let value = value.into();
        let attributes = &mut self.get_mut(id).attributes;
        match attributes.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => attributes.push((key.to_string(), value)),
        }
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.get(id).text.as_deref()
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        self.get_mut(id).text = Some(text.into());
    }

    /// Append `child` as the last child of `parent`, detaching it first
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let index = self.children(parent).len();
        self.insert_child(parent, index, child);
    }

    /// Insert `child` at `index` among the children of `parent`, detaching it first
    ///
    /// An `index` past the end appends.
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) {
        self.detach(child);
        let children = &mut self.get_mut(parent).children;
        let index = index.min(children.len());
        children.insert(index, child);
        self.get_mut(child).parent = Some(parent);
    }

    /// Append a block-level element (`w:p`, `w:tbl`) as the last block item of `parent`
    ///
    /// A trailing `w:sectPr` stays the final child of a body.
    pub fn append_block(&mut self, parent: NodeId, child: NodeId) {
        let children = self.children(parent);
        let index = match children.last() {
            Some(&last) if self.is(last, wml::SECT_PR) => children.len() - 1,
            _ => children.len(),
        };
        self.insert_child(parent, index, child);
    }

    /// Unlink an element from its parent; a no-op for the root or detached elements
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.get_mut(id).parent.take() {
            self.get_mut(parent).children.retain(|&c| c != id);
        }
    }

    /// Check whether an element is reachable from the root
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current == self.root
    }

    /// All descendants of `id` in document (pre-)order, excluding `id` itself
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Every numbering identifier (`w:numId/@w:val`) used anywhere below `id`
    ///
    /// Values that do not parse as unsigned integers are ignored.
    pub fn num_ids(&self, id: NodeId) -> BTreeSet<u32> {
        self.descendants(id)
            .into_iter()
            .filter(|&node| self.is(node, wml::NUM_ID))
            .filter_map(|node| self.attr(node, wml::VAL))
            .filter_map(|val| val.trim().parse().ok())
            .collect()
    }
}
