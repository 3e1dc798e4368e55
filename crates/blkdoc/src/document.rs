//! The document: owner of the tree and of the numbering allocator
//!
//! A `Document` holds one WordprocessingML part. That is usually the main
//! document part (`w:document/w:body`), but a header, footer or any other
//! part whose root is a block-item container works the same way; its
//! top-level container is what [`Document::body`] returns.
//!
//! Containers and list groups only ever hold handles into the document.
//! Mutation goes through [`Document::body_mut`] or
//! [`Document::container_mut`], which borrow the document exclusively, so
//! two mutating views of the same tree cannot exist at once. A `Document`
//! is not synchronized; sharing one across threads is the caller's job.

use blkdoc_oxml::{wml, NodeId, OxmlError, Tree};

use crate::container::{BlockItemContainer, ContainerView};
use crate::error::{BlockError, Result};
use crate::numbering::{NumberingAllocator, NumberingId};
use crate::settings::Settings;

/// A WordprocessingML part with a top-level block-item container
#[derive(Debug, Clone)]
pub struct Document {
    tree: Tree,
    /// `w:body`, or the root of a container-rooted part
    main: NodeId,
    numbering: NumberingAllocator,
    settings: Settings,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty main document with default settings
    pub fn new() -> Self {
        let (tree, body) = wml::new_document();
        Self::from_parts(tree, body, Settings::default())
    }

    /// Create an empty main document
    pub fn with_settings(settings: Settings) -> Result<Self> {
        settings.validate()?;
        let (tree, body) = wml::new_document();
        Ok(Self::from_parts(tree, body, settings))
    }

    /// Create an empty part rooted at the container element `root`, e.g. `w:hdr`
    pub fn new_part(root: &str, settings: Settings) -> Result<Self> {
        if !wml::is_container(root) {
            return Err(BlockError::NotAContainer(root.to_string()));
        }
        settings.validate()?;
        let tree = wml::new_part(root);
        let main = tree.root();
        Ok(Self::from_parts(tree, main, settings))
    }

    /// Parse a main document part (`word/document.xml`) with default settings
    pub fn from_xml(xml: &[u8]) -> Result<Self> {
        Self::from_xml_with_settings(xml, Settings::default())
    }

    /// Parse a main document part; the root must have a `w:body` child
    pub fn from_xml_with_settings(xml: &[u8], settings: Settings) -> Result<Self> {
        settings.validate()?;
        let tree = Tree::parse(xml)?;
        let body = wml::body(&tree).ok_or_else(|| {
            OxmlError::Malformed(format!("<{}> has no w:body", tree.name(tree.root())))
        })?;
        Ok(Self::from_parts(tree, body, settings))
    }

    /// Parse any part with default settings
    pub fn from_part_xml(xml: &[u8]) -> Result<Self> {
        Self::from_part_xml_with_settings(xml, Settings::default())
    }

    /// Parse any part: a main document, or one rooted at a container
    ///
    /// Headers (`w:hdr`) and footers (`w:ftr`) are the common cases. Numbering
    /// ids are allocated against this part's tree only.
    pub fn from_part_xml_with_settings(xml: &[u8], settings: Settings) -> Result<Self> {
        settings.validate()?;
        let tree = Tree::parse(xml)?;
        let main = wml::main_container(&tree)
            .ok_or_else(|| BlockError::NotAContainer(tree.name(tree.root()).to_string()))?;
        Ok(Self::from_parts(tree, main, settings))
    }

    fn from_parts(tree: Tree, main: NodeId, settings: Settings) -> Self {
        log::debug!(
            "Opened <{}> part, top-level container <{}>",
            tree.name(tree.root()),
            tree.name(main)
        );
        Self {
            tree,
            main,
            numbering: NumberingAllocator::new(settings.numbering.clone()),
            settings,
        }
    }

    /// Serialize the part
    pub fn to_xml(&self) -> String {
        self.tree.to_xml()
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub(crate) fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn numbering(&self) -> &NumberingAllocator {
        &self.numbering
    }

    /// Access the allocator, e.g. to release an unused reservation
    pub fn numbering_mut(&mut self) -> &mut NumberingAllocator {
        &mut self.numbering
    }

    pub(crate) fn allocate_numbering_id(&mut self) -> Result<NumberingId> {
        self.numbering.allocate(&self.tree)
    }

    pub(crate) fn claim_numbering_id(&mut self, id: NumberingId) {
        self.numbering.claim(id);
    }

    /// Read-only view of the top-level container
    pub fn body(&self) -> ContainerView<'_> {
        ContainerView::new_unchecked(&self.tree, self.main)
    }

    /// Mutable access to the top-level container
    pub fn body_mut(&mut self) -> BlockItemContainer<'_> {
        let main = self.main;
        BlockItemContainer::new_unchecked(self, main)
    }

    /// Every container of the part, top-level container first
    ///
    /// Table cells, text boxes and nested containers follow in document order.
    pub fn containers(&self) -> Vec<NodeId> {
        wml::containers(&self.tree)
    }

    /// Read-only view of any container element (e.g. a table cell)
    pub fn container(&self, element: NodeId) -> Result<ContainerView<'_>> {
        ContainerView::new(&self.tree, element)
    }

    /// Mutable access to any container element (e.g. a table cell)
    pub fn container_mut(&mut self, element: NodeId) -> Result<BlockItemContainer<'_>> {
        BlockItemContainer::new(self, element)
    }

    /// Detach a paragraph or table from its container
    ///
    /// Numbering ids used only by removed paragraphs become free again.
    pub fn remove(&mut self, node: NodeId) -> Result<()> {
        if !self.tree.contains(node) {
            return Err(BlockError::NotABlockItem(format!(
                "#{} (not in this tree)",
                node.index()
            )));
        }
        let name = self.tree.name(node);
        if name != wml::P && name != wml::TBL {
            return Err(BlockError::NotABlockItem(name.to_string()));
        }
        self.tree.detach(node);
        Ok(())
    }
}
