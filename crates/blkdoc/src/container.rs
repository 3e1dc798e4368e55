//! Block-item containers
//!
//! A container is any element whose children are paragraphs and tables:
//! the document body, a table cell, a header or footer, a footnote, a
//! comment or a text box. [`ContainerView`] reads one; [`BlockItemContainer`]
//! borrows the whole [`Document`] mutably and appends to one.
//!
//! Neither caches anything. Every read walks the live children, so changes
//! made through another container over the same tree are always visible.

use blkdoc_oxml::{wml, NodeId, Tree};

use crate::document::Document;
use crate::error::{BlockError, Result};
use crate::list::ListGroup;
use crate::numbering::NumberingId;
use crate::paragraph::{Paragraph, ParagraphMut};
use crate::shared::Length;
use crate::table::Table;

/// A paragraph or a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockItem<'a> {
    Paragraph(Paragraph<'a>),
    Table(Table<'a>),
}

impl BlockItem<'_> {
    pub fn node(&self) -> NodeId {
        match self {
            BlockItem::Paragraph(p) => p.node(),
            BlockItem::Table(t) => t.node(),
        }
    }
}

/// Read-only view of a block-item container
#[derive(Debug, Clone, Copy)]
pub struct ContainerView<'a> {
    tree: &'a Tree,
    element: NodeId,
}

impl<'a> ContainerView<'a> {
    /// View `element`, which must be a container element attached to `tree`
    pub fn new(tree: &'a Tree, element: NodeId) -> Result<Self> {
        check_container(tree, element)?;
        Ok(Self::new_unchecked(tree, element))
    }

    pub(crate) fn new_unchecked(tree: &'a Tree, element: NodeId) -> Self {
        Self { tree, element }
    }

    /// Handle of the container element
    pub fn element(&self) -> NodeId {
        self.element
    }

    /// Paragraphs and tables, interleaved in document order
    pub fn block_items(&self) -> Vec<BlockItem<'a>> {
        self.tree
            .children(self.element)
            .iter()
            .filter_map(|&node| match self.tree.name(node) {
                wml::P => Some(BlockItem::Paragraph(Paragraph::new(self.tree, node))),
                wml::TBL => Some(BlockItem::Table(Table::new(self.tree, node))),
                _ => None,
            })
            .collect()
    }

    /// All paragraphs in document order, list members included
    pub fn paragraphs(&self) -> Vec<Paragraph<'a>> {
        self.tree
            .children_named(self.element, wml::P)
            .map(|node| Paragraph::new(self.tree, node))
            .collect()
    }

    /// All tables in document order
    pub fn tables(&self) -> Vec<Table<'a>> {
        self.tree
            .children_named(self.element, wml::TBL)
            .map(|node| Table::new(self.tree, node))
            .collect()
    }

    /// One group per distinct numbering id among the paragraphs
    ///
    /// Groups come in order of their first paragraph. Level and style are
    /// taken from that first paragraph.
    pub fn lists(&self) -> Vec<ListGroup> {
        let mut groups: Vec<ListGroup> = Vec::new();
        for paragraph in self.paragraphs() {
            let Some(num_id) = paragraph.numbering_id() else {
                continue;
            };
            if groups.iter().any(|g| g.numbering_id() == num_id) {
                continue;
            }
            groups.push(ListGroup::new(
                self.element,
                num_id,
                paragraph.style().map(str::to_owned),
                paragraph.level().unwrap_or(0),
            ));
        }
        groups
    }
}

/// Mutable access to one container of a document
pub struct BlockItemContainer<'a> {
    doc: &'a mut Document,
    element: NodeId,
}

impl<'a> BlockItemContainer<'a> {
    /// Borrow `element` of `doc` as a container
    pub fn new(doc: &'a mut Document, element: NodeId) -> Result<Self> {
        check_container(doc.tree(), element)?;
        Ok(Self::new_unchecked(doc, element))
    }

    pub(crate) fn new_unchecked(doc: &'a mut Document, element: NodeId) -> Self {
        Self { doc, element }
    }

    /// Handle of the container element
    pub fn element(&self) -> NodeId {
        self.element
    }

    /// Read-only view of this container
    pub fn view(&self) -> ContainerView<'_> {
        ContainerView::new_unchecked(self.doc.tree(), self.element)
    }

    pub fn block_items(&self) -> Vec<BlockItem<'_>> {
        self.view().block_items()
    }

    pub fn paragraphs(&self) -> Vec<Paragraph<'_>> {
        self.view().paragraphs()
    }

    pub fn tables(&self) -> Vec<Table<'_>> {
        self.view().tables()
    }

    pub fn lists(&self) -> Vec<ListGroup> {
        self.view().lists()
    }

    /// Append a paragraph as the last block item
    ///
    /// A non-empty `text` becomes a single run. Without `style` the paragraph
    /// has no explicit style and renders with the document default.
    pub fn add_paragraph(&mut self, text: &str, style: Option<&str>) -> ParagraphMut<'_> {
        let node = self.add_p();
        let mut paragraph = ParagraphMut::new(self.doc.tree_mut(), node);
        if !text.is_empty() {
            paragraph.add_run(text);
        }
        if style.is_some() {
            paragraph.set_style(style);
        }
        paragraph
    }

    /// Append a `rows` x `cols` table of total `width` as the last block item
    ///
    /// The width is split evenly between the columns; the remainder of the
    /// division goes where the `tables.remainder` setting says. Zero rows or
    /// columns give an empty-dimension table.
    pub fn add_table(&mut self, rows: usize, cols: usize, width: Length) -> Result<Table<'_>> {
        if width.twips() < 0 {
            return Err(BlockError::InvalidDimension {
                what: "table width",
                value: width.twips(),
            });
        }

        let policy = self.doc.settings().tables.remainder;
        let widths: Vec<i64> = width
            .distribute(cols, policy)
            .into_iter()
            .map(Length::twips)
            .collect();

        let tree = self.doc.tree_mut();
        let tbl = wml::new_tbl(tree, rows, &widths);
        tree.append_block(self.element, tbl);
        log::debug!("Added {}x{} table of width {}", rows, cols, width);

        Ok(Table::new(self.doc.tree(), tbl))
    }

    /// Start a new list: allocate a numbering id and add the first item
    ///
    /// The first item is an empty paragraph appended through
    /// [`add_paragraph`](Self::add_paragraph), carrying `style` and the new
    /// id at `level`. Further items are added with [`ListGroup::add_paragraph`].
    pub fn add_list(&mut self, style: Option<&str>, level: u32) -> Result<ListGroup> {
        let num_id = self.generate_numbering_id()?;
        let group = ListGroup::new(self.element, num_id, style.map(str::to_owned), level);
        group.add_paragraph(self, "")?;
        self.doc.claim_numbering_id(num_id);
        log::debug!("Started list {} at level {}", num_id, level);
        Ok(group)
    }

    /// A numbering id no paragraph anywhere in the document uses
    pub fn generate_numbering_id(&mut self) -> Result<NumberingId> {
        self.doc.allocate_numbering_id()
    }

    /// Append an empty `w:p` and return its handle
    fn add_p(&mut self) -> NodeId {
        let tree = self.doc.tree_mut();
        let p = wml::new_p(tree);
        tree.append_block(self.element, p);
        p
    }
}

fn check_container(tree: &Tree, element: NodeId) -> Result<()> {
    if !tree.contains(element) {
        return Err(BlockError::NotAContainer(format!(
            "#{} (not in this tree)",
            element.index()
        )));
    }
    let name = tree.name(element);
    if !wml::is_container(name) {
        return Err(BlockError::NotAContainer(name.to_string()));
    }
    if !tree.is_attached(element) {
        return Err(BlockError::NotAContainer(format!("{} (detached)", name)));
    }
    Ok(())
}
