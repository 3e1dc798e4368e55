//! Table views

use std::fmt;

use blkdoc_oxml::{wml, NodeId, Tree};

use crate::container::ContainerView;
use crate::shared::Length;

/// Read-only view of a `w:tbl` element
#[derive(Clone, Copy)]
pub struct Table<'a> {
    tree: &'a Tree,
    node: NodeId,
}

impl<'a> Table<'a> {
    pub(crate) fn new(tree: &'a Tree, node: NodeId) -> Self {
        Self { tree, node }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn row_count(&self) -> usize {
        wml::tbl_rows(self.tree, self.node).len()
    }

    /// Number of grid columns
    pub fn column_count(&self) -> usize {
        self.column_widths().len()
    }

    /// Grid column widths, in document order
    pub fn column_widths(&self) -> Vec<Length> {
        wml::grid_col_widths(self.tree, self.node)
            .into_iter()
            .map(Length::from_twips)
            .collect()
    }

    /// Sum of the grid column widths
    pub fn width(&self) -> Length {
        self.column_widths().into_iter().sum()
    }

    /// Handle of the cell at (`row`, `col`)
    pub fn cell(&self, row: usize, col: usize) -> Option<NodeId> {
        wml::tbl_cell(self.tree, self.node, row, col)
    }

    /// The cell at (`row`, `col`) as a block-item container
    pub fn cell_view(&self, row: usize, col: usize) -> Option<ContainerView<'a>> {
        self.cell(row, col)
            .map(|cell| ContainerView::new_unchecked(self.tree, cell))
    }
}

impl PartialEq for Table<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.node == other.node
    }
}

impl Eq for Table<'_> {}

impl fmt::Debug for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("node", &self.node)
            .field("rows", &self.row_count())
            .field("columns", &self.column_count())
            .finish()
    }
}
