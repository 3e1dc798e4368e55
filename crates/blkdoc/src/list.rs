//! List groups
//!
//! A list is not an element of its own: it is the set of paragraphs in a
//! container that share one numbering id. [`ListGroup`] is a handle naming
//! that id; its members are looked up again on every call.

use blkdoc_oxml::NodeId;

use crate::container::{BlockItemContainer, ContainerView};
use crate::error::{BlockError, Result};
use crate::numbering::NumberingId;
use crate::paragraph::{Paragraph, ParagraphMut};

/// Paragraphs of one container sharing a numbering id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListGroup {
    container: NodeId,
    num_id: NumberingId,
    style: Option<String>,
    level: u32,
}

impl ListGroup {
    pub(crate) fn new(
        container: NodeId,
        num_id: NumberingId,
        style: Option<String>,
        level: u32,
    ) -> Self {
        Self {
            container,
            num_id,
            style,
            level,
        }
    }

    /// Handle of the container the list lives in
    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn numbering_id(&self) -> NumberingId {
        self.num_id
    }

    /// Paragraph style new items receive
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Indentation level new items receive
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current members, in document order
    pub fn paragraphs<'a>(&self, container: &ContainerView<'a>) -> Vec<Paragraph<'a>> {
        container
            .paragraphs()
            .into_iter()
            .filter(|p| p.numbering_id() == Some(self.num_id))
            .collect()
    }

    /// Append a new item at the end of `container`
    ///
    /// `container` must be the one the list lives in.
    pub fn add_paragraph<'c>(
        &self,
        container: &'c mut BlockItemContainer<'_>,
        text: &str,
    ) -> Result<ParagraphMut<'c>> {
        self.add_paragraph_at(container, text, self.level)
    }

    /// Append a new item at an explicit indentation level
    pub fn add_paragraph_at<'c>(
        &self,
        container: &'c mut BlockItemContainer<'_>,
        text: &str,
        level: u32,
    ) -> Result<ParagraphMut<'c>> {
        if container.element() != self.container {
            return Err(BlockError::ContainerMismatch {
                expected: self.container,
                found: container.element(),
            });
        }
        let mut paragraph = container.add_paragraph(text, self.style.as_deref());
        paragraph.set_numbering(self.num_id, level);
        Ok(paragraph)
    }
}
