//! # blkdoc
//!
//! Block-item containers for WordprocessingML documents.
//!
//! This crate provides:
//! - Appending paragraphs and tables to a container (body, table cell, ...)
//! - Numbering identifiers that are unique across the whole document
//! - List groups derived from the paragraphs sharing a numbering identifier
//!
//! ## Example
//!
//! ```
//! use blkdoc::{Document, Length};
//!
//! let mut doc = Document::new();
//! let mut body = doc.body_mut();
//! body.add_paragraph("Shopping", Some("Heading1"));
//!
//! let list = body.add_list(Some("ListBullet"), 0)?;
//! list.add_paragraph(&mut body, "Bread")?;
//! list.add_paragraph(&mut body, "Milk")?;
//!
//! body.add_table(2, 3, Length::from_inches(6.0))?;
//!
//! assert_eq!(body.paragraphs().len(), 4);
//! assert_eq!(list.paragraphs(&body.view()).len(), 3);
//! assert_eq!(body.lists().len(), 1);
//! # Ok::<(), blkdoc::BlockError>(())
//! ```

pub mod container;
pub mod document;
pub mod error;
pub mod list;
pub mod numbering;
pub mod paragraph;
pub mod settings;
pub mod shared;
pub mod table;

pub use container::{BlockItem, BlockItemContainer, ContainerView};
pub use document::Document;
pub use error::{BlockError, Result};
pub use list::ListGroup;
pub use numbering::{NumberingAllocator, NumberingId};
pub use paragraph::{Paragraph, ParagraphMut, Run};
pub use settings::{AllocationStrategy, NumberingSettings, RemainderPolicy, Settings, TableSettings};
pub use shared::Length;
pub use table::Table;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
