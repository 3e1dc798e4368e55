//! # blkdoc-oxml
//!
//! The markup layer under blkdoc: an arena-backed WordprocessingML element
//! tree with XML reading and writing, plus the `wml` primitives for
//! paragraphs, runs, numbering properties and tables.
//!
//! ## Example
//!
//! ```
//! use blkdoc_oxml::{wml, Tree};
//!
//! let (mut tree, body) = wml::new_document();
//! let p = wml::new_p(&mut tree);
//! wml::add_r(&mut tree, p, "Hello");
//! tree.append_block(body, p);
//!
//! let xml = tree.to_xml();
//! let reparsed = Tree::parse(xml.as_bytes())?;
//! assert_eq!(reparsed.len(), tree.len());
//! # Ok::<(), blkdoc_oxml::OxmlError>(())
//! ```

pub mod error;
mod reader;
pub mod tree;
pub mod wml;
mod writer;

pub use error::{OxmlError, Result};
pub use tree::{Element, NodeId, Tree};
