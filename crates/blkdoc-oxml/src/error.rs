//! Error types for markup tree operations

use thiserror::Error;

/// Errors that can occur while reading or building the element tree
#[derive(Error, Debug)]
pub enum OxmlError {
    /// Error parsing XML content
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute in XML content
    #[error("XML attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    /// Element or attribute name that is not valid UTF-8
    #[error("Invalid UTF-8 in XML name: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Structurally invalid document (no root, unbalanced elements, ...)
    #[error("Malformed document: {0}")]
    Malformed(String),
}

/// Result type for markup tree operations
pub type Result<T> = std::result::Result<T, OxmlError>;
