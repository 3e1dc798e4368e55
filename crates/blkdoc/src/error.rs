//! Error types for block-item container operations

use thiserror::Error;

/// Errors that can occur while building or querying block content
#[derive(Error, Debug)]
pub enum BlockError {
    /// A dimension or range bound outside its valid domain
    #[error("Invalid {what}: {value}")]
    InvalidDimension {
        /// Which dimension was rejected (e.g. "table width")
        what: &'static str,
        /// The rejected value
        value: i64,
    },

    /// Every numbering identifier in the configured range is taken
    #[error("No free numbering id left in range {min}..={max}")]
    AllocationExhausted { min: u32, max: u32 },

    /// The element cannot hold block items
    #[error("Element <{0}> is not a block-item container")]
    NotAContainer(String),

    /// The element is neither a paragraph nor a table
    #[error("Element <{0}> is not a block item")]
    NotABlockItem(String),

    /// A list item was added through a container the list does not live in
    #[error("List lives in container {expected:?}, not {found:?}")]
    ContainerMismatch {
        expected: blkdoc_oxml::NodeId,
        found: blkdoc_oxml::NodeId,
    },

    /// Error from the markup tree
    #[error("Markup error: {0}")]
    Oxml(#[from] blkdoc_oxml::OxmlError),

    /// Error parsing settings
    #[error("Settings error: {0}")]
    Config(#[from] toml::de::Error),

    /// Error reading files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for block-item container operations
pub type Result<T> = std::result::Result<T, BlockError>;
