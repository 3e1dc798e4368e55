//! Settings
//!
//! Loaded from TOML; every section and field is optional:
//!
//! ```toml
//! [numbering]
//! strategy = "lowest-unused"   # or "counter"
//! min_id = 0
//! max_id = 999999
//! reserve_on_allocate = true
//!
//! [tables]
//! remainder = "last-column"    # or "spread"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BlockError, Result};

/// How the numbering allocator picks the next identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AllocationStrategy {
    /// Smallest free id in the range
    #[default]
    LowestUnused,
    /// Next free id after the previous allocation, wrapping at the top of the range
    Counter,
}

/// Where the integer-division remainder of a table width goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RemainderPolicy {
    /// The last column absorbs the whole remainder
    #[default]
    LastColumn,
    /// The first `remainder` columns are one twip wider
    Spread,
}

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Numbering identifier allocation
    pub numbering: NumberingSettings,
    /// Table creation
    pub tables: TableSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(toml_str)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&content)?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject settings no allocator could honour
    pub fn validate(&self) -> Result<()> {
        let numbering = &self.numbering;
        if numbering.min_id > numbering.max_id {
            return Err(BlockError::InvalidDimension {
                what: "numbering id range (min_id above max_id)",
                value: i64::from(numbering.min_id),
            });
        }
        Ok(())
    }
}

/// Numbering allocator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberingSettings {
    pub strategy: AllocationStrategy,
    /// Lowest id the allocator hands out
    pub min_id: u32,
    /// Highest id the allocator hands out (inclusive)
    pub max_id: u32,
    /// Keep handed-out ids reserved until a paragraph claims them
    pub reserve_on_allocate: bool,
}

impl Default for NumberingSettings {
    fn default() -> Self {
        Self {
            strategy: AllocationStrategy::LowestUnused,
            min_id: 0,
            max_id: 999_999,
            reserve_on_allocate: true,
        }
    }
}

/// Table creation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TableSettings {
    pub remainder: RemainderPolicy,
}
