//! Numbering identifier allocation
//!
//! Every allocation scans the whole document tree for `w:numId` values, so ids
//! claimed through any container (body, table cells, ...) are seen. The scan
//! is united with the allocator's own reservations and a free id is found by
//! walking the sorted in-use set once: allocation always terminates, and a
//! full range is reported as [`BlockError::AllocationExhausted`].

use std::collections::BTreeSet;
use std::fmt;

use blkdoc_oxml::Tree;

use crate::error::{BlockError, Result};
use crate::settings::{AllocationStrategy, NumberingSettings};

/// Key linking the paragraphs of one logical list (`w:numId/@w:val`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NumberingId(pub u32);

impl NumberingId {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NumberingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NumberingId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Hands out numbering ids unused anywhere in a document
#[derive(Debug, Clone)]
pub struct NumberingAllocator {
    settings: NumberingSettings,
    /// Ids handed out but not yet seen in the tree
    reserved: BTreeSet<u32>,
    /// Start of the next search for the counter strategy
    cursor: u32,
}

impl Default for NumberingAllocator {
    fn default() -> Self {
        Self::new(NumberingSettings::default())
    }
}

impl NumberingAllocator {
    pub fn new(settings: NumberingSettings) -> Self {
        Self {
            cursor: settings.min_id,
            settings,
            reserved: BTreeSet::new(),
        }
    }

    pub fn settings(&self) -> &NumberingSettings {
        &self.settings
    }

    /// Return an id that no `w:numId` in `tree` uses and that is not reserved
    ///
    /// With `reserve_on_allocate`, the id stays reserved until it shows up in
    /// the tree or is [released](Self::release). Without it, two allocations
    /// with no paragraph claiming the first id in between return the same id.
    pub fn allocate(&mut self, tree: &Tree) -> Result<NumberingId> {
        let in_use = tree.num_ids(tree.root());
        // claimed ids are tracked by the tree from now on
        self.reserved.retain(|id| !in_use.contains(id));

        let mut taken = in_use;
        taken.extend(self.reserved.iter().copied());

        let NumberingSettings { min_id, max_id, .. } = self.settings;
        let found = match self.settings.strategy {
            AllocationStrategy::LowestUnused => first_free(&taken, min_id, max_id),
            AllocationStrategy::Counter => first_free(&taken, self.cursor.max(min_id), max_id)
                .or_else(|| first_free(&taken, min_id, max_id)),
        };

        let Some(id) = found else {
            log::warn!(
                "Numbering id range {}..={} exhausted ({} ids in use)",
                min_id,
                max_id,
                taken.len()
            );
            return Err(BlockError::AllocationExhausted {
                min: min_id,
                max: max_id,
            });
        };

        if self.settings.reserve_on_allocate {
            self.reserved.insert(id);
        }
        self.cursor = id.saturating_add(1);
        log::debug!("Allocated numbering id {} ({} in use)", id, taken.len());
        Ok(NumberingId(id))
    }

    /// Drop a reservation; returns whether the id was reserved
    pub fn release(&mut self, id: NumberingId) -> bool {
        self.reserved.remove(&id.0)
    }

    /// Mark a reserved id as attached to a paragraph; the tree tracks it from now on
    pub fn claim(&mut self, id: NumberingId) {
        self.reserved.remove(&id.0);
    }

    /// Check whether an id is reserved and not yet claimed by a paragraph
    pub fn is_reserved(&self, id: NumberingId) -> bool {
        self.reserved.contains(&id.0)
    }
}

/// Lowest value in `lo..=hi` missing from `taken`
fn first_free(taken: &BTreeSet<u32>, lo: u32, hi: u32) -> Option<u32> {
    if lo > hi {
        return None;
    }
    let mut candidate = lo;
    for &used in taken.range(lo..=hi) {
        if used != candidate {
            break;
        }
        if candidate == hi {
            return None;
        }
        candidate += 1;
    }
    Some(candidate)
}
