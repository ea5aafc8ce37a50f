//! Memoized cumulative-work accumulation.
//!
//! The total work of a header is its own work plus the total of its stored
//! parent, down to the first ancestor whose parent is absent from the
//! store. Totals are memoized per header so branches sharing long common
//! ancestry never re-walk the shared prefix.

use crate::error::ConsensusError;
use bestchain_store::HeaderStore;
use bestchain_types::{Header, HeaderHash};
use std::collections::HashMap;

/// Finalized cumulative totals keyed by header id.
///
/// Scoped to a single selection run. Entries are complete root-reaching
/// sums and are never invalidated, so a cache must not outlive the store
/// it was built against.
#[derive(Debug, Default)]
pub struct WorkCache {
    totals: HashMap<HeaderHash, u64>,
}

impl WorkCache {
    pub fn new() -> Self {
        Self {
            totals: HashMap::new(),
        }
    }

    /// Record the finalized total for a header.
    pub fn insert(&mut self, id: HeaderHash, total: u64) {
        self.totals.insert(id, total);
    }

    pub fn get(&self, id: &HeaderHash) -> Option<u64> {
        self.totals.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Outcome of one ancestry walk: the cumulative total plus how many
/// headers were visited before a cached total or the root ended the walk.
pub(crate) struct Walk {
    pub total: u64,
    pub steps: usize,
}

/// Walk ancestry from `start`, accumulating work until a cached total or
/// the root is reached.
///
/// The cache is consulted at the top of every step, before the visitor's
/// own work is added. The walk is bounded by the store size; exceeding
/// that bound means the parent pointers form a cycle.
pub(crate) fn walk(
    store: &HeaderStore,
    cache: &WorkCache,
    start: &Header,
) -> Result<Walk, ConsensusError> {
    let bound = store.len();
    let mut visitor = start;
    let mut total: u64 = 0;
    let mut steps = 0;

    loop {
        if let Some(cached) = cache.get(&visitor.id) {
            return Ok(Walk {
                total: total.saturating_add(cached),
                steps,
            });
        }

        total = total.saturating_add(u64::from(visitor.work));
        steps += 1;
        if steps > bound {
            return Err(ConsensusError::CycleDetected {
                start: start.id.to_string(),
                bound,
            });
        }

        match store.get(&visitor.parent) {
            Some(parent) => visitor = parent,
            None => return Ok(Walk { total, steps }),
        }
    }
}

/// Total work from `header` back to its terminal ancestor.
///
/// Base case: a header whose parent is absent contributes only its own
/// work. Callers memoize by inserting the result into `cache` keyed by
/// `header.id`; this function never writes the cache itself.
pub fn total_work(
    store: &HeaderStore,
    cache: &WorkCache,
    header: &Header,
) -> Result<u64, ConsensusError> {
    walk(store, cache, header).map(|w| w.total)
}
