//! The selected chain and its height-indexed materialization.

use bestchain_types::{Header, HeaderHash};
use std::collections::BTreeMap;

/// An ordered chain of headers, root first, tip last.
///
/// Invariants: each element's parent is the id of the element before it,
/// and the root's parent is absent from the store it was selected from.
/// A chain is never empty — an empty selection is an error, not a chain.
#[derive(Clone, Debug)]
pub struct Chain {
    headers: Vec<Header>,
}

impl Chain {
    /// Build from a root-first sequence. Callers uphold the link invariant.
    pub(crate) fn from_root_first(headers: Vec<Header>) -> Self {
        debug_assert!(!headers.is_empty());
        Self { headers }
    }

    /// The root: the header whose parent is unknown to the store.
    pub fn root(&self) -> &Header {
        &self.headers[0]
    }

    /// The tip: the header carrying the greatest cumulative work.
    pub fn tip(&self) -> &Header {
        &self.headers[self.headers.len() - 1]
    }

    /// Height of the tip, with the root at height 0.
    pub fn height(&self) -> usize {
        self.headers.len() - 1
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Iterate from root to tip.
    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.headers.iter()
    }
}

/// Assign each chain header its height (root = 0), keyed by id.
///
/// The ordered map supplies the ascending-by-identity order the output
/// format commits to, independent of chain order.
pub fn height_index(chain: &Chain) -> BTreeMap<HeaderHash, i32> {
    chain
        .iter()
        .enumerate()
        .map(|(height, header)| (header.id, height as i32))
        .collect()
}
