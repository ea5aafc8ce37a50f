//! The header record: identity, parent link, work proxy.

use crate::hash::HeaderHash;
use serde::{Deserialize, Serialize};

/// A block header reduced to the fields fork choice needs.
///
/// `parent` may name an id absent from the store — a true root, or an
/// orphan whose ancestry was never read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Hash of the full 80-byte record; unique within a store.
    pub id: HeaderHash,
    /// Identity of the predecessor header.
    pub parent: HeaderHash,
    /// Raw 32-bit work proxy summed along a chain.
    pub work: u32,
}

impl Header {
    pub fn new(id: HeaderHash, parent: HeaderHash, work: u32) -> Self {
        Self { id, parent, work }
    }
}
