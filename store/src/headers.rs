//! The header store: a key-unique map from identity to header.

use bestchain_types::{Header, HeaderHash};
use std::collections::BTreeMap;

/// Maps header identity to the header record.
///
/// Keys are unique; inserting an id twice keeps the latest record, which
/// is the dedup step for repeated input. The ordered map iterates in
/// ascending id order — the committed deterministic order for selection,
/// tie-breaking, and output.
#[derive(Debug, Default)]
pub struct HeaderStore {
    headers: BTreeMap<HeaderHash, Header>,
}

impl HeaderStore {
    pub fn new() -> Self {
        Self {
            headers: BTreeMap::new(),
        }
    }

    /// Insert a header, overwriting any previous record with the same id.
    pub fn put(&mut self, header: Header) {
        self.headers.insert(header.id, header);
    }

    /// Look up a header by id. Absence is a valid "no parent" signal.
    pub fn get(&self, id: &HeaderHash) -> Option<&Header> {
        self.headers.get(id)
    }

    /// Whether an id is present.
    pub fn contains(&self, id: &HeaderHash) -> bool {
        self.headers.contains_key(id)
    }

    /// Number of distinct headers stored.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Iterate headers in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.headers.values()
    }
}
