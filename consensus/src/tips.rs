//! Chain tip discovery.

use bestchain_store::HeaderStore;
use bestchain_types::{Header, HeaderHash};
use std::collections::HashSet;

/// Find every header that no other header references as its parent.
///
/// Two linear passes: the first marks each id that appears as the parent
/// of a stored header and is itself present; the second collects the
/// headers missing from that marker set. The result follows store order
/// (ascending id).
///
/// Used for diagnostic reporting. Selection does not start from tips — it
/// walks every header — so a malformed set where the heaviest header has
/// children still selects correctly.
pub fn find_tips(store: &HeaderStore) -> Vec<&Header> {
    let mut has_child: HashSet<HeaderHash> = HashSet::new();
    for header in store.iter() {
        if store.contains(&header.parent) {
            has_child.insert(header.parent);
        }
    }

    store
        .iter()
        .filter(|header| !has_child.contains(&header.id))
        .collect()
}
