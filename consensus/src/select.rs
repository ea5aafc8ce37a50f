//! Chain selection: drive the work accumulator over every header and keep
//! the maximum.

use crate::chain::Chain;
use crate::error::ConsensusError;
use crate::work::{total_work, WorkCache};
use bestchain_store::HeaderStore;
use bestchain_types::Header;

/// Select the chain with the greatest cumulative work.
///
/// Headers are visited in ascending id order. Each total is inserted into
/// the cache before the comparison, so headers processed later reuse it as
/// a cached ancestor prefix. Ties on total work keep the first header
/// encountered — the smallest id — a committed behavior, not a container
/// accident.
pub fn select_best(store: &HeaderStore) -> Result<Chain, ConsensusError> {
    let mut cache = WorkCache::new();
    let mut best: Option<&Header> = None;
    let mut most_work: u64 = 0;

    for header in store.iter() {
        let work = total_work(store, &cache, header)?;
        cache.insert(header.id, work);

        if best.is_none() || work > most_work {
            best = Some(header);
            most_work = work;
        }
    }

    let best = match best {
        Some(header) => header,
        None => return Err(ConsensusError::EmptyStore),
    };

    // Reconstruct tip-first, then reverse to root-first order. Bounded like
    // the accumulator walk: an acyclic chain holds at most the whole store.
    let bound = store.len();
    let mut headers = vec![*best];
    let mut visitor = best;

    while let Some(parent) = store.get(&visitor.parent) {
        if headers.len() >= bound {
            return Err(ConsensusError::CycleDetected {
                start: best.id.to_string(),
                bound,
            });
        }
        headers.push(*parent);
        visitor = parent;
    }

    headers.reverse();
    Ok(Chain::from_root_first(headers))
}
