//! Fork choice over an unordered header set.
//!
//! Given a populated `HeaderStore`, selects the canonical chain: the
//! root-to-tip path that accumulates the greatest total proof-of-work.
//!
//! ## Module overview
//!
//! - [`tips`] — chain tip discovery (headers no other header references).
//! - [`work`] — memoized cumulative-work accumulation over ancestry walks.
//! - [`select`] — drives the accumulator over every header and picks the
//!   maximum, then reconstructs the root-to-tip path.
//! - [`chain`] — the selected chain and its height-indexed materialization.
//! - [`error`] — consensus error types.
//!
//! Tip finding is diagnostic only; selection walks *every* header, not
//! just tips, so the maximum-work header wins even in a degenerate set
//! where it has children.

pub mod chain;
pub mod error;
pub mod select;
pub mod tips;
pub mod work;

pub use chain::{height_index, Chain};
pub use error::ConsensusError;
pub use select::select_best;
pub use tips::find_tips;
pub use work::{total_work, WorkCache};
