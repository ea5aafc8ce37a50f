use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsensusError {
    #[error("header set is empty: no chain to select")]
    EmptyStore,

    #[error("parent cycle detected walking ancestry of {start} ({bound} headers in store)")]
    CycleDetected { start: String, bound: usize },
}
