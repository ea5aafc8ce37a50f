use thiserror::Error;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("truncated header record: {got} trailing bytes, expected {expected}")]
    TruncatedRecord { got: usize, expected: usize },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
