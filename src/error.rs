use thiserror::Error;

/// Why a candidate block was refused by the chain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("bad index: got {got} | expected {expected}")]
    BadIndex { expected: u64, got: u64 },

    #[error("bad block timestamp: got {got} | last: {last}")]
    NonMonotonicTimestamp { last: i64, got: i64 },

    #[error("bad prev hash: got {got} | expected {expected}")]
    BrokenLink { expected: String, got: String },
}
