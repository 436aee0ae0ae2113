use thiserror::Error;

/// Everything that can go wrong when constructing, solving, or simulating
/// an inventory problem.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InventoryError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("initial inventory {got} outside the allowed range 0..={max}")]
    StartOutOfRange { got: i64, max: i64 },

    #[error("no solved policy available, run solve() first")]
    NotSolved,
}
