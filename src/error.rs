use thiserror::Error;

use crate::approach::Approach;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SumError {
    #[error("sum to {n} does not fit in 64 bits")]
    Overflow { n: u64 },

    #[error("recursion depth {n} exceeds the limit of {limit}")]
    RecursionTooDeep { n: u64, limit: u64 },

    #[error("{approach} disagrees at n = {n}: expected {expected}, got {actual}")]
    Mismatch {
        approach: Approach,
        n: u64,
        expected: u64,
        actual: u64,
    },
}

pub type Result<T> = std::result::Result<T, SumError>;
