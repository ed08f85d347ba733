//! Sum of `1..=n`, computed three ways: a loop, the closed form `n(n + 1) / 2`, and recursion.
//!
//! The crate also builds as a static library exporting each approach over the C ABI.

pub mod approach;
pub mod error;
pub mod report;
pub mod sums;
pub mod verify;

pub use approach::{Approach, RECURSION_LIMIT};
pub use error::{Result, SumError};
pub use sums::{MAX_N, MAX_SUM};
pub use verify::{cross_check, Verified};

/// Returned by the C exports when `n` is out of range for the approach. No valid sum equals it,
/// since [`MAX_SUM`] is below `u64::MAX`.
pub const SUM_ERROR: u64 = u64::MAX;

fn export(approach: Approach, n: u64) -> u64 {
    approach.checked_sum(n).unwrap_or(SUM_ERROR)
}

#[no_mangle]
pub extern "C" fn sum_to_n_iterative(n: u64) -> u64 {
    export(Approach::Iterative, n)
}

#[no_mangle]
pub extern "C" fn sum_to_n_formula(n: u64) -> u64 {
    export(Approach::Formula, n)
}

/// Returns [`SUM_ERROR`] past [`RECURSION_LIMIT`] rather than recursing.
#[no_mangle]
pub extern "C" fn sum_to_n_recursive(n: u64) -> u64 {
    export(Approach::Recursive, n)
}
