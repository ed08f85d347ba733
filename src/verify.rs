use log::info;
use rayon::prelude::*;

use crate::{
    approach::{Approach, RECURSION_LIMIT},
    error::{Result, SumError},
    sums,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verified {
    pub limit: u64,
    /// Number of `(approach, n)` pairs compared.
    pub checked: u64,
}

/// Checks every approach against the closed form for each `n` in `0..=limit`.
pub fn cross_check(limit: u64) -> Result<Verified> {
    if limit > RECURSION_LIMIT {
        return Err(SumError::RecursionTooDeep {
            n: limit,
            limit: RECURSION_LIMIT,
        });
    }

    let checked = (0..=limit)
        .into_par_iter()
        .map(|n| check_one(n).map(|_| Approach::ALL.len() as u64))
        .try_reduce(|| 0, |a, b| Ok(a + b))?;

    info!("cross-checked {checked} results for n in 0..={limit}");
    Ok(Verified { limit, checked })
}

fn check_one(n: u64) -> Result<()> {
    let expected = sums::checked_formula(n).ok_or(SumError::Overflow { n })?;
    for approach in Approach::ALL {
        compare(approach, n, expected, approach.checked_sum(n))?;
    }
    Ok(())
}

fn compare(approach: Approach, n: u64, expected: u64, actual: Result<u64>) -> Result<()> {
    let actual = actual?;
    if actual != expected {
        return Err(SumError::Mismatch {
            approach,
            n,
            expected,
            actual,
        });
    }
    Ok(())
}
