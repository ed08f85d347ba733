use std::fmt;

use clap::ValueEnum;
use log::debug;

use crate::{
    error::{Result, SumError},
    sums::{self, MAX_N},
};

/// Deepest `n` the recursive approach is allowed to reach through [`Approach::checked_sum`].
pub const RECURSION_LIMIT: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Approach {
    Iterative,
    Formula,
    Recursive,
}

impl Approach {
    /// Every approach, in the order results are printed.
    pub const ALL: [Approach; 3] = [Approach::Iterative, Approach::Formula, Approach::Recursive];

    pub fn label(self) -> &'static str {
        match self {
            Approach::Iterative => "Iterative approach",
            Approach::Formula => "Mathematical formula approach",
            Approach::Recursive => "Recursive approach",
        }
    }

    pub fn time_complexity(self) -> &'static str {
        match self {
            Approach::Iterative | Approach::Recursive => "O(n)",
            Approach::Formula => "O(1)",
        }
    }

    pub fn space_complexity(self) -> &'static str {
        match self {
            Approach::Iterative | Approach::Formula => "O(1)",
            Approach::Recursive => "O(n)",
        }
    }

    pub fn efficiency(self) -> &'static str {
        match self {
            Approach::Iterative => "Moderate",
            Approach::Formula => "High",
            Approach::Recursive => "Low",
        }
    }

    pub fn sum(self, n: u64) -> u64 {
        match self {
            Approach::Iterative => sums::iterative(n),
            Approach::Formula => sums::formula(n),
            Approach::Recursive => sums::recursive(n),
        }
    }

    /// Like [`Approach::sum`], but refuses inputs whose sum overflows a `u64` and, for the
    /// recursive approach, inputs deeper than [`RECURSION_LIMIT`].
    pub fn checked_sum(self, n: u64) -> Result<u64> {
        if n > MAX_N {
            return Err(SumError::Overflow { n });
        }
        if self == Approach::Recursive && n > RECURSION_LIMIT {
            return Err(SumError::RecursionTooDeep {
                n,
                limit: RECURSION_LIMIT,
            });
        }
        debug!("{self:?}: summing 1..={n}");
        Ok(self.sum(n))
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
