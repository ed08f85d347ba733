//! The three ways of adding up `1..=n`.
//!
//! All of them are exact for `n <= MAX_N`. Past that the sum no longer fits in a `u64`; use
//! [`Approach::checked_sum`](crate::Approach::checked_sum) when `n` is not known to be small.

/// Largest `n` whose sum fits in a `u64`.
pub const MAX_N: u64 = 6_074_000_999;

/// `MAX_N * (MAX_N + 1) / 2`
pub const MAX_SUM: u64 = 18_446_744_070_963_499_500;

pub fn iterative(n: u64) -> u64 {
    let mut acc = 0;
    let mut i = 1;

    while i <= n {
        acc += i;
        i += 1;
    }

    acc
}

/// Closed form `n(n + 1) / 2`. Whichever of `n` and `n + 1` is even gets halved first, so the
/// only product ever formed is the sum itself.
pub fn formula(n: u64) -> u64 {
    if n % 2 == 0 {
        (n / 2) * (n + 1)
    } else {
        n * ((n + 1) / 2)
    }
}

/// Recurses once per step, so the stack grows linearly with `n`.
pub fn recursive(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }

    n + recursive(n - 1)
}

pub(crate) fn checked_formula(n: u64) -> Option<u64> {
    let (a, b) = if n % 2 == 0 {
        (n / 2, n.checked_add(1)?)
    } else {
        (n, n / 2 + 1)
    };
    a.checked_mul(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_empty_sum() {
        assert_eq!(iterative(0), 0);
        assert_eq!(formula(0), 0);
        assert_eq!(recursive(0), 0);
    }

    #[test]
    fn one() {
        assert_eq!(iterative(1), 1);
        assert_eq!(formula(1), 1);
        assert_eq!(recursive(1), 1);
    }

    #[test]
    fn five() {
        assert_eq!(iterative(5), 15);
        assert_eq!(formula(5), 15);
        assert_eq!(recursive(5), 15);
    }

    #[test]
    fn all_agree_up_to_a_thousand() {
        for n in 0..=1000u64 {
            let expected = n * (n + 1) / 2;
            assert_eq!(iterative(n), expected, "iterative({n})");
            assert_eq!(formula(n), expected, "formula({n})");
            assert_eq!(recursive(n), expected, "recursive({n})");
        }
    }

    #[test]
    fn recursive_steps_by_n() {
        for n in 1..=1000u64 {
            assert_eq!(recursive(n), recursive(n - 1) + n);
        }
    }

    #[test]
    fn formula_at_the_u64_boundary() {
        assert_eq!(formula(MAX_N), MAX_SUM);
        assert_eq!(checked_formula(MAX_N), Some(MAX_SUM));
        assert_eq!(formula(MAX_N - 1), MAX_SUM - MAX_N);
        assert_eq!(checked_formula(MAX_N + 1), None);
        assert_eq!(checked_formula(u64::MAX), None);
    }

    #[test]
    fn formula_matches_wide_arithmetic() {
        for n in [2u64, 3, 1 << 20, (1 << 32) - 1, 1 << 32, MAX_N - 2, MAX_N] {
            let wide = (n as u128) * (n as u128 + 1) / 2;
            assert_eq!(formula(n) as u128, wide, "formula({n})");
        }
    }
}
