//! Primality by trial division.
//!
//! Two variants share one contract: `false` for n < 2, otherwise `false` on
//! the first exact divisor found.
//!
//!   naive:     candidates 2..n                  O(n)
//!   optimized: 2, then odd candidates i*i <= n  O(sqrt n)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimalityStrategy {
    Naive,
    #[default]
    Optimized,
}

pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut i = 3u64;
    // i <= n / i keeps the bound check clear of overflow near u64::MAX
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

pub fn is_prime_naive(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    (2..n).all(|i| n % i != 0)
}

pub fn is_prime_with(n: u64, strategy: PrimalityStrategy) -> bool {
    match strategy {
        PrimalityStrategy::Naive => is_prime_naive(n),
        PrimalityStrategy::Optimized => is_prime(n),
    }
}
