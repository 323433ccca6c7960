//! Fibonacci sequence 0, 1, 1, 2, 3, 5, ...
//!
//! Variables:
//!   prev, curr : two running terms, (prev, curr) <- (curr, prev + curr)
//!
//! Equations:
//!   fib(0) = 0, fib(1) = 1, fib(k) = fib(k-1) + fib(k-2)
//!   fib(93) is the last term representable in u64, so at most 94 terms exist.

use crate::error::NumericError;

/// Sequence iterator. Fused: ends after the last term that fits in `u64`.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    prev: Option<u64>,
    curr: Option<u64>,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self { prev: Some(0), curr: Some(1) }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let out = self.prev?;
        let next = self.curr.and_then(|c| out.checked_add(c));
        self.prev = self.curr;
        self.curr = next;
        Some(out)
    }
}

impl std::iter::FusedIterator for Fibonacci {}

/// First `n` terms, computed iteratively.
pub fn fibonacci(n: usize) -> Result<Vec<u64>, NumericError> {
    let terms: Vec<u64> = Fibonacci::new().take(n).collect();
    if terms.len() < n {
        return Err(NumericError::Overflow { operation: "fibonacci", step: terms.len() as u64 });
    }
    Ok(terms)
}

/// The `n`th term in O(n) time and O(1) state.
pub fn fib_nth(n: u32) -> Result<u64, NumericError> {
    let (mut prev, mut curr) = (0u64, Some(1u64));
    for step in 0..n {
        let c = curr
            .ok_or(NumericError::Overflow { operation: "fibonacci", step: u64::from(step) + 1 })?;
        curr = prev.checked_add(c);
        prev = c;
    }
    Ok(prev)
}

/// Exponential-time recursive form, the contrast to [`fib_nth`].
pub fn fib_recursive(n: u32) -> u64 {
    if n <= 1 {
        return u64::from(n);
    }
    fib_recursive(n - 1) + fib_recursive(n - 2)
}
