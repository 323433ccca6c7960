use crate::error::NumericError;

/// Largest `n` whose factorial fits in a `u64`.
pub const MAX_FACTORIAL_INPUT: u64 = 20;

fn overflow(step: u64) -> NumericError {
    NumericError::Overflow { operation: "factorial", step }
}

pub fn factorial(n: u64) -> Result<u64, NumericError> {
    (2..=n).try_fold(1u64, |acc, i| acc.checked_mul(i).ok_or_else(|| overflow(i)))
}

/// Recursion depth is bounded by [`MAX_FACTORIAL_INPUT`]; larger inputs fail
/// before the first call.
pub fn factorial_recursive(n: u64) -> Result<u64, NumericError> {
    if n > MAX_FACTORIAL_INPUT {
        return Err(overflow(MAX_FACTORIAL_INPUT + 1));
    }
    if n <= 1 {
        return Ok(1);
    }
    factorial_recursive(n - 1)?.checked_mul(n).ok_or_else(|| overflow(n))
}
