//! Digit and power loops from the loops exercises.

use crate::control_flow::looping::looping;
use crate::error::NumericError;

/// Largest exponent whose power of two fits in a `u64`.
pub const MAX_POWER_OF_TWO: u32 = 63;

/// Decimal digits in `n`; zero has one digit.
pub fn digit_count(n: u64) -> u32 {
    if n == 0 {
        return 1;
    }
    let (_, count) =
        looping((n, 0u32), |&(rest, _)| rest > 0, |(rest, count)| (rest / 10, count + 1));
    count
}

/// 2^0 ..= 2^n by repeated doubling.
pub fn powers_of_two(n: u32) -> Result<Vec<u64>, NumericError> {
    if n > MAX_POWER_OF_TWO {
        return Err(NumericError::Overflow {
            operation: "powers_of_two",
            step: u64::from(MAX_POWER_OF_TWO) + 1,
        });
    }
    let mut out = Vec::with_capacity(n as usize + 1);
    let mut power = 1u64;
    for i in 0..=n {
        out.push(power);
        if i < n {
            // bounded by MAX_POWER_OF_TWO above
            power *= 2;
        }
    }
    Ok(out)
}
