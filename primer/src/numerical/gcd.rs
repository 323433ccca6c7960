//! Greatest common divisor by the Euclidean algorithm.
//!
//! Equations:
//!   gcd(a, 0) = a
//!   gcd(a, b) = gcd(b, a mod b)      b strictly decreases, so this terminates
//!   lcm(a, b) = a / gcd(a, b) * b    lcm(x, 0) = 0

pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

pub fn gcd_recursive(a: u64, b: u64) -> u64 {
    if b == 0 {
        return a;
    }
    gcd_recursive(b, a % b)
}

/// `None` when the multiple does not fit in a `u64`.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}
