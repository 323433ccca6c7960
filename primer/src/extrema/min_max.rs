//! Single-pass extrema scans.
//!
//! Variables:
//!   max, min : seeded with arr[0]
//!
//! Equations:
//!   for x in arr[1..]:  x > max => max = x,  x < min => min = x    O(N)
//!   N = 0 => None

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MinMax<T> {
    pub min: T,
    pub max: T,
}

pub fn min_max<T: PartialOrd + Copy>(arr: &[T]) -> Option<MinMax<T>> {
    let (&first, rest) = arr.split_first()?;
    let mut out = MinMax { min: first, max: first };
    for &x in rest {
        if x > out.max {
            out.max = x;
        }
        if x < out.min {
            out.min = x;
        }
    }
    Some(out)
}

pub fn find_max<T: PartialOrd + Copy>(arr: &[T]) -> Option<T> {
    let (&first, rest) = arr.split_first()?;
    Some(rest.iter().fold(first, |best, &x| if x > best { x } else { best }))
}

pub fn find_min<T: PartialOrd + Copy>(arr: &[T]) -> Option<T> {
    let (&first, rest) = arr.split_first()?;
    Some(rest.iter().fold(first, |best, &x| if x < best { x } else { best }))
}
