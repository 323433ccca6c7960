//! Loop kernels from the loops exercises.

use serde::Serialize;

use super::looping::{counted, until_sentinel};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeSummary {
    pub total: usize,
    pub at_or_above: usize,
    /// `None` when no grade preceded the sentinel.
    pub percentage: Option<f64>,
}

/// Tally grades up to the first negative value, which acts as the sentinel.
pub fn count_until_sentinel<I>(grades: I, threshold: i64) -> GradeSummary
where
    I: IntoIterator<Item = i64>,
{
    let (total, at_or_above) = until_sentinel(grades, |&g| g < 0)
        .fold((0usize, 0usize), |(total, hits), g| (total + 1, hits + usize::from(g >= threshold)));
    let percentage = (total > 0).then(|| at_or_above as f64 / total as f64 * 100.0);
    GradeSummary { total, at_or_above, percentage }
}

/// Rows `(k, n * k)` for `k` in `1..=upto`.
pub fn multiplication_table(n: u32, upto: u32) -> Vec<(u32, u64)> {
    counted(Vec::with_capacity(upto as usize), upto as usize, |i, mut rows| {
        let k = i as u32 + 1;
        rows.push((k, u64::from(n) * u64::from(k)));
        rows
    })
}

/// `from, from - 1, ..., 0`.
pub fn countdown(from: u32) -> Vec<u32> {
    (0..=from).rev().collect()
}
