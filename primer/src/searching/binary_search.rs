use std::cmp::Ordering;

/// Search a slice sorted ascending, over inclusive bounds `[left, right]`.
///
/// `mid = left + (right - left) / 2` keeps the midpoint in range for any
/// length. Returns `None` once the interval is empty.
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }
    let (mut left, mut right) = (0usize, arr.len() - 1);
    while left <= right {
        let mid = left + (right - left) / 2;
        match arr[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    return None;
                }
                right = mid - 1;
            }
        }
    }
    None
}
