pub mod binary_search;
pub mod linear_search;

/// Classic sentinel form of a search result: the index, or -1 when absent.
pub fn to_sentinel(found: Option<usize>) -> i64 {
    found.map_or(-1, |i| i as i64)
}
