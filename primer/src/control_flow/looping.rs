/// Apply `step` while `predicate` holds, returning the final state.
pub fn looping<T, P, S>(mut state: T, mut predicate: P, mut step: S) -> T
where
    P: FnMut(&T) -> bool,
    S: FnMut(T) -> T,
{
    while predicate(&state) {
        state = step(state);
    }
    state
}

/// Apply `step` exactly `times` times; the `for` counterpart of [`looping`].
pub fn counted<T, S>(mut state: T, times: usize, mut step: S) -> T
where
    S: FnMut(usize, T) -> T,
{
    for i in 0..times {
        state = step(i, state);
    }
    state
}

/// Yield values up to, not including, the first sentinel.
pub fn until_sentinel<I, F>(values: I, is_sentinel: F) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    F: Fn(&I::Item) -> bool,
{
    values.into_iter().take_while(move |v| !is_sentinel(v))
}
