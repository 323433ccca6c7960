/// Route `state` through `then` or `otherwise` depending on `predicate`.
pub fn branching<T, U>(
    state: T,
    predicate: impl FnOnce(&T) -> bool,
    then: impl FnOnce(T) -> U,
    otherwise: impl FnOnce(T) -> U,
) -> U {
    if predicate(&state) {
        then(state)
    } else {
        otherwise(state)
    }
}
