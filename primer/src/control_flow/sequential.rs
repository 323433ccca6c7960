/// Thread `state` through each step in order.
pub fn sequential<T, I>(state: T, steps: I) -> T
where
    I: IntoIterator<Item = fn(T) -> T>,
{
    steps.into_iter().fold(state, |acc, step| step(acc))
}
