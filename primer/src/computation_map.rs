/// Mapping of algorithm functions to type of computation and time complexity.
/// Iterative and recursive forms of the same routine sit side by side.
pub const ALGORITHMS_COMPUTATION_MAP: &[(&str, &str, &str)] = &[
    // Numerical
    ("numerical::gcd::gcd", "Euclidean algorithm", "O(log min(a, b))"),
    ("numerical::gcd::gcd_recursive", "Euclidean algorithm", "O(log min(a, b))"),
    ("numerical::gcd::lcm", "Euclidean algorithm", "O(log min(a, b))"),
    ("numerical::primality::is_prime", "Trial division", "O(sqrt n)"),
    ("numerical::primality::is_prime_naive", "Trial division", "O(n)"),
    ("numerical::sieve::primes_up_to", "Sieve", "O(n log log n)"),
    ("numerical::fibonacci::fibonacci", "Sequence generation", "O(n)"),
    ("numerical::fibonacci::fib_nth", "Sequence generation", "O(n)"),
    ("numerical::fibonacci::fib_recursive", "Sequence generation", "O(2^n)"),
    ("numerical::factorial::factorial", "Product accumulation", "O(n)"),
    ("numerical::factorial::factorial_recursive", "Product accumulation", "O(n)"),
    ("numerical::digits::digit_count", "Digit loop", "O(log n)"),
    ("numerical::digits::powers_of_two", "Doubling loop", "O(n)"),
    // Searching
    ("searching::linear_search::linear_search", "Search", "O(n)"),
    ("searching::binary_search::binary_search", "Search", "O(log n)"),
    // Extrema
    ("extrema::min_max::min_max", "Scan", "O(n)"),
    ("extrema::min_max::find_max", "Scan", "O(n)"),
    ("extrema::min_max::find_min", "Scan", "O(n)"),
    // Sorting
    ("sorting::bubble_sort::bubble_sort", "Sorting", "O(n^2)"),
];

/// Row for `path`, if it is mapped.
pub fn lookup(path: &str) -> Option<(&'static str, &'static str)> {
    ALGORITHMS_COMPUTATION_MAP
        .iter()
        .find(|(p, _, _)| *p == path)
        .map(|&(_, kind, complexity)| (kind, complexity))
}
