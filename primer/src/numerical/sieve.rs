/// All primes in `0..=n`, ascending (sieve of Eratosthenes).
///
/// # Panics
///
/// Allocates one flag per candidate, so `n` must be below `usize::MAX`.
pub fn primes_up_to(n: usize) -> Vec<usize> {
    let Some(len) = n.checked_add(1) else {
        panic!("sieve bound {n} leaves no room for 0..=n");
    };
    let mut is_prime = vec![true; len];
    is_prime[0] = false;
    if n >= 1 {
        is_prime[1] = false;
    }

    let mut i = 2;
    while i * i <= n {
        if is_prime[i] {
            for j in (i * i..=n).step_by(i) {
                is_prime[j] = false;
            }
        }
        i += 1;
    }

    is_prime
        .iter()
        .enumerate()
        .filter_map(|(i, &p)| if p { Some(i) } else { None })
        .collect()
}
