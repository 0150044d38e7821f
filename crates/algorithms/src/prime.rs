//! Prime enumeration and primality testing by trial division

/// Check whether `n` is prime
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut divisor = 3;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }

    true
}

/// All primes `<= bound`, in ascending order
///
/// The iterator is lazy and a pure function of `bound`; call again (or clone
/// it) to restart.
pub fn primes_up_to(bound: u64) -> impl Iterator<Item = u64> + Clone {
    (2..=bound).filter(|&n| is_prime(n))
}
